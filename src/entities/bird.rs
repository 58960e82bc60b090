use super::movable::{random_height, Body, ColliderTag, MoveDirection, Movable, Vec2};
use crate::core::constants::{
    BIRD_CHAT_CHANCE, BIRD_DRIFT_SPEED, BIRD_MOVE_RIGHT_CHANCE, BIRD_VARIATIONS,
};
use crate::core::{percent_chance, KindConfig};
use rand::Rng;

/// Lines a passing bird may say in its chat bubble.
pub const BIRD_CHAT_MESSAGES: &[&str] = &[
    "What's quackin', good lookin'?",
    "Hey, wingman!",
    "Tweet dreams!",
    "Fly high, don't be shy!",
    "Keep calm and chirp on!",
    "You're eggcellent!",
    "Winging it today?",
    "What the flock!",
    "Peck on, peck off.",
    "Just winging by!",
    "Spread your wings and fly!",
    "You're tweet-tastic!",
    "Flying solo today?",
    "Keep your beak up!",
    "Chirp happens!",
    "A little birdie told me...",
    "Flap it out!",
    "Life's a chirp!",
    "Eggciting times ahead!",
    "What's up, beak face?",
    "You're so fly!",
    "Bird is the word!",
    "Let's get this bread!",
    "Shake your tail feathers!",
    "Wing it like a boss!",
    "Feathered and fabulous!",
    "Stay chirpy!",
    "You're the tweetest!",
    "Flap till you drop!",
    "Peckish, aren't we?",
    "Squawk to the walk!",
    "Catch you on the fly!",
    "Don't ruffle my feathers!",
    "High-flying fun!",
    "Quirky chirp!",
    "Feather in your cap!",
    "Keep flapping!",
    "Feathered friends forever!",
    "Tweet it out!",
    "Birds of paradise!",
    "Squawk and awe!",
    "Up, up, and away!",
    "Beak sneak!",
    "Chirp-tastic!",
    "Flap happy!",
    "Bird-brained fun!",
    "Fluff and stuff!",
];

/// Ambient bird. Harmless to the player; flies left fast or drifts facing right.
#[derive(Debug, Clone)]
pub struct Bird {
    body: Body,
    config: KindConfig,
    facing_right: bool,
    /// Index into the bird look palette.
    pub variation: usize,
    pub chat: Option<&'static str>,
}

impl Bird {
    pub fn new(config: KindConfig) -> Self {
        Self {
            body: Body::default(),
            config,
            facing_right: false,
            variation: 0,
            chat: None,
        }
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    /// After the player dies, a drifting bird turns its drift into a full-speed exit.
    pub fn fly_away_after_player_death(&mut self) {
        if self.body.velocity.x == BIRD_DRIFT_SPEED {
            self.body.velocity = Vec2::new(-self.config.speed, 0.0);
        }
    }
}

impl Movable for Bird {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> ColliderTag {
        ColliderTag::Bird
    }

    fn teleport_to_spawn<R: Rng>(&mut self, rng: &mut R) {
        let y = random_height(rng, self.config.spawn_y_range);
        self.body.position = Vec2::new(self.config.spawn_x, y);
    }

    fn move_in(&mut self, direction: MoveDirection) {
        match direction {
            MoveDirection::Left => {
                self.body.velocity = Vec2::new(self.config.speed, 0.0);
                self.facing_right = false;
            }
            MoveDirection::Right => {
                self.body.velocity = Vec2::new(BIRD_DRIFT_SPEED, 0.0);
                self.facing_right = true;
            }
            MoveDirection::None => {
                log::warn!("Invalid direction {:?}: bird can only move left or right", direction)
            }
        }
    }

    fn on_enable<R: Rng>(&mut self, rng: &mut R) {
        self.teleport_to_spawn(rng);
        self.variation = rng.gen_range(0..BIRD_VARIATIONS);

        if percent_chance(rng, BIRD_MOVE_RIGHT_CHANCE) {
            self.move_in(MoveDirection::Right);
        } else {
            self.move_in(MoveDirection::Left);
        }

        self.chat = if percent_chance(rng, BIRD_CHAT_CHANCE) {
            Some(BIRD_CHAT_MESSAGES[rng.gen_range(0..BIRD_CHAT_MESSAGES.len())])
        } else {
            None
        };
    }
}
