use super::movable::{random_height, Body, ColliderTag, MoveDirection, Movable, Vec2};
use crate::core::KindConfig;
use rand::Rng;

/// Collectible. Only moves left, or stops when the player dies.
#[derive(Debug, Clone)]
pub struct Coin {
    body: Body,
    config: KindConfig,
}

impl Coin {
    pub fn new(config: KindConfig) -> Self {
        Self {
            body: Body::default(),
            config,
        }
    }

    pub fn config(&self) -> &KindConfig {
        &self.config
    }
}

impl Movable for Coin {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> ColliderTag {
        ColliderTag::Coin
    }

    fn teleport_to_spawn<R: Rng>(&mut self, rng: &mut R) {
        let y = random_height(rng, self.config.spawn_y_range);
        self.body.position = Vec2::new(self.config.spawn_x, y);
    }

    fn move_in(&mut self, direction: MoveDirection) {
        match direction {
            MoveDirection::Left => self.body.velocity = Vec2::new(self.config.speed, 0.0),
            MoveDirection::None => self.body.velocity = Vec2::ZERO,
            MoveDirection::Right => {
                log::warn!("Invalid direction {:?}: coin can only move left or stop", direction)
            }
        }
    }

    fn on_enable<R: Rng>(&mut self, rng: &mut R) {
        self.teleport_to_spawn(rng);
        self.move_in(MoveDirection::Left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn coin(difficulty: Difficulty) -> Coin {
        Coin::new(difficulty.preset().coin_config())
    }

    #[test]
    fn test_enable_places_at_spawn_moving_left() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut c = coin(Difficulty::Hard);
        c.on_enable(&mut rng);
        assert_eq!(c.position().x, 8.0);
        assert!((-2.0..=2.0).contains(&c.position().y));
        assert_eq!(c.velocity(), Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_stop() {
        let mut c = coin(Difficulty::Easy);
        c.move_in(MoveDirection::Left);
        c.move_in(MoveDirection::None);
        assert_eq!(c.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_right_is_ignored() {
        let mut c = coin(Difficulty::Medium);
        c.move_in(MoveDirection::Left);
        c.move_in(MoveDirection::Right);
        assert_eq!(c.velocity(), Vec2::new(-4.0, 0.0));
    }
}
