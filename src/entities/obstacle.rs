use super::movable::{random_height, Body, ColliderTag, MoveDirection, Movable, Vec2};
use crate::core::constants::{
    OBSTACLE_GAP_HALF, OBSTACLE_HALF_WIDTH, PING_PONG_BOUND, PING_PONG_UP_CHANCE,
};
use crate::core::{percent_chance, KindConfig};
use rand::Rng;

/// A pipe pair with a gap, scrolling left while drifting up and down.
#[derive(Debug, Clone)]
pub struct Obstacle {
    body: Body,
    config: KindConfig,
    /// Signed vertical speed; flips on boundary contact.
    ping_pong: f64,
    direction: MoveDirection,
}

impl Obstacle {
    pub fn new(config: KindConfig) -> Self {
        Self {
            body: Body::default(),
            config,
            ping_pong: config.ping_pong,
            direction: MoveDirection::None,
        }
    }

    pub fn ping_pong(&self) -> f64 {
        self.ping_pong
    }

    pub fn direction(&self) -> MoveDirection {
        self.direction
    }

    /// Reverse vertical drift. Called when the obstacle touches a boundary collider.
    pub fn on_trigger_enter(&mut self, other: &ColliderTag) {
        if *other == ColliderTag::Boundary {
            self.ping_pong = -self.ping_pong;
            if self.direction == MoveDirection::Left {
                self.body.velocity = Vec2::new(self.config.speed, self.ping_pong);
            }
        }
    }

    /// Bottom edge of the upper pipe / top edge of the lower pipe.
    pub fn gap_bounds(&self) -> (f64, f64) {
        let y = self.body.position.y;
        (y - OBSTACLE_GAP_HALF, y + OBSTACLE_GAP_HALF)
    }

    /// Whether a circle touches either hazard half of this obstacle.
    pub fn hits(&self, center: Vec2, radius: f64) -> bool {
        if !self.body.active {
            return false;
        }
        let dx = (center.x - self.body.position.x).abs();
        if dx > OBSTACLE_HALF_WIDTH + radius {
            return false;
        }
        let (gap_bottom, gap_top) = self.gap_bounds();
        center.y + radius > gap_top || center.y - radius < gap_bottom
    }
}

impl Movable for Obstacle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> ColliderTag {
        ColliderTag::Obstacle
    }

    fn teleport_to_spawn<R: Rng>(&mut self, rng: &mut R) {
        let y = random_height(rng, self.config.spawn_y_range);
        self.body.position = Vec2::new(self.config.spawn_x, y);
    }

    fn move_in(&mut self, direction: MoveDirection) {
        match direction {
            MoveDirection::Left => {
                self.body.velocity = Vec2::new(self.config.speed, self.ping_pong);
                self.direction = direction;
            }
            MoveDirection::None => {
                self.body.velocity = Vec2::ZERO;
                self.direction = direction;
            }
            MoveDirection::Right => {
                log::warn!("Invalid direction {:?}: obstacle can only move left or stop", direction)
            }
        }
    }

    fn on_enable<R: Rng>(&mut self, rng: &mut R) {
        self.teleport_to_spawn(rng);
        let magnitude = self.config.ping_pong.abs();
        self.ping_pong = if percent_chance(rng, PING_PONG_UP_CHANCE) {
            magnitude
        } else {
            -magnitude
        };
        self.move_in(MoveDirection::Left);
    }

    fn step(&mut self, dt: f64) {
        self.body.integrate(dt);
        let y = self.body.position.y;
        let heading_out = (y >= PING_PONG_BOUND && self.ping_pong > 0.0)
            || (y <= -PING_PONG_BOUND && self.ping_pong < 0.0);
        if heading_out {
            self.on_trigger_enter(&ColliderTag::Boundary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn obstacle(difficulty: Difficulty) -> Obstacle {
        Obstacle::new(difficulty.preset().obstacle_config())
    }

    #[test]
    fn test_enable_spawn_and_velocity() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut o = obstacle(Difficulty::Medium);
        o.on_enable(&mut rng);
        assert_eq!(o.position().x, 6.0);
        assert!((-1.0..=1.0).contains(&o.position().y));
        assert_eq!(o.velocity().x, -4.0);
        assert_eq!(o.velocity().y.abs(), 0.45);
        assert_eq!(o.velocity().y, o.ping_pong());
    }

    #[test]
    fn test_ping_pong_sign_is_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut o = obstacle(Difficulty::Easy);
        let mut ups = 0;
        for _ in 0..400 {
            o.on_enable(&mut rng);
            if o.ping_pong() > 0.0 {
                ups += 1;
            }
        }
        assert!(ups > 140 && ups < 260, "ups = {}", ups);
    }

    #[test]
    fn test_boundary_contact_flips() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut o = obstacle(Difficulty::Hard);
        o.on_enable(&mut rng);
        let before = o.ping_pong();
        o.on_trigger_enter(&ColliderTag::Boundary);
        assert_eq!(o.ping_pong(), -before);
        assert_eq!(o.velocity().y, -before);
        o.on_trigger_enter(&ColliderTag::Coin);
        assert_eq!(o.ping_pong(), -before);
    }

    #[test]
    fn test_step_bounces_off_upper_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut o = obstacle(Difficulty::Hard);
        o.on_enable(&mut rng);
        o.body_mut().position.y = PING_PONG_BOUND - 0.001;
        if o.ping_pong() < 0.0 {
            o.on_trigger_enter(&ColliderTag::Boundary);
        }
        o.step(0.1);
        assert!(o.ping_pong() < 0.0);
        assert!(o.velocity().y < 0.0);
    }

    #[test]
    fn test_stays_within_bounds_over_time() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut o = obstacle(Difficulty::Hard);
        o.on_enable(&mut rng);
        for _ in 0..2000 {
            o.step(0.016);
            assert!(o.position().y.abs() <= PING_PONG_BOUND + 0.02);
        }
    }

    #[test]
    fn test_stop_then_bounce_keeps_still() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut o = obstacle(Difficulty::Easy);
        o.on_enable(&mut rng);
        o.move_in(MoveDirection::None);
        o.on_trigger_enter(&ColliderTag::Boundary);
        assert_eq!(o.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_hits_pipes_not_gap() {
        let mut o = obstacle(Difficulty::Easy);
        o.set_active(true);
        o.body_mut().position = Vec2::new(0.0, 0.0);
        assert!(!o.hits(Vec2::new(0.0, 0.0), 0.25));
        assert!(o.hits(Vec2::new(0.0, 1.0), 0.25));
        assert!(o.hits(Vec2::new(0.0, -1.0), 0.25));
        assert!(!o.hits(Vec2::new(2.0, 2.0), 0.25));
        o.set_active(false);
        assert!(!o.hits(Vec2::new(0.0, 1.0), 0.25));
    }

    #[test]
    fn test_right_is_ignored() {
        let mut o = obstacle(Difficulty::Easy);
        o.move_in(MoveDirection::Right);
        assert_eq!(o.direction(), MoveDirection::None);
        assert_eq!(o.velocity(), Vec2::ZERO);
    }
}
