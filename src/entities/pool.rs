//! Fixed-capacity pools of pre-built entities.

use super::movable::{MoveDirection, Movable};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T: Movable> Pool<T> {
    /// Build `capacity` inactive entities with `make`.
    pub fn with_capacity(capacity: usize, mut make: impl FnMut() -> T) -> Self {
        let items = (0..capacity)
            .map(|_| {
                let mut item = make();
                item.set_active(false);
                item
            })
            .collect();
        Self { items }
    }

    /// Activate the first inactive entry and return its slot.
    ///
    /// A full pool drops the spawn and returns `None`.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        let index = self.items.iter().position(|item| !item.is_active())?;
        let item = &mut self.items[index];
        item.set_active(true);
        item.on_enable(rng);
        Some(index)
    }

    pub fn deactivate(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.set_active(false);
        }
    }

    pub fn deactivate_all(&mut self) {
        for item in &mut self.items {
            item.set_active(false);
        }
    }

    /// Point every entity (active or not) in one direction.
    pub fn move_all(&mut self, direction: MoveDirection) {
        for item in &mut self.items {
            item.move_in(direction);
        }
    }

    pub fn step_active(&mut self, dt: f64) {
        for item in self.items.iter_mut().filter(|item| item.is_active()) {
            item.step(dt);
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active()).count()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|item| item.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::entities::Coin;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn coin_pool(capacity: usize) -> Pool<Coin> {
        let config = Difficulty::Easy.preset().coin_config();
        Pool::with_capacity(capacity, || Coin::new(config))
    }

    #[test]
    fn test_starts_inactive() {
        let pool = coin_pool(3);
        assert_eq!(pool.capacity(), 3);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_spawn_is_first_fit() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut pool = coin_pool(3);
        assert_eq!(pool.spawn(&mut rng), Some(0));
        assert_eq!(pool.spawn(&mut rng), Some(1));
        pool.deactivate(0);
        assert_eq!(pool.spawn(&mut rng), Some(0));
        assert_eq!(pool.spawn(&mut rng), Some(2));
    }

    #[test]
    fn test_exhausted_pool_drops_spawn() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut pool = coin_pool(2);
        pool.spawn(&mut rng);
        pool.spawn(&mut rng);
        assert_eq!(pool.spawn(&mut rng), None);
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_spawn_resets_entity() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut pool = coin_pool(1);
        let i = pool.spawn(&mut rng).unwrap();
        pool.step_active(1.0);
        assert!(pool.get(i).unwrap().position().x < 8.0);
        pool.deactivate(i);
        pool.spawn(&mut rng);
        assert_eq!(pool.get(i).unwrap().position().x, 8.0);
    }

    #[test]
    fn test_step_only_moves_active() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut pool = coin_pool(2);
        pool.spawn(&mut rng);
        let idle_before = pool.get(1).unwrap().position();
        pool.step_active(0.5);
        assert_eq!(pool.get(0).unwrap().position().x, 8.0 - 1.5);
        assert_eq!(pool.get(1).unwrap().position(), idle_before);
    }

    #[test]
    fn test_deactivate_all() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut pool = coin_pool(4);
        for _ in 0..4 {
            pool.spawn(&mut rng);
        }
        pool.deactivate_all();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.iter_active().count(), 0);
    }
}
