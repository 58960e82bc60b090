//! Boundary trigger that returns entities to their pool once they leave the play area.

use super::movable::{ColliderTag, Movable};
use super::pool::Pool;
use crate::core::constants::{RECYCLE_LEFT_X, RECYCLE_RIGHT_X};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recycler {
    pub left_x: f64,
    pub right_x: f64,
}

impl Default for Recycler {
    fn default() -> Self {
        Self {
            left_x: RECYCLE_LEFT_X,
            right_x: RECYCLE_RIGHT_X,
        }
    }
}

impl Recycler {
    /// Whether a collider touching the recycler should be deactivated.
    pub fn accepts(&self, tag: &ColliderTag) -> bool {
        match tag {
            ColliderTag::Coin | ColliderTag::Obstacle | ColliderTag::Bird => true,
            ColliderTag::Enemy => false,
            other => {
                log::warn!("Unknown collider {:?} touched the recycler", other);
                false
            }
        }
    }

    pub fn is_outside(&self, x: f64) -> bool {
        x < self.left_x || x > self.right_x
    }

    /// Deactivate every active entity past either boundary. Returns how many were recycled.
    pub fn sweep<T: Movable>(&self, pool: &mut Pool<T>) -> usize {
        let mut recycled = 0;
        for item in pool.iter_mut() {
            if item.is_active() && self.is_outside(item.position().x) && self.accepts(&item.tag()) {
                item.set_active(false);
                recycled += 1;
            }
        }
        recycled
    }
}
