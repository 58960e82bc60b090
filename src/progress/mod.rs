//! Persisted progress: coins, scores, unlocks, skills and options.
//!
//! One [`ProgressState`] is owned by the app and lent to the menu or the
//! running game in turn, so there is only ever one writer.

pub mod cosmetics;
pub mod state;
pub mod store;

pub use cosmetics::{CosmeticCategory, CosmeticSlot, SkillTrack};
pub use state::{Options, ProgressState};
pub use store::{PrefValue, PrefsStore};
