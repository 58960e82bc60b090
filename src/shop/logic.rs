//! Purchase rules for cosmetics and skill levels.

use crate::audio::{CueQueue, SoundCue, BUY_VARIANTS};
use crate::core::constants::{MAX_SKILL_LEVEL, SKILL_UNLOCK_COST};
use crate::progress::{CosmeticCategory, ProgressState, SkillTrack};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Coins spent.
    Bought(u32),
    InsufficientCoins,
    AlreadyOwned,
    MaxLevel,
    /// Index outside the catalog.
    Invalid,
}

impl PurchaseOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, PurchaseOutcome::Bought(_))
    }
}

/// Check if a cosmetic can be bought right now.
pub fn can_afford_cosmetic(progress: &ProgressState, category: CosmeticCategory, index: usize) -> bool {
    index < category.catalog_size()
        && !progress.cosmetics(category).is_bought(index)
        && progress.coins >= category.unlock_cost()
}

/// Try to buy a cosmetic item. Success deducts the cost, marks it bought and selects it.
/// Any rejection pushes a reject cue and leaves progress untouched.
pub fn try_buy_cosmetic(
    progress: &mut ProgressState,
    category: CosmeticCategory,
    index: usize,
    cues: &mut CueQueue,
) -> PurchaseOutcome {
    let outcome = if index >= category.catalog_size() {
        PurchaseOutcome::Invalid
    } else if progress.cosmetics(category).is_bought(index) {
        PurchaseOutcome::AlreadyOwned
    } else if progress.coins < category.unlock_cost() {
        PurchaseOutcome::InsufficientCoins
    } else {
        let cost = category.unlock_cost();
        progress.coins -= cost;
        let slot = progress.cosmetics_mut(category);
        slot.mark_bought(index);
        slot.select(index);
        log::info!("Bought {} #{} for {} coins", category.name(), index, cost);
        PurchaseOutcome::Bought(cost)
    };

    push_outcome_cue(outcome, index, cues);
    outcome
}

/// Try to raise a skill by one level.
pub fn try_buy_skill(
    progress: &mut ProgressState,
    track: SkillTrack,
    cues: &mut CueQueue,
) -> PurchaseOutcome {
    let level = progress.skill_level(track);
    let outcome = if level >= MAX_SKILL_LEVEL {
        PurchaseOutcome::MaxLevel
    } else if progress.coins < SKILL_UNLOCK_COST {
        PurchaseOutcome::InsufficientCoins
    } else {
        progress.coins -= SKILL_UNLOCK_COST;
        *progress.skill_level_mut(track) = level + 1;
        log::info!("{} raised to level {}", track.name(), level + 1);
        PurchaseOutcome::Bought(SKILL_UNLOCK_COST)
    };

    push_outcome_cue(outcome, level as usize, cues);
    outcome
}

fn push_outcome_cue(outcome: PurchaseOutcome, seed: usize, cues: &mut CueQueue) {
    match outcome {
        PurchaseOutcome::Bought(_) => cues.push(SoundCue::Buy((seed % BUY_VARIANTS as usize) as u8)),
        _ => cues.push(SoundCue::Reject),
    }
}

/// Level text shown under a skill button, e.g. `2 / 3`.
pub fn skill_level_text(level: u8) -> String {
    format!("{} / {}", level, MAX_SKILL_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rich(coins: u32) -> ProgressState {
        ProgressState {
            coins,
            ..ProgressState::default()
        }
    }

    #[test]
    fn test_insufficient_funds_rejected() {
        let mut progress = rich(40);
        let mut cues = CueQueue::new();
        let outcome = try_buy_cosmetic(&mut progress, CosmeticCategory::Bird, 2, &mut cues);
        assert_eq!(outcome, PurchaseOutcome::InsufficientCoins);
        assert_eq!(progress.coins, 40);
        assert!(!progress.birds.is_bought(2));
        assert_eq!(cues.last(), Some(SoundCue::Reject));
    }

    #[test]
    fn test_exact_balance_buys_and_selects() {
        let mut progress = rich(50);
        let mut cues = CueQueue::new();
        let outcome = try_buy_cosmetic(&mut progress, CosmeticCategory::Background, 5, &mut cues);
        assert_eq!(outcome, PurchaseOutcome::Bought(50));
        assert_eq!(progress.coins, 0);
        assert!(progress.backgrounds.is_bought(5));
        assert_eq!(progress.backgrounds.selected(), 5);
        assert!(matches!(cues.last(), Some(SoundCue::Buy(_))));
    }

    #[test]
    fn test_owned_item_not_rebought() {
        let mut progress = rich(200);
        let mut cues = CueQueue::new();
        try_buy_cosmetic(&mut progress, CosmeticCategory::Obstacle, 1, &mut cues);
        let outcome = try_buy_cosmetic(&mut progress, CosmeticCategory::Obstacle, 1, &mut cues);
        assert_eq!(outcome, PurchaseOutcome::AlreadyOwned);
        assert_eq!(progress.coins, 150);
        assert_eq!(cues.last(), Some(SoundCue::Reject));
    }

    #[test]
    fn test_free_item_counts_as_owned() {
        let mut progress = rich(200);
        let mut cues = CueQueue::new();
        assert_eq!(
            try_buy_cosmetic(&mut progress, CosmeticCategory::Bird, 0, &mut cues),
            PurchaseOutcome::AlreadyOwned
        );
    }

    #[test]
    fn test_out_of_catalog_index() {
        let mut progress = rich(200);
        let mut cues = CueQueue::new();
        assert_eq!(
            try_buy_cosmetic(&mut progress, CosmeticCategory::Obstacle, 6, &mut cues),
            PurchaseOutcome::Invalid
        );
        assert_eq!(progress.coins, 200);
    }

    #[test]
    fn test_skill_levels_up_to_max() {
        let mut progress = rich(1000);
        let mut cues = CueQueue::new();
        for expected in 1..=3 {
            let outcome = try_buy_skill(&mut progress, SkillTrack::CoinSpawn, &mut cues);
            assert!(outcome.is_success());
            assert_eq!(progress.skill1_level, expected);
        }
        assert_eq!(progress.coins, 700);
        assert_eq!(
            try_buy_skill(&mut progress, SkillTrack::CoinSpawn, &mut cues),
            PurchaseOutcome::MaxLevel
        );
        assert_eq!(progress.coins, 700);
        assert_eq!(cues.last(), Some(SoundCue::Reject));
    }

    #[test]
    fn test_skill_insufficient_funds() {
        let mut progress = rich(99);
        let mut cues = CueQueue::new();
        assert_eq!(
            try_buy_skill(&mut progress, SkillTrack::Invulnerability, &mut cues),
            PurchaseOutcome::InsufficientCoins
        );
        assert_eq!(progress.skill2_level, 0);
        assert_eq!(progress.coins, 99);
    }

    #[test]
    fn test_can_afford_cosmetic() {
        let progress = rich(50);
        assert!(can_afford_cosmetic(&progress, CosmeticCategory::Bird, 1));
        assert!(!can_afford_cosmetic(&progress, CosmeticCategory::Bird, 0));
        assert!(!can_afford_cosmetic(&rich(49), CosmeticCategory::Bird, 1));
    }

    #[test]
    fn test_skill_level_text() {
        assert_eq!(skill_level_text(2), "2 / 3");
    }
}
