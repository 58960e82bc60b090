//! The single owned record of player progress and options.

use super::cosmetics::{CosmeticCategory, CosmeticSlot, SkillTrack};
use super::store::PrefsStore;
use crate::core::constants::{DEFAULT_FLAP_KEY, DEFAULT_HIGH_SCORE, DEFAULT_VOLUME, MAX_SKILL_LEVEL};
use crate::core::Difficulty;
use crate::input::FlapKey;

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub difficulty: Difficulty,
    pub show_fps: bool,
    pub spawn_birds: bool,
    /// 0.0 (muted) or 1.0.
    pub volume: f32,
    pub flap_key: FlapKey,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            show_fps: true,
            spawn_birds: true,
            volume: DEFAULT_VOLUME,
            flap_key: FlapKey::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    pub coins: u32,
    pub high_score: u32,
    pub total_deaths: u32,
    pub birds: CosmeticSlot,
    pub backgrounds: CosmeticSlot,
    pub obstacles: CosmeticSlot,
    pub skill1_level: u8,
    pub skill2_level: u8,
    pub options: Options,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            coins: 0,
            high_score: DEFAULT_HIGH_SCORE,
            total_deaths: 0,
            birds: CosmeticSlot::new(CosmeticCategory::Bird),
            backgrounds: CosmeticSlot::new(CosmeticCategory::Background),
            obstacles: CosmeticSlot::new(CosmeticCategory::Obstacle),
            skill1_level: 0,
            skill2_level: 0,
            options: Options::default(),
        }
    }
}

fn non_negative(store: &PrefsStore, key: &str, default: i64) -> u32 {
    let value = store.get_int(key, default);
    u32::try_from(value).unwrap_or_else(|_| {
        log::warn!("Stored {}={} is out of range, using {}", key, value, default);
        default.max(0) as u32
    })
}

impl ProgressState {
    pub fn cosmetics(&self, category: CosmeticCategory) -> &CosmeticSlot {
        match category {
            CosmeticCategory::Bird => &self.birds,
            CosmeticCategory::Background => &self.backgrounds,
            CosmeticCategory::Obstacle => &self.obstacles,
        }
    }

    pub fn cosmetics_mut(&mut self, category: CosmeticCategory) -> &mut CosmeticSlot {
        match category {
            CosmeticCategory::Bird => &mut self.birds,
            CosmeticCategory::Background => &mut self.backgrounds,
            CosmeticCategory::Obstacle => &mut self.obstacles,
        }
    }

    pub fn skill_level(&self, track: SkillTrack) -> u8 {
        match track {
            SkillTrack::CoinSpawn => self.skill1_level,
            SkillTrack::Invulnerability => self.skill2_level,
        }
    }

    pub fn skill_level_mut(&mut self, track: SkillTrack) -> &mut u8 {
        match track {
            SkillTrack::CoinSpawn => &mut self.skill1_level,
            SkillTrack::Invulnerability => &mut self.skill2_level,
        }
    }

    /// Record a finished round's score. Returns true if it beat the high score.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    pub fn grant_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Read every key, falling back to named defaults.
    pub fn load(store: &PrefsStore) -> Self {
        let mut state = Self {
            coins: non_negative(store, "Coin", 0),
            high_score: non_negative(store, "HighestScore", DEFAULT_HIGH_SCORE as i64),
            total_deaths: non_negative(store, "TotalDeaths", 0),
            ..Self::default()
        };

        for category in CosmeticCategory::ALL {
            let prefix = category.bought_key_prefix();
            let slot = state.cosmetics_mut(category);
            for i in 1..slot.len() {
                if store.get_int(&format!("{}{}", prefix, i), 0) == 1 {
                    slot.mark_bought(i);
                }
            }
            let selected = store.get_int(category.selected_key(), 0);
            let valid = usize::try_from(selected).is_ok_and(|i| slot.select(i));
            if !valid {
                log::warn!(
                    "Stored {}={} is not an owned item, selecting the default",
                    category.selected_key(),
                    selected
                );
                slot.select(0);
            }
        }

        for track in SkillTrack::ALL {
            let level = store.get_int(track.key(), 0);
            let clamped = level.clamp(0, MAX_SKILL_LEVEL as i64) as u8;
            if clamped as i64 != level {
                log::warn!("Stored {}={} is out of range, using {}", track.key(), level, clamped);
            }
            *state.skill_level_mut(track) = clamped;
        }

        let difficulty = store.get_int("Difficulty", 0);
        state.options.difficulty = Difficulty::from_index(difficulty).unwrap_or_else(|| {
            log::warn!("Stored Difficulty={} is invalid, using Easy", difficulty);
            Difficulty::Easy
        });
        state.options.show_fps = store.get_int("ShowFps", 1) == 1;
        state.options.spawn_birds = store.get_int("SpawnBirds", 1) == 1;
        state.options.volume = store
            .get_float("GlobalVolume", DEFAULT_VOLUME as f64)
            .clamp(0.0, 1.0) as f32;

        let key_name = store.get_string("FlapKey", DEFAULT_FLAP_KEY);
        state.options.flap_key = FlapKey::parse(&key_name).unwrap_or_else(|e| {
            log::warn!("Stored FlapKey {:?} is not bindable ({:?}), using default", key_name, e);
            FlapKey::default()
        });

        state
    }

    /// Write every key. Flags are written for indices 1.. since index 0 is always owned.
    pub fn save(&self, store: &mut PrefsStore) {
        store.set_int("Coin", self.coins as i64);
        store.set_int("HighestScore", self.high_score as i64);
        store.set_int("TotalDeaths", self.total_deaths as i64);

        for category in CosmeticCategory::ALL {
            let slot = self.cosmetics(category);
            store.set_int(category.selected_key(), slot.selected() as i64);
            let prefix = category.bought_key_prefix();
            for i in 1..slot.len() {
                store.set_int(&format!("{}{}", prefix, i), slot.is_bought(i) as i64);
            }
        }

        for track in SkillTrack::ALL {
            store.set_int(track.key(), self.skill_level(track) as i64);
        }

        store.set_int("Difficulty", self.options.difficulty.index() as i64);
        store.set_float("GlobalVolume", self.options.volume as f64);
        store.set_int("SpawnBirds", self.options.spawn_birds as i64);
        store.set_int("ShowFps", self.options.show_fps as i64);
        store.set_string("FlapKey", self.options.flap_key.name());
    }

    /// Wipe every stored key and reload defaults.
    pub fn wipe(store: &mut PrefsStore) -> Self {
        store.delete_all();
        log::info!("Game progress reset: settings, coins and unlocks cleared");
        Self::load(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_store() {
        let state = ProgressState::load(&PrefsStore::in_memory());
        assert_eq!(state.coins, 0);
        assert_eq!(state.high_score, 100);
        assert_eq!(state.total_deaths, 0);
        assert_eq!(state.options.volume, 1.0);
        assert_eq!(state.options.difficulty, Difficulty::Easy);
        assert!(state.options.show_fps);
        assert!(state.options.spawn_birds);
        assert_eq!(state.options.flap_key.name(), "Space");
        assert_eq!(state, ProgressState::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut state = ProgressState::default();
        state.coins = 321;
        state.high_score = 4567;
        state.total_deaths = 12;
        state.birds.mark_bought(3);
        state.birds.select(3);
        state.backgrounds.mark_bought(7);
        state.obstacles.mark_bought(5);
        state.obstacles.select(5);
        state.skill1_level = 2;
        state.skill2_level = 3;
        state.options.difficulty = Difficulty::Hard;
        state.options.show_fps = false;
        state.options.spawn_birds = false;
        state.options.volume = 0.0;
        state.options.flap_key = FlapKey::parse("W").unwrap();

        let mut store = PrefsStore::in_memory();
        state.save(&mut store);
        assert_eq!(ProgressState::load(&store), state);
    }

    #[test]
    fn test_invalid_difficulty_falls_back() {
        let mut store = PrefsStore::in_memory();
        store.set_int("Difficulty", 7);
        assert_eq!(ProgressState::load(&store).options.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_unowned_selection_falls_back() {
        let mut store = PrefsStore::in_memory();
        store.set_int("BirdSelected", 4);
        assert_eq!(ProgressState::load(&store).birds.selected(), 0);
        store.set_int("BirdsBought4", 1);
        assert_eq!(ProgressState::load(&store).birds.selected(), 4);
    }

    #[test]
    fn test_skill_levels_clamped() {
        let mut store = PrefsStore::in_memory();
        store.set_int("Skill1Level", 9);
        store.set_int("Skill2Level", -2);
        let state = ProgressState::load(&store);
        assert_eq!(state.skill1_level, 3);
        assert_eq!(state.skill2_level, 0);
    }

    #[test]
    fn test_denied_flap_key_falls_back() {
        let mut store = PrefsStore::in_memory();
        store.set_string("FlapKey", "Escape");
        assert_eq!(ProgressState::load(&store).options.flap_key.name(), "Space");
    }

    #[test]
    fn test_negative_coins_fall_back() {
        let mut store = PrefsStore::in_memory();
        store.set_int("Coin", -50);
        assert_eq!(ProgressState::load(&store).coins, 0);
    }

    #[test]
    fn test_wipe_resets_bought_flags() {
        let mut state = ProgressState::default();
        state.coins = 500;
        state.birds.mark_bought(2);
        let mut store = PrefsStore::in_memory();
        state.save(&mut store);

        let wiped = ProgressState::wipe(&mut store);
        assert_eq!(wiped, ProgressState::default());
        assert!(!wiped.birds.is_bought(2));
    }

    #[test]
    fn test_record_score() {
        let mut state = ProgressState::default();
        assert!(!state.record_score(100));
        assert!(state.record_score(101));
        assert_eq!(state.high_score, 101);
    }
}
