//! Cosmetic catalogs and skill tracks.

use crate::core::constants::{
    BACKGROUND_UNLOCK_COST, BIRD_UNLOCK_COST, MAX_BACKGROUND_TYPES, MAX_BIRD_TYPES,
    MAX_OBSTACLE_TYPES, OBSTACLE_UNLOCK_COST,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CosmeticCategory {
    Bird,
    Background,
    Obstacle,
}

impl CosmeticCategory {
    pub const ALL: [CosmeticCategory; 3] = [
        CosmeticCategory::Bird,
        CosmeticCategory::Background,
        CosmeticCategory::Obstacle,
    ];

    /// Shop button ordinal: Bird=1, Background=2, Obstacle=3.
    pub fn from_shop_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Self::Bird),
            2 => Some(Self::Background),
            3 => Some(Self::Obstacle),
            _ => None,
        }
    }

    pub fn catalog_size(self) -> usize {
        match self {
            Self::Bird => MAX_BIRD_TYPES,
            Self::Background => MAX_BACKGROUND_TYPES,
            Self::Obstacle => MAX_OBSTACLE_TYPES,
        }
    }

    pub fn unlock_cost(self) -> u32 {
        match self {
            Self::Bird => BIRD_UNLOCK_COST,
            Self::Background => BACKGROUND_UNLOCK_COST,
            Self::Obstacle => OBSTACLE_UNLOCK_COST,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bird => "Bird",
            Self::Background => "Background",
            Self::Obstacle => "Obstacle",
        }
    }

    /// Prefix of the per-item bought flags, e.g. `BirdsBought3`.
    pub fn bought_key_prefix(self) -> &'static str {
        match self {
            Self::Bird => "BirdsBought",
            Self::Background => "BackgroundsBought",
            Self::Obstacle => "ObstaclesBought",
        }
    }

    pub fn selected_key(self) -> &'static str {
        match self {
            Self::Bird => "BirdSelected",
            Self::Background => "BackgroundSelected",
            Self::Obstacle => "ObstacleSelected",
        }
    }
}

/// Ownership flags and the current selection for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosmeticSlot {
    bought: Vec<bool>,
    selected: usize,
}

impl CosmeticSlot {
    pub fn new(category: CosmeticCategory) -> Self {
        let mut bought = vec![false; category.catalog_size()];
        bought[0] = true;
        Self {
            bought,
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bought.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bought.is_empty()
    }

    pub fn is_bought(&self, index: usize) -> bool {
        index == 0 || self.bought.get(index).copied().unwrap_or(false)
    }

    /// Flags only go from false to true here.
    pub fn mark_bought(&mut self, index: usize) {
        if let Some(flag) = self.bought.get_mut(index) {
            *flag = true;
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select an owned item. Returns false if it isn't owned.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.is_bought(index) || index >= self.bought.len() {
            return false;
        }
        self.selected = index;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTrack {
    /// Skill 1: changes the coin spawn gate.
    CoinSpawn,
    /// Skill 2: shortens the invulnerability cooldown.
    Invulnerability,
}

impl SkillTrack {
    pub const ALL: [SkillTrack; 2] = [SkillTrack::CoinSpawn, SkillTrack::Invulnerability];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::CoinSpawn => "Skill1Level",
            Self::Invulnerability => "Skill2Level",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::CoinSpawn => "Lucky Coins",
            Self::Invulnerability => "Guardian Wings",
        }
    }
}
