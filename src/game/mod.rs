//! The in-game scene: a [`GameSession`] driven by fixed physics steps.

pub mod session;

pub use session::GameSession;

/// Work items the session's scheduler fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTask {
    SpawnObstacle,
    SpawnCoin,
    SpawnBird,
    GainScore,
    DayNight,
    FpsHud,
    /// End of the player's invulnerability window.
    EndInvulnerability,
    /// Show the in-game menu after a death.
    RevealMenu,
}

/// What the app should do after an in-game menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMenuAction {
    Respawned,
    LoadMainMenu,
    Quit,
    Ignored,
}
