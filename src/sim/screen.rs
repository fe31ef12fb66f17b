//! Screen flow state
//!
//! The whole UI is one enum; transition and render code both match on it
//! exhaustively, so adding a screen breaks the build until every site
//! handles it.

use super::state::{GameMode, GameSession};

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash, auto-advances to Title
    Logo,
    Title,
    Instructions,
    /// Player name entry; must be non-empty before ModeSelect
    NameInput,
    ModeSelect,
    /// Pick which mode's top scores to view
    LeaderboardSelection,
    Gameplay,
    /// Final score plus that mode's table; loops back to Title
    Ending,
}

/// Top-level game context owned by the frame loop
#[derive(Debug, Clone)]
pub struct GameState {
    pub screen: Screen,
    pub session: GameSession,
    /// Seconds spent on the Logo screen
    pub logo_timer: f32,
    /// Mode whose leaderboard was last loaded for viewing
    pub board_mode: GameMode,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Logo,
            session: GameSession::new(),
            logo_timer: 0.0,
            board_mode: GameMode::Normal,
        }
    }
}
