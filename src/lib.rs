//! Mallow Rush - a marshmallow roasting clicker game
//!
//! Core modules:
//! - `sim`: Deterministic game logic (roast timers, session rules, screen flow)
//! - `leaderboard`: SQLite-backed top score table
//! - `audio`: Procedurally synthesized sound effects
//! - `assets`: Procedurally painted textures
//! - `render`: Per-screen frame drawing
//! - `settings`: JSON-persisted preferences

pub mod assets;
pub mod audio;
pub mod leaderboard;
pub mod render;
pub mod settings;
pub mod sim;

pub use leaderboard::{Leaderboard, ScoreRow};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (fixed, window is not resizable)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Marshmallow sprite size (square, pixels)
    pub const MARSHMALLOW_SIZE: f32 = 64.0;
    /// Fixed top-left anchors for the four marshmallows
    pub const MARSHMALLOW_SPOTS: [(f32, f32); 4] =
        [(150.0, 200.0), (600.0, 200.0), (150.0, 350.0), (600.0, 350.0)];

    /// Doneness thresholds on the scaled roast timer (seconds)
    pub const TOASTED_AT: f32 = 2.0;
    pub const ROASTED_AT: f32 = 4.0;
    pub const BURNT_AT: f32 = 6.0;

    /// Logo screen auto-advance delay (seconds)
    pub const LOGO_DURATION: f32 = 3.0;
    /// Maximum player name length (characters)
    pub const MAX_NAME_LEN: usize = 12;
    /// Leaderboard rows shown per mode
    pub const TOP_N: usize = 5;

    /// Sample rate for synthesized sound effects
    pub const SAMPLE_RATE: u32 = 44_100;

    /// On-disk file names, relative to the working directory
    pub const DB_FILE: &str = "mallow_rush.db";
    pub const SETTINGS_FILE: &str = "settings.json";
}

/// Deterministic integer hash mapped to [0, 1)
///
/// Render-only scatter (embers, stars, texture speckle) and the noise in the
/// synthesized sounds all draw from this.
#[inline]
pub fn hash01(seed: u32) -> f32 {
    let h = seed.wrapping_mul(2654435761).wrapping_add(0x9E37_79B9);
    let h = (h ^ (h >> 16)).wrapping_mul(0x045D_9F3B);
    ((h >> 8) & 0xFFFF) as f32 / 65536.0
}
