//! Player settings, persisted as JSON next to the executable.
//!
//! Loading falls back to defaults when the file is missing or
//! unreadable; saving logs and continues on failure.

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_FILE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Overall volume, 0.0 to 1.0.
    pub master_volume: f32,
    /// Sound effect volume, scaled by master.
    pub sfx_volume: f32,
    /// Bonfire crackle volume, scaled by master.
    pub ambience_volume: f32,
    /// Whether the crackle loop plays at all.
    pub ambience: bool,

    // === HUD ===
    /// Show the frame counter during gameplay.
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            ambience_volume: 0.5,
            ambience: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Effective volume for one-shot sound effects.
    pub fn effective_sfx(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }

    /// Effective volume for the crackle loop. Zero when disabled.
    pub fn effective_ambience(&self) -> f32 {
        if !self.ambience {
            return 0.0;
        }
        (self.master_volume * self.ambience_volume).clamp(0.0, 1.0)
    }

    /// Reads settings from disk, falling back to defaults.
    pub fn load() -> Self {
        match std::fs::read_to_string(SETTINGS_FILE) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", SETTINGS_FILE);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", SETTINGS_FILE, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Writes settings to disk.
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(text) => {
                if let Err(e) = std::fs::write(SETTINGS_FILE, text) {
                    log::warn!("Failed to save {}: {}", SETTINGS_FILE, e);
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
