//! Deterministic game logic
//!
//! Everything gameplay lives here, free of rendering, audio, and database
//! dependencies:
//! - `state`: roast model, mode table, session rules
//! - `screen`: screen enum and the top-level game context
//! - `tick`: one frame of input to transitions plus emitted events

pub mod screen;
pub mod state;
pub mod tick;

pub use glam::Vec2;
pub use screen::{GameState, Screen};
pub use state::{Bounds, Doneness, GameMode, GameSession, Marshmallow};
pub use tick::{GameEvent, SoundCue, TickInput, tick};
