//! Frame rendering.
//!
//! One `draw_frame` call per frame paints the shared background and
//! then whichever screen is active. Rendering reads simulation state
//! but never mutates it.

mod background;
mod screens;

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::leaderboard::ScoreRow;
use crate::settings::Settings;
use crate::sim::{GameState, Screen};

pub use background::draw_background;

/// Paints the whole frame for the current screen.
pub fn draw_frame(
    state: &GameState,
    board_rows: &[ScoreRow],
    assets: &Assets,
    settings: &Settings,
    time: f32,
) {
    clear_background(BLACK);
    background::draw_background(assets, time);

    match state.screen {
        Screen::Logo => screens::draw_logo(state),
        Screen::Title => screens::draw_title(),
        Screen::Instructions => screens::draw_instructions(),
        Screen::NameInput => screens::draw_name_input(state, time),
        Screen::ModeSelect => screens::draw_mode_select(),
        Screen::LeaderboardSelection => screens::draw_leaderboard(state, board_rows),
        Screen::Gameplay => screens::draw_gameplay(state, assets, settings),
        Screen::Ending => screens::draw_ending(state, board_rows),
    }
}
