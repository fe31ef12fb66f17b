//! Per-screen drawing.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::consts::{LOGO_DURATION, MARSHMALLOW_SIZE, MAX_NAME_LEN, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::leaderboard::ScoreRow;
use crate::settings::Settings;
use crate::sim::{GameMode, GameState};

fn draw_centered(text: &str, y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(
        text,
        (SCREEN_WIDTH - dims.width) / 2.0,
        y,
        size as f32,
        color,
    );
}

fn format_row(index: usize, row: &ScoreRow) -> String {
    format!(
        "{}. {:<12} {:>5}  {:>6.1}s",
        index + 1,
        row.name,
        row.score,
        row.time
    )
}

/// Counter under the name field. Counts characters, not bytes, to match
/// the input bound.
fn name_count_label(name: &str) -> String {
    format!("{}/{}", name.chars().count(), MAX_NAME_LEN)
}

pub fn draw_logo(state: &GameState) {
    draw_centered("MALLOW RUSH", 240.0, 64, ORANGE);
    draw_centered("a campfire clicker", 280.0, 24, GRAY);

    let progress = (state.logo_timer / LOGO_DURATION).clamp(0.0, 1.0);
    let bar_x = (SCREEN_WIDTH - 200.0) / 2.0;
    draw_rectangle(bar_x, 320.0, 200.0, 6.0, DARKGRAY);
    draw_rectangle(bar_x, 320.0, 200.0 * progress, 6.0, ORANGE);
}

pub fn draw_title() {
    draw_centered("MALLOW RUSH", 180.0, 64, ORANGE);
    draw_centered("[ENTER] play", 290.0, 28, WHITE);
    draw_centered("[L] leaderboard", 325.0, 28, WHITE);
    draw_centered("[H] how to play", 360.0, 28, WHITE);
    draw_centered("[ESC] quit", 395.0, 28, GRAY);
}

pub fn draw_instructions() {
    draw_centered("HOW TO PLAY", 120.0, 48, ORANGE);
    draw_centered(
        "Marshmallows roast on their own. Click one to claim it.",
        180.0,
        24,
        WHITE,
    );
    draw_centered("Claiming always puts a fresh one in its place.", 210.0, 24, WHITE);

    draw_centered("ROASTED   +5   golden brown, the good stuff", 280.0, 24, YELLOW);
    draw_centered("TOASTED   +1   took it off a little early", 310.0, 24, LIGHTGRAY);
    draw_centered("BURNT     -2   you waited too long", 340.0, 24, RED);
    draw_centered("RAW        0   barely warmed through", 370.0, 24, GRAY);

    draw_centered("Reach the target score to win the round.", 430.0, 24, WHITE);
    draw_centered("[ENTER] continue", 500.0, 28, SKYBLUE);
}

pub fn draw_name_input(state: &GameState, time: f32) {
    draw_centered("WHO'S ROASTING?", 180.0, 48, ORANGE);

    let caret = if (time * 2.0) as i32 % 2 == 0 { "_" } else { " " };
    let shown = format!("{}{}", state.session.player_name, caret);
    draw_centered(&shown, 280.0, 40, WHITE);
    draw_centered(
        &name_count_label(&state.session.player_name),
        320.0,
        20,
        GRAY,
    );

    let prompt = if state.session.name_is_valid() {
        "[ENTER] continue"
    } else {
        "type a name to continue"
    };
    draw_centered(prompt, 400.0, 28, SKYBLUE);
}

pub fn draw_mode_select() {
    draw_centered("PICK A MODE", 140.0, 48, ORANGE);

    for (i, mode) in GameMode::ALL.into_iter().enumerate() {
        let clock = match mode.starting_time() {
            Some(secs) => format!(", {:.0}s clock", secs),
            None => String::new(),
        };
        let line = format!(
            "[{}] {:<7} x{:.1} roast speed, target {}{}",
            i + 1,
            mode.as_str(),
            mode.multiplier(),
            mode.win_threshold(),
            clock
        );
        draw_centered(&line, 230.0 + i as f32 * 45.0, 26, WHITE);
    }
}

pub fn draw_leaderboard(state: &GameState, board_rows: &[ScoreRow]) {
    draw_centered(
        &format!("TOP 5 - {}", state.board_mode.as_str()),
        140.0,
        48,
        ORANGE,
    );

    if board_rows.is_empty() {
        draw_centered("no scores yet", 260.0, 28, GRAY);
    } else {
        for (i, row) in board_rows.iter().enumerate() {
            draw_centered(&format_row(i, row), 220.0 + i as f32 * 36.0, 26, WHITE);
        }
    }

    draw_centered("[1] EASY  [2] NORMAL  [3] HARD  [4] TIMED", 460.0, 24, SKYBLUE);
    draw_centered("[ENTER] back", 495.0, 24, GRAY);
}

pub fn draw_gameplay(state: &GameState, assets: &Assets, settings: &Settings) {
    draw_texture(
        &assets.bonfire,
        SCREEN_WIDTH / 2.0 - 64.0,
        SCREEN_HEIGHT - 128.0,
        WHITE,
    );

    for marshmallow in &state.session.marshmallows {
        draw_texture_ex(
            &assets.platform,
            marshmallow.position.x - 16.0,
            marshmallow.position.y + MARSHMALLOW_SIZE - 6.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(96.0, 16.0)),
                ..Default::default()
            },
        );
        draw_texture(
            assets.marshmallow(marshmallow.doneness()),
            marshmallow.position.x,
            marshmallow.position.y,
            WHITE,
        );
    }

    draw_text(&format!("SCORE: {}", state.session.score), 10.0, 26.0, 28.0, WHITE);
    draw_text(
        &format!("TARGET: {}", state.session.mode.win_threshold()),
        10.0,
        52.0,
        22.0,
        LIGHTGRAY,
    );
    draw_text(state.session.mode.as_str(), 10.0, 74.0, 22.0, SKYBLUE);

    if let Some(remaining) = state.session.time_remaining {
        let color = if remaining < 10.0 { RED } else { YELLOW };
        draw_centered(&format!("{:.1}", remaining), 40.0, 36, color);
    }

    if settings.show_fps {
        draw_text(&format!("{} fps", get_fps()), SCREEN_WIDTH - 80.0, 26.0, 22.0, GREEN);
    }
}

pub fn draw_ending(state: &GameState, board_rows: &[ScoreRow]) {
    draw_centered("ROUND OVER", 120.0, 56, ORANGE);
    draw_centered(
        &format!(
            "{} scored {}",
            state.session.player_name.trim(),
            state.session.score
        ),
        180.0,
        32,
        WHITE,
    );
    draw_centered(
        &format!(
            "{} mode, {:.1}s",
            state.session.mode.as_str(),
            state.session.elapsed
        ),
        215.0,
        24,
        LIGHTGRAY,
    );

    draw_centered(&format!("TOP 5 - {}", state.board_mode.as_str()), 290.0, 32, YELLOW);
    if board_rows.is_empty() {
        draw_centered("no scores yet", 340.0, 26, GRAY);
    } else {
        for (i, row) in board_rows.iter().enumerate() {
            draw_centered(&format_row(i, row), 335.0 + i as f32 * 32.0, 24, WHITE);
        }
    }

    draw_centered("[ENTER] back to title", 545.0, 28, SKYBLUE);
}
