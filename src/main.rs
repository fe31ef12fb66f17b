//! Mallow Rush game binary.
//!
//! Owns the window, the frame loop, and every real side effect: input
//! is gathered into a `TickInput`, the simulation returns events, and
//! those events are executed here (sound playback, database writes,
//! leaderboard reloads).

use macroquad::prelude::*;

use mallow_rush::assets::Assets;
use mallow_rush::audio::AudioBank;
use mallow_rush::consts::{DB_FILE, SCREEN_HEIGHT, SCREEN_WIDTH};
use mallow_rush::leaderboard::Leaderboard;
use mallow_rush::render::draw_frame;
use mallow_rush::settings::Settings;
use mallow_rush::sim::{GameEvent, GameState, TickInput, Vec2, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Mallow Rush".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        // Layout and hit-testing assume one logical pixel per screen pixel
        high_dpi: false,
        ..Default::default()
    }
}

/// Collects one frame of input for the simulation.
fn gather_input() -> TickInput {
    let mut input = TickInput {
        confirm: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
        view_board: is_key_pressed(KeyCode::L),
        instructions: is_key_pressed(KeyCode::H),
        backspace: is_key_pressed(KeyCode::Backspace),
        click: is_mouse_button_pressed(MouseButton::Left),
        ..TickInput::default()
    };

    for (i, key) in [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4]
        .into_iter()
        .enumerate()
    {
        if is_key_pressed(key) {
            input.digit = Some(i as u8 + 1);
        }
    }

    while let Some(c) = get_char_pressed() {
        if !c.is_control() {
            input.chars.push(c);
        }
    }

    let (mx, my) = mouse_position();
    input.cursor = Vec2::new(mx, my);
    input
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Mallow Rush starting");

    let mut settings = Settings::load();
    let assets = Assets::generate();
    let mut audio = AudioBank::load().await;
    let store = Leaderboard::open(DB_FILE);

    let mut state = GameState::new();
    let mut board_rows = store.top(state.board_mode);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            settings.save();
            break;
        }
        if is_key_pressed(KeyCode::F1) {
            settings.show_fps = !settings.show_fps;
            settings.save();
        }

        let input = gather_input();
        let dt = get_frame_time();

        for event in tick(&mut state, &input, dt) {
            match event {
                GameEvent::Play(cue) => audio.play(cue, &settings),
                GameEvent::SubmitScore {
                    name,
                    score,
                    time,
                    mode,
                } => store.submit(&name, score, time, mode),
                GameEvent::LoadBoard(mode) => board_rows = store.top(mode),
            }
        }

        audio.update_ambience(&settings);
        draw_frame(&state, &board_rows, &assets, &settings, get_time() as f32);
        next_frame().await;
    }

    log::info!("Mallow Rush shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_conf_matches_fixed_layout() {
        let conf = window_conf();
        assert_eq!(conf.window_width, SCREEN_WIDTH as i32);
        assert_eq!(conf.window_height, SCREEN_HEIGHT as i32);
        assert!(!conf.window_resizable);
        assert!(!conf.high_dpi);
    }
}
