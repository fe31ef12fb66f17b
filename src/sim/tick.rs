//! Per-frame screen transitions.
//!
//! `tick` consumes one frame's worth of input and advances the game:
//! - drives the screen state machine (logo through ending)
//! - forwards gameplay input to the active session
//! - never performs I/O itself: sounds and database work are returned
//!   as events for the frontend to execute

use glam::Vec2;

use super::screen::{GameState, Screen};
use super::state::{Doneness, GameMode};
use crate::consts::LOGO_DURATION;

/// One frame of player input, gathered by the frontend.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Confirm / advance (Enter).
    pub confirm: bool,
    /// Open the leaderboard from the title screen.
    pub view_board: bool,
    /// Open the instructions from the title screen.
    pub instructions: bool,
    /// Digit key 1-4, when one was pressed this frame.
    pub digit: Option<u8>,
    /// Printable characters typed this frame.
    pub chars: Vec<char>,
    /// Backspace was pressed.
    pub backspace: bool,
    /// Mouse position in screen pixels.
    pub cursor: Vec2,
    /// Left mouse button was pressed this frame.
    pub click: bool,
}

/// Short sound effects the frontend can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Menu confirm.
    Confirm,
    /// A marshmallow was claimed while edible.
    Click,
    /// A burnt marshmallow was clicked.
    Burn,
    /// The session just finished.
    Finish,
}

/// Side effects requested by the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Play a sound cue.
    Play(SoundCue),
    /// Persist a finished session's score.
    SubmitScore {
        name: String,
        score: i32,
        time: f32,
        mode: GameMode,
    },
    /// Reload the top scores for a mode.
    LoadBoard(GameMode),
}

/// Advances the game by one frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let from = state.screen;

    match state.screen {
        Screen::Logo => {
            state.logo_timer += dt;
            if input.confirm || state.logo_timer >= LOGO_DURATION {
                state.screen = Screen::Title;
            }
        }
        Screen::Title => {
            if input.confirm {
                state.screen = Screen::NameInput;
                events.push(GameEvent::Play(SoundCue::Confirm));
            } else if input.view_board {
                state.screen = Screen::LeaderboardSelection;
            } else if input.instructions {
                state.screen = Screen::Instructions;
            }
        }
        Screen::Instructions => {
            if input.confirm {
                // The sticky name from an earlier round may be empty; the
                // non-empty guard still applies before ModeSelect.
                state.screen = if state.session.name_is_valid() {
                    Screen::ModeSelect
                } else {
                    Screen::NameInput
                };
                events.push(GameEvent::Play(SoundCue::Confirm));
            }
        }
        Screen::NameInput => {
            for &c in &input.chars {
                state.session.push_name_char(c);
            }
            if input.backspace {
                state.session.pop_name_char();
            }
            if input.confirm && state.session.name_is_valid() {
                state.screen = Screen::ModeSelect;
                events.push(GameEvent::Play(SoundCue::Confirm));
            }
        }
        Screen::ModeSelect => {
            if let Some(mode) = input.digit.and_then(GameMode::from_digit) {
                state.session.select_mode(mode);
                state.screen = Screen::Gameplay;
                events.push(GameEvent::Play(SoundCue::Confirm));
            }
        }
        Screen::LeaderboardSelection => {
            if let Some(mode) = input.digit.and_then(GameMode::from_digit) {
                state.board_mode = mode;
                events.push(GameEvent::LoadBoard(mode));
                state.screen = Screen::Title;
            } else if input.confirm {
                state.screen = Screen::Title;
            }
        }
        Screen::Gameplay => {
            state.session.tick(dt);

            if input.click {
                match state.session.register_click(input.cursor) {
                    Some(Doneness::Burnt) => events.push(GameEvent::Play(SoundCue::Burn)),
                    Some(Doneness::Toasted) | Some(Doneness::Roasted) => {
                        events.push(GameEvent::Play(SoundCue::Click));
                    }
                    Some(Doneness::Raw) | None => {}
                }
            }

            if state.session.is_finished() {
                if state.session.name_is_valid() {
                    events.push(GameEvent::SubmitScore {
                        name: state.session.player_name.trim().to_string(),
                        score: state.session.score,
                        time: state.session.elapsed,
                        mode: state.session.mode,
                    });
                } else {
                    log::warn!("Session finished without a player name; score not submitted");
                }
                state.board_mode = state.session.mode;
                events.push(GameEvent::LoadBoard(state.session.mode));
                events.push(GameEvent::Play(SoundCue::Finish));
                state.screen = Screen::Ending;
            }
        }
        Screen::Ending => {
            if input.confirm {
                state.screen = Screen::Title;
                events.push(GameEvent::Play(SoundCue::Confirm));
            }
        }
    }

    if state.screen != from {
        log::debug!("Screen {:?} -> {:?}", from, state.screen);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn confirm() -> TickInput {
        TickInput {
            confirm: true,
            ..TickInput::default()
        }
    }

    fn digit(d: u8) -> TickInput {
        TickInput {
            digit: Some(d),
            ..TickInput::default()
        }
    }

    fn named_state_at(screen: Screen) -> GameState {
        let mut state = GameState::new();
        state.session.player_name = "ZOE".to_string();
        state.screen = screen;
        state
    }

    #[test]
    fn test_logo_times_out_to_title() {
        let mut state = GameState::new();
        let idle = TickInput::default();
        // 0.5 steps stay exact in f32: 2.5s still Logo, 3.0s advances
        for _ in 0..5 {
            tick(&mut state, &idle, 0.5);
        }
        assert_eq!(state.screen, Screen::Logo);
        tick(&mut state, &idle, 0.5);
        assert_eq!(state.screen, Screen::Title);
    }

    #[test]
    fn test_logo_confirm_skips_ahead() {
        let mut state = GameState::new();
        tick(&mut state, &confirm(), DT);
        assert_eq!(state.screen, Screen::Title);
    }

    #[test]
    fn test_title_confirm_goes_to_name_input() {
        let mut state = named_state_at(Screen::Title);
        let events = tick(&mut state, &confirm(), DT);
        assert_eq!(state.screen, Screen::NameInput);
        assert_eq!(events, vec![GameEvent::Play(SoundCue::Confirm)]);
    }

    #[test]
    fn test_title_opens_leaderboard_selection() {
        let mut state = named_state_at(Screen::Title);
        let input = TickInput {
            view_board: true,
            ..TickInput::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.screen, Screen::LeaderboardSelection);
    }

    #[test]
    fn test_title_opens_instructions() {
        let mut state = named_state_at(Screen::Title);
        let input = TickInput {
            instructions: true,
            ..TickInput::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.screen, Screen::Instructions);
    }

    #[test]
    fn test_instructions_confirm_continues_to_mode_select() {
        let mut state = named_state_at(Screen::Instructions);
        tick(&mut state, &confirm(), DT);
        assert_eq!(state.screen, Screen::ModeSelect);
    }

    #[test]
    fn test_instructions_falls_back_to_name_input_when_unnamed() {
        let mut state = GameState::new();
        state.screen = Screen::Instructions;
        tick(&mut state, &confirm(), DT);
        assert_eq!(state.screen, Screen::NameInput);
    }

    #[test]
    fn test_name_input_edits_and_confirms() {
        let mut state = GameState::new();
        state.screen = Screen::NameInput;

        let typing = TickInput {
            chars: vec!['M', 'A', 'X', 'X'],
            ..TickInput::default()
        };
        tick(&mut state, &typing, DT);
        assert_eq!(state.session.player_name, "MAXX");

        let erase = TickInput {
            backspace: true,
            ..TickInput::default()
        };
        tick(&mut state, &erase, DT);
        assert_eq!(state.session.player_name, "MAX");

        tick(&mut state, &confirm(), DT);
        assert_eq!(state.screen, Screen::ModeSelect);
    }

    #[test]
    fn test_empty_name_blocks_mode_select() {
        let mut state = GameState::new();
        state.screen = Screen::NameInput;
        let events = tick(&mut state, &confirm(), DT);
        assert_eq!(state.screen, Screen::NameInput);
        assert!(events.is_empty());
    }

    #[test]
    fn test_mode_select_starts_session() {
        let mut state = named_state_at(Screen::ModeSelect);
        let events = tick(&mut state, &digit(3), DT);
        assert_eq!(state.screen, Screen::Gameplay);
        assert_eq!(state.session.mode, GameMode::Hard);
        assert_eq!(events, vec![GameEvent::Play(SoundCue::Confirm)]);
    }

    #[test]
    fn test_mode_select_ignores_bad_digit() {
        let mut state = named_state_at(Screen::ModeSelect);
        let events = tick(&mut state, &digit(9), DT);
        assert_eq!(state.screen, Screen::ModeSelect);
        assert!(events.is_empty());
    }

    #[test]
    fn test_leaderboard_selection_loads_and_returns() {
        let mut state = named_state_at(Screen::LeaderboardSelection);
        let events = tick(&mut state, &digit(4), DT);
        assert_eq!(state.board_mode, GameMode::Timed);
        assert_eq!(events, vec![GameEvent::LoadBoard(GameMode::Timed)]);
        assert_eq!(state.screen, Screen::Title);
    }

    #[test]
    fn test_leaderboard_selection_confirm_backs_out() {
        let mut state = named_state_at(Screen::LeaderboardSelection);
        let events = tick(&mut state, &confirm(), DT);
        assert_eq!(state.screen, Screen::Title);
        assert!(events.is_empty());
    }

    #[test]
    fn test_gameplay_click_scores_and_cues_sound() {
        let mut state = named_state_at(Screen::Gameplay);
        state.session.select_mode(GameMode::Normal);
        state.session.marshmallows[0].roast_timer = 4.5;

        let input = TickInput {
            click: true,
            cursor: Vec2::new(182.0, 232.0),
            ..TickInput::default()
        };
        let events = tick(&mut state, &input, DT);
        assert_eq!(state.session.score, 5);
        assert!(events.contains(&GameEvent::Play(SoundCue::Click)));
    }

    #[test]
    fn test_gameplay_burnt_click_cues_burn() {
        let mut state = named_state_at(Screen::Gameplay);
        state.session.select_mode(GameMode::Normal);
        state.session.marshmallows[0].roast_timer = 7.0;

        let input = TickInput {
            click: true,
            cursor: Vec2::new(182.0, 232.0),
            ..TickInput::default()
        };
        let events = tick(&mut state, &input, DT);
        assert_eq!(state.session.score, -2);
        assert!(events.contains(&GameEvent::Play(SoundCue::Burn)));
    }

    #[test]
    fn test_finish_submits_and_reloads_board() {
        let mut state = named_state_at(Screen::Gameplay);
        state.session.select_mode(GameMode::Easy);
        state.session.score = 45;
        state.session.marshmallows[0].roast_timer = 4.5;

        let input = TickInput {
            click: true,
            cursor: Vec2::new(182.0, 232.0),
            ..TickInput::default()
        };
        let events = tick(&mut state, &input, DT);

        assert_eq!(state.screen, Screen::Ending);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::SubmitScore { name, score, mode: GameMode::Easy, .. }
                if name == "ZOE" && *score == 50
        )));
        assert!(events.contains(&GameEvent::LoadBoard(GameMode::Easy)));
        assert!(events.contains(&GameEvent::Play(SoundCue::Finish)));
    }

    #[test]
    fn test_timed_session_expires_with_zero_score() {
        let mut state = named_state_at(Screen::Gameplay);
        state.session.select_mode(GameMode::Timed);

        let idle = TickInput::default();
        let mut submitted = Vec::new();
        for _ in 0..125 {
            submitted.extend(tick(&mut state, &idle, 0.25));
            if state.screen == Screen::Ending {
                break;
            }
        }

        assert_eq!(state.screen, Screen::Ending);
        assert!(submitted.iter().any(|e| matches!(
            e,
            GameEvent::SubmitScore { score: 0, mode: GameMode::Timed, .. }
        )));
    }

    #[test]
    fn test_unnamed_finish_skips_submission() {
        let mut state = GameState::new();
        state.screen = Screen::Gameplay;
        state.session.select_mode(GameMode::Easy);
        state.session.score = 50;

        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.screen, Screen::Ending);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::SubmitScore { .. }))
        );
        assert!(events.contains(&GameEvent::LoadBoard(GameMode::Easy)));
    }

    #[test]
    fn test_ending_returns_to_title() {
        let mut state = named_state_at(Screen::Ending);
        let events = tick(&mut state, &confirm(), DT);
        assert_eq!(state.screen, Screen::Title);
        assert_eq!(events, vec![GameEvent::Play(SoundCue::Confirm)]);
    }
}
