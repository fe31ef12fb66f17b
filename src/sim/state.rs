//! Roast model and session rules
//!
//! All gameplay state lives here. The frontend feeds elapsed time and click
//! points in; score deltas and end conditions come out.

use glam::Vec2;

use crate::consts::*;

/// Discrete roast state, derived from the scaled roast timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Doneness {
    Raw,
    Toasted,
    Roasted,
    Burnt,
}

impl Doneness {
    /// Classify a scaled roast timer (seconds)
    pub fn from_timer(t: f32) -> Self {
        if t < TOASTED_AT {
            Doneness::Raw
        } else if t < ROASTED_AT {
            Doneness::Toasted
        } else if t < BURNT_AT {
            Doneness::Roasted
        } else {
            Doneness::Burnt
        }
    }

    /// Score delta when clicked in this state
    pub fn score_delta(&self) -> i32 {
        match self {
            Doneness::Raw => 0,
            Doneness::Toasted => 1,
            Doneness::Roasted => 5,
            Doneness::Burnt => -2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Doneness::Raw => "Raw",
            Doneness::Toasted => "Toasted",
            Doneness::Roasted => "Roasted",
            Doneness::Burnt => "Burnt",
        }
    }
}

/// Axis-aligned hit box
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point lies inside (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.w
            && point.y >= self.y
            && point.y <= self.y + self.h
    }
}

/// A roastable marshmallow: fixed screen anchor plus a roast timer
#[derive(Debug, Clone)]
pub struct Marshmallow {
    /// Top-left render anchor
    pub position: Vec2,
    /// Hit box, fixed per object, matches the sprite
    pub bounds: Bounds,
    /// Scaled elapsed roast time since last reset (seconds)
    pub roast_timer: f32,
}

impl Marshmallow {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            bounds: Bounds::new(x, y, MARSHMALLOW_SIZE, MARSHMALLOW_SIZE),
            roast_timer: 0.0,
        }
    }

    /// Advance the roast timer by scaled elapsed time
    pub fn advance(&mut self, elapsed: f32, multiplier: f32) {
        self.roast_timer += elapsed * multiplier;
    }

    /// Current doneness, a pure function of the timer
    pub fn doneness(&self) -> Doneness {
        Doneness::from_timer(self.roast_timer)
    }

    /// Point-in-bounds test
    pub fn hit_test(&self, point: Vec2) -> bool {
        self.bounds.contains(point)
    }

    /// Back on the stick: timer to zero, doneness Raw again
    pub fn reset(&mut self) {
        self.roast_timer = 0.0;
    }
}

/// Gameplay parameter preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    Easy,
    #[default]
    Normal,
    Hard,
    Timed,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Easy,
        GameMode::Normal,
        GameMode::Hard,
        GameMode::Timed,
    ];

    /// Roast speed multiplier applied to every marshmallow
    pub fn multiplier(&self) -> f32 {
        match self {
            GameMode::Easy => 0.8,
            GameMode::Normal => 1.0,
            GameMode::Hard => 1.5,
            GameMode::Timed => 1.2,
        }
    }

    /// Score needed to win
    pub fn win_threshold(&self) -> i32 {
        match self {
            GameMode::Easy => 50,
            GameMode::Normal => 100,
            GameMode::Hard => 150,
            GameMode::Timed => 75,
        }
    }

    /// Countdown start, Timed mode only
    pub fn starting_time(&self) -> Option<f32> {
        match self {
            GameMode::Timed => Some(30.0),
            _ => None,
        }
    }

    /// Stored in the leaderboard `mode` column
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Easy => "EASY",
            GameMode::Normal => "NORMAL",
            GameMode::Hard => "HARD",
            GameMode::Timed => "TIMED",
        }
    }

    /// Menu digit mapping (1-4)
    pub fn from_digit(d: u8) -> Option<Self> {
        match d {
            1 => Some(GameMode::Easy),
            2 => Some(GameMode::Normal),
            3 => Some(GameMode::Hard),
            4 => Some(GameMode::Timed),
            _ => None,
        }
    }
}

/// One playthrough: mode parameters, score, countdown, marshmallows
#[derive(Debug, Clone)]
pub struct GameSession {
    pub mode: GameMode,
    /// Signed: Burnt clicks can push it below zero
    pub score: i32,
    /// Countdown, Timed mode only
    pub time_remaining: Option<f32>,
    /// Total play time this session (seconds), recorded with the score
    pub elapsed: f32,
    /// Sticky across playthroughs; edited on the NameInput screen
    pub player_name: String,
    pub marshmallows: [Marshmallow; 4],
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            mode: GameMode::Normal,
            score: 0,
            time_remaining: None,
            elapsed: 0.0,
            player_name: String::new(),
            marshmallows: Self::spawn_marshmallows(),
        }
    }

    fn spawn_marshmallows() -> [Marshmallow; 4] {
        MARSHMALLOW_SPOTS.map(|(x, y)| Marshmallow::new(x, y))
    }

    /// Apply a mode's parameters and reset the round (name is kept)
    pub fn select_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.score = 0;
        self.time_remaining = mode.starting_time();
        self.elapsed = 0.0;
        self.marshmallows = Self::spawn_marshmallows();
    }

    /// Advance every marshmallow and the countdown by one frame
    pub fn tick(&mut self, elapsed: f32) {
        self.elapsed += elapsed;
        let multiplier = self.mode.multiplier();
        for m in &mut self.marshmallows {
            m.advance(elapsed, multiplier);
        }
        if let Some(t) = &mut self.time_remaining {
            *t = (*t - elapsed).max(0.0);
        }
    }

    /// Apply a click: the first marshmallow hit scores per its doneness and
    /// goes back to Raw. Returns the doneness that scored, None on a miss.
    pub fn register_click(&mut self, point: Vec2) -> Option<Doneness> {
        for m in &mut self.marshmallows {
            if m.hit_test(point) {
                let doneness = m.doneness();
                self.score += doneness.score_delta();
                m.reset();
                return Some(doneness);
            }
        }
        None
    }

    /// Win threshold reached, or the Timed countdown ran out
    pub fn is_finished(&self) -> bool {
        if self.score >= self.mode.win_threshold() {
            return true;
        }
        matches!(self.time_remaining, Some(t) if t <= 0.0)
    }

    /// Append a printable character to the player name, bounded length
    pub fn push_name_char(&mut self, c: char) {
        if self.player_name.chars().count() < MAX_NAME_LEN && !c.is_control() {
            self.player_name.push(c);
        }
    }

    /// Remove the last character of the player name
    pub fn pop_name_char(&mut self) {
        self.player_name.pop();
    }

    /// Non-empty after trimming; gates NameInput -> ModeSelect
    pub fn name_is_valid(&self) -> bool {
        !self.player_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rank(d: Doneness) -> u8 {
        match d {
            Doneness::Raw => 0,
            Doneness::Toasted => 1,
            Doneness::Roasted => 2,
            Doneness::Burnt => 3,
        }
    }

    #[test]
    fn test_doneness_thresholds() {
        assert_eq!(Doneness::from_timer(0.0), Doneness::Raw);
        assert_eq!(Doneness::from_timer(1.99), Doneness::Raw);
        assert_eq!(Doneness::from_timer(2.0), Doneness::Toasted);
        assert_eq!(Doneness::from_timer(3.99), Doneness::Toasted);
        assert_eq!(Doneness::from_timer(4.0), Doneness::Roasted);
        assert_eq!(Doneness::from_timer(5.99), Doneness::Roasted);
        assert_eq!(Doneness::from_timer(6.0), Doneness::Burnt);
        assert_eq!(Doneness::from_timer(100.0), Doneness::Burnt);
    }

    #[test]
    fn test_score_deltas() {
        assert_eq!(Doneness::Raw.score_delta(), 0);
        assert_eq!(Doneness::Toasted.score_delta(), 1);
        assert_eq!(Doneness::Roasted.score_delta(), 5);
        assert_eq!(Doneness::Burnt.score_delta(), -2);
    }

    #[test]
    fn test_advance_scales_by_multiplier() {
        let mut m = Marshmallow::new(0.0, 0.0);
        m.advance(2.0, 1.5);
        assert!((m.roast_timer - 3.0).abs() < 1e-6);
        assert_eq!(m.doneness(), Doneness::Toasted);
    }

    #[test]
    fn test_reset_always_returns_to_raw() {
        let mut m = Marshmallow::new(0.0, 0.0);
        m.advance(10.0, 1.0);
        assert_eq!(m.doneness(), Doneness::Burnt);
        m.reset();
        assert_eq!(m.roast_timer, 0.0);
        assert_eq!(m.doneness(), Doneness::Raw);
    }

    #[test]
    fn test_hit_test_edges_inclusive() {
        let m = Marshmallow::new(100.0, 100.0);
        assert!(m.hit_test(Vec2::new(100.0, 100.0)));
        assert!(m.hit_test(Vec2::new(164.0, 164.0)));
        assert!(m.hit_test(Vec2::new(132.0, 132.0)));
        assert!(!m.hit_test(Vec2::new(99.0, 132.0)));
        assert!(!m.hit_test(Vec2::new(165.0, 132.0)));
    }

    #[test]
    fn test_mode_table() {
        assert_eq!(GameMode::Easy.multiplier(), 0.8);
        assert_eq!(GameMode::Easy.win_threshold(), 50);
        assert_eq!(GameMode::Normal.multiplier(), 1.0);
        assert_eq!(GameMode::Normal.win_threshold(), 100);
        assert_eq!(GameMode::Hard.multiplier(), 1.5);
        assert_eq!(GameMode::Hard.win_threshold(), 150);
        assert_eq!(GameMode::Timed.multiplier(), 1.2);
        assert_eq!(GameMode::Timed.win_threshold(), 75);
        assert_eq!(GameMode::Timed.starting_time(), Some(30.0));
        assert_eq!(GameMode::Hard.starting_time(), None);
    }

    #[test]
    fn test_mode_digits() {
        assert_eq!(GameMode::from_digit(1), Some(GameMode::Easy));
        assert_eq!(GameMode::from_digit(4), Some(GameMode::Timed));
        assert_eq!(GameMode::from_digit(0), None);
        assert_eq!(GameMode::from_digit(5), None);
    }

    #[test]
    fn test_select_mode_resets_round_but_keeps_name() {
        let mut session = GameSession::new();
        session.player_name = "ZOE".to_string();
        session.score = 42;
        session.marshmallows[2].advance(5.0, 1.0);
        session.select_mode(GameMode::Timed);
        assert_eq!(session.score, 0);
        assert_eq!(session.time_remaining, Some(30.0));
        assert_eq!(session.player_name, "ZOE");
        for m in &session.marshmallows {
            assert_eq!(m.roast_timer, 0.0);
        }
    }

    #[test]
    fn test_click_scores_once_and_resets() {
        let mut session = GameSession::new();
        session.select_mode(GameMode::Normal);
        session.marshmallows[0].roast_timer = 4.5; // Roasted
        let center = Vec2::new(150.0 + 32.0, 200.0 + 32.0);
        let hit = session.register_click(center);
        assert_eq!(hit, Some(Doneness::Roasted));
        assert_eq!(session.score, 5);
        assert_eq!(session.marshmallows[0].roast_timer, 0.0);
    }

    #[test]
    fn test_click_on_raw_resets_without_scoring() {
        let mut session = GameSession::new();
        session.select_mode(GameMode::Normal);
        session.marshmallows[1].roast_timer = 1.0;
        let center = Vec2::new(600.0 + 32.0, 200.0 + 32.0);
        let hit = session.register_click(center);
        assert_eq!(hit, Some(Doneness::Raw));
        assert_eq!(session.score, 0);
        assert_eq!(session.marshmallows[1].roast_timer, 0.0);
    }

    #[test]
    fn test_click_on_burnt_penalizes() {
        let mut session = GameSession::new();
        session.select_mode(GameMode::Normal);
        session.marshmallows[0].roast_timer = 7.0;
        let hit = session.register_click(Vec2::new(160.0, 210.0));
        assert_eq!(hit, Some(Doneness::Burnt));
        assert_eq!(session.score, -2);
    }

    #[test]
    fn test_click_miss_changes_nothing() {
        let mut session = GameSession::new();
        session.select_mode(GameMode::Normal);
        session.marshmallows[0].roast_timer = 4.5;
        let hit = session.register_click(Vec2::new(5.0, 5.0));
        assert_eq!(hit, None);
        assert_eq!(session.score, 0);
        assert!((session.marshmallows[0].roast_timer - 4.5).abs() < 1e-6);
    }

    #[test]
    fn test_finish_on_threshold() {
        let mut session = GameSession::new();
        session.select_mode(GameMode::Easy);
        session.score = 49;
        assert!(!session.is_finished());
        session.score = 50;
        assert!(session.is_finished());
        session.score = 51;
        assert!(session.is_finished());
    }

    #[test]
    fn test_timed_finishes_when_clock_runs_out() {
        let mut session = GameSession::new();
        session.select_mode(GameMode::Timed);
        // 0.25 steps stay exact in f32, so the countdown hits 0.0 on the nose
        for _ in 0..119 {
            session.tick(0.25);
        }
        assert!(!session.is_finished());
        session.tick(0.25);
        assert!(session.is_finished());
        assert_eq!(session.score, 0);
        assert_eq!(session.time_remaining, Some(0.0));
    }

    #[test]
    fn test_easy_ten_roasted_clicks_finish() {
        let mut session = GameSession::new();
        session.select_mode(GameMode::Easy);
        let center = Vec2::new(150.0 + 32.0, 200.0 + 32.0);
        for i in 1..=10 {
            session.marshmallows[0].roast_timer = 4.5;
            assert_eq!(session.register_click(center), Some(Doneness::Roasted));
            assert_eq!(session.score, i * 5);
            if i < 10 {
                assert!(!session.is_finished());
            }
        }
        assert!(session.is_finished());
    }

    #[test]
    fn test_name_editing_bounded() {
        let mut session = GameSession::new();
        for c in "ABCDEFGHIJKLMNOP".chars() {
            session.push_name_char(c);
        }
        assert_eq!(session.player_name.chars().count(), MAX_NAME_LEN);
        session.pop_name_char();
        assert_eq!(session.player_name, "ABCDEFGHIJK");
        session.push_name_char('\n');
        assert_eq!(session.player_name, "ABCDEFGHIJK");
    }

    #[test]
    fn test_name_guard_rejects_whitespace() {
        let mut session = GameSession::new();
        assert!(!session.name_is_valid());
        session.push_name_char(' ');
        assert!(!session.name_is_valid());
        session.push_name_char('A');
        assert!(session.name_is_valid());
    }

    proptest! {
        #[test]
        fn doneness_never_regresses(start in 0.0f32..20.0, extra in 0.0f32..20.0) {
            let before = Doneness::from_timer(start);
            let after = Doneness::from_timer(start + extra);
            prop_assert!(rank(after) >= rank(before));
        }
    }
}
