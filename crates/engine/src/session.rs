//! Session - owns the current game state and applies player intents to it.
//!
//! The reducer in `colorstack_core` never checks for matches on its own when a
//! tube changes. The session closes that gap: every dispatched tube mutation
//! that leaves the game playing is immediately followed by a match check, so a
//! completed pattern is consumed in the same step that completed it.
//!
//! Player intents ([`Session::select_color`], [`Session::click_tube`]) are
//! ignored unless the game is playing, mirroring what a front end would allow.

use colorstack_core::{Block, GameAction, GamePhase, GameSnapshot, GameState, MatchReport, TubeId};
use colorstack_types::{Color, Difficulty};
use tracing::{debug, info, trace};

use crate::config::SessionConfig;

/// Single-player game session
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: GameState::new(config.seed),
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Whether the timer should be delivering ticks right now
    pub fn ticking(&self) -> bool {
        self.state.is_playing()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Apply `action`, running the post-mutation match check where needed.
    ///
    /// Returns the match report when this step consumed at least one pattern.
    pub fn dispatch(&mut self, action: GameAction) -> Option<MatchReport> {
        if action == GameAction::TickTimer {
            trace!(time_remaining = self.state.time_remaining(), "tick");
        } else {
            debug!(action = action.as_str(), "dispatch");
        }

        let (next, report) = if action == GameAction::CheckPatternMatches {
            Self::checked(self.state.clone())
        } else {
            let next = self.state.reduce(action);
            if action.mutates_tubes() && next.tubes() != self.state.tubes() && next.is_playing() {
                Self::checked(next)
            } else {
                (next, None)
            }
        };

        self.log_transition(&next, report.as_ref());
        self.state = next;
        report
    }

    fn checked(state: GameState) -> (GameState, Option<MatchReport>) {
        match state.check_pattern_matches() {
            Some((next, report)) => (next, Some(report)),
            None => (state, None),
        }
    }

    fn log_transition(&self, next: &GameState, report: Option<&MatchReport>) {
        let (from, to) = (self.state.phase(), next.phase());
        if from != to {
            info!(from = from.as_str(), to = to.as_str(), "phase changed");
        }
        if next.level().id() != self.state.level().id() && next.level().id() != 0 {
            info!(
                level = next.level().id(),
                patterns = next.level().patterns().len(),
                time_limit = next.level().time_limit(),
                "level ready"
            );
        }
        if let Some(report) = report {
            info!(
                matches = report.matches.len(),
                points = report.points,
                score = next.score(),
                "pattern matched"
            );
        }
    }

    /// Start a new game; `None` uses the configured difficulty.
    pub fn start(&mut self, difficulty: Option<Difficulty>) {
        let difficulty = difficulty.unwrap_or(self.config.difficulty);
        self.dispatch(GameAction::StartGame { difficulty });
    }

    /// Pick `color` onto the main tube.
    pub fn select_color(&mut self, color: Color) -> Option<MatchReport> {
        if !self.state.is_playing() {
            return None;
        }
        if !self.state.level().available_colors().contains(&color) {
            debug!(color = color.as_str(), "color not in this level's palette");
            return None;
        }
        let tube_id = self.state.main_tube()?.id();
        self.dispatch(GameAction::AddBlockToTube {
            tube_id,
            block: Block::new(color),
        })
    }

    /// Remove the top block of `tube_id`.
    pub fn click_tube(&mut self, tube_id: TubeId) -> Option<MatchReport> {
        if !self.state.is_playing() {
            return None;
        }
        self.dispatch(GameAction::RemoveTopBlock { tube_id })
    }

    /// Remove the top block of the main tube.
    pub fn pop_main(&mut self) -> Option<MatchReport> {
        let tube_id = self.state.main_tube()?.id();
        self.click_tube(tube_id)
    }

    /// Advance to the next level, banking the time bonus. Ignored unless playing.
    pub fn next_level(&mut self) {
        if !self.state.is_playing() {
            debug!(phase = self.state.phase().as_str(), "next level ignored");
            return;
        }
        self.dispatch(GameAction::NextLevel);
    }

    /// Pause when playing, resume when paused.
    pub fn toggle_pause(&mut self) {
        match self.state.phase() {
            GamePhase::Playing => {
                self.dispatch(GameAction::PauseGame);
            }
            GamePhase::Paused => {
                self.dispatch(GameAction::ResumeGame);
            }
            GamePhase::NotStarted | GamePhase::GameOver => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u32) -> Session {
        Session::new(SessionConfig {
            seed,
            ..SessionConfig::default()
        })
    }

    fn target(session: &Session) -> Vec<Color> {
        session.state().level().patterns()[0].colors().to_vec()
    }

    #[test]
    fn test_intents_ignored_before_start() {
        let mut s = session(1);
        assert_eq!(s.select_color(Color::Red), None);
        assert_eq!(s.pop_main(), None);
        assert_eq!(s.phase(), GamePhase::NotStarted);
        assert!(!s.ticking());
    }

    #[test]
    fn test_start_uses_config_difficulty() {
        let mut s = Session::new(SessionConfig {
            seed: 3,
            difficulty: Difficulty::Hard,
            ..SessionConfig::default()
        });
        s.start(None);
        assert_eq!(s.state().level().tube_capacity(), 12);
        assert!(s.ticking());

        s.start(Some(Difficulty::Easy));
        assert_eq!(s.state().level().tube_capacity(), 8);
    }

    #[test]
    fn test_completed_pattern_consumed_immediately() {
        let mut s = session(21);
        s.start(Some(Difficulty::Easy));
        let colors = target(&s);

        assert_eq!(s.select_color(colors[0]), None);
        assert_eq!(s.select_color(colors[1]), None);
        let report = s.select_color(colors[2]).expect("third block completes the pattern");

        assert_eq!(report.points, 30);
        assert_eq!(s.state().score(), 30);
        assert!(s.state().main_tube().unwrap().is_empty());
        assert_eq!(s.state().level().patterns()[0].len(), 3);
    }

    #[test]
    fn test_pop_then_complete_pattern() {
        let mut s = session(21);
        s.start(Some(Difficulty::Easy));
        let colors = target(&s);
        let wrong = s
            .state()
            .level()
            .available_colors()
            .iter()
            .copied()
            .find(|c| *c != colors[2])
            .unwrap();

        s.select_color(colors[0]);
        s.select_color(colors[1]);
        assert_eq!(s.select_color(wrong), None);
        assert_eq!(s.state().main_tube().unwrap().len(), 3);

        assert_eq!(s.pop_main(), None);
        let report = s.select_color(colors[2]).unwrap();
        assert_eq!(report.points, 30);
        assert!(s.state().main_tube().unwrap().is_empty());
    }

    #[test]
    fn test_color_outside_palette_ignored() {
        let mut s = session(5);
        s.start(Some(Difficulty::Easy));
        assert_eq!(s.select_color(Color::Orange), None);
        assert!(s.state().main_tube().unwrap().is_empty());
    }

    #[test]
    fn test_intents_ignored_while_paused() {
        let mut s = session(5);
        s.start(Some(Difficulty::Easy));
        s.toggle_pause();
        assert_eq!(s.phase(), GamePhase::Paused);
        assert!(!s.ticking());

        s.select_color(Color::Red);
        assert!(s.state().main_tube().unwrap().is_empty());

        s.toggle_pause();
        assert_eq!(s.phase(), GamePhase::Playing);
        s.select_color(Color::Red);
        assert_eq!(s.state().main_tube().unwrap().len(), 1);
    }

    #[test]
    fn test_explicit_check_reports_nothing_on_empty_tube() {
        let mut s = session(5);
        s.start(Some(Difficulty::Easy));
        assert_eq!(s.dispatch(GameAction::CheckPatternMatches), None);
    }

    #[test]
    fn test_timer_runs_out() {
        let mut s = session(5);
        s.start(Some(Difficulty::Easy));
        for _ in 0..60 {
            s.dispatch(GameAction::TickTimer);
        }
        assert_eq!(s.phase(), GamePhase::GameOver);
        assert!(!s.ticking());
        assert_eq!(s.select_color(Color::Red), None);

        s.toggle_pause();
        assert_eq!(s.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_next_level_requires_playing() {
        let mut s = session(5);
        s.next_level();
        assert_eq!(s.phase(), GamePhase::NotStarted);
        assert_eq!(s.state().score(), 0);
        assert_eq!(s.state().level().id(), 0);

        s.start(None);
        s.toggle_pause();
        s.next_level();
        assert_eq!(s.phase(), GamePhase::Paused);
        assert_eq!(s.state().level().id(), 1);
        assert_eq!(s.state().score(), 0);

        s.toggle_pause();
        s.next_level();
        assert_eq!(s.state().level().id(), 2);
        // (100 + 60 * 5) * 1.1
        assert_eq!(s.state().score(), 440);

        for _ in 0..60 {
            s.dispatch(GameAction::TickTimer);
        }
        assert_eq!(s.phase(), GamePhase::GameOver);
        s.next_level();
        s.next_level();
        assert_eq!(s.state().level().id(), 2);
        assert_eq!(s.state().score(), 440);
    }

    #[test]
    fn test_reset_then_restart() {
        let mut s = session(5);
        s.start(None);
        s.dispatch(GameAction::ResetGame);
        assert_eq!(s.phase(), GamePhase::NotStarted);
        s.start(None);
        assert_eq!(s.phase(), GamePhase::Playing);
        assert_eq!(s.state().level().id(), 1);
    }
}
