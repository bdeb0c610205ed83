//! Game state module - the reducer that drives the whole game
//!
//! [`GameState::reduce`] is the only way to move the game forward. It takes the
//! current state by reference and returns the next one, so the previous state
//! stays valid for inspection. The state owns its [`SimpleRng`], which makes the
//! transition a pure function: the same seed and action sequence always yield
//! the same levels, patterns and tube ids.
//!
//! # Phases
//!
//! ```text
//! NotStarted --start--> Playing <--pause/resume--> Paused
//!                          |
//!                       timer hits 0
//!                          v
//!                       GameOver --start--> Playing
//! ```
//!
//! `ResetGame` returns to `NotStarted` from anywhere.

use std::num::NonZeroU32;

use serde::Serialize;

use crate::action::GameAction;
use crate::level::{shuffle_patterns, Level};
use crate::rng::SimpleRng;
use crate::scoring::{calculate_score, match_points};
use crate::tube::{Block, Tube, TubeId};
use crate::types::Difficulty;

/// Coarse lifecycle phase derived from the state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    NotStarted,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "not_started",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }

    /// Title shown above the controls for this phase
    pub fn headline(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "Start New Game",
            GamePhase::GameOver => "Game Over",
            GamePhase::Paused => "Game Paused",
            GamePhase::Playing => "Game Controls",
        }
    }
}

/// One pattern consumed from one tube during a match check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub tube_id: TubeId,
    /// Index into the level's patterns before they were reshuffled
    pub pattern_index: usize,
    pub length: usize,
}

/// Outcome of a match check that found at least one match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub matches: Vec<PatternMatch>,
    pub points: u32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    level: Level,
    tubes: Vec<Tube>,
    score: u32,
    time_remaining: u32,
    game_over: bool,
    paused: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Create a not-started game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::not_started(SimpleRng::new(seed))
    }

    fn not_started(rng: SimpleRng) -> Self {
        Self {
            level: Level::not_started(),
            tubes: Vec::new(),
            score: 0,
            time_remaining: 0,
            game_over: true,
            paused: false,
            rng,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    /// The tube player color picks go to
    pub fn main_tube(&self) -> Option<&Tube> {
        self.tubes.first()
    }

    pub fn tube(&self, id: TubeId) -> Option<&Tube> {
        self.tubes.iter().find(|t| t.id() == id)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left on the clock
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            if self.level.id() == 0 {
                GamePhase::NotStarted
            } else {
                GamePhase::GameOver
            }
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Playing
        }
    }

    /// Whether the periodic timer should be delivering ticks
    pub fn is_playing(&self) -> bool {
        self.phase() == GamePhase::Playing
    }

    /// Current RNG state
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Compute the state that follows `action`.
    pub fn reduce(&self, action: GameAction) -> GameState {
        match action {
            GameAction::StartGame { difficulty } => self.start_game(difficulty),
            GameAction::ResetGame => Self::not_started(self.rng.clone()),
            // Pausing a finished game is a no-op; resume stays unguarded.
            GameAction::PauseGame => {
                if self.game_over {
                    return self.clone();
                }
                Self {
                    paused: true,
                    ..self.clone()
                }
            }
            GameAction::ResumeGame => Self {
                paused: false,
                ..self.clone()
            },
            GameAction::AddBlockToTube { tube_id, block } => self.add_block(tube_id, block),
            GameAction::RemoveTopBlock { tube_id } => self.remove_top_block(tube_id),
            GameAction::CheckPatternMatches => match self.check_pattern_matches() {
                Some((next, _)) => next,
                None => self.clone(),
            },
            GameAction::TickTimer => self.tick_timer(),
            GameAction::NextLevel => self.next_level(),
            GameAction::ShufflePatterns => {
                let mut rng = self.rng.clone();
                let level = shuffle_patterns(&self.level, &mut rng);
                Self {
                    level,
                    rng,
                    ..self.clone()
                }
            }
        }
    }

    fn start_game(&self, difficulty: Difficulty) -> GameState {
        let mut rng = self.rng.clone();
        let level = Level::generate(NonZeroU32::MIN, difficulty, &mut rng);
        let tube = Tube::empty(TubeId::from_rng(&mut rng), level.tube_capacity());
        Self {
            time_remaining: level.time_limit(),
            level,
            tubes: vec![tube],
            score: 0,
            game_over: false,
            paused: false,
            rng,
        }
    }

    fn add_block(&self, tube_id: TubeId, block: Block) -> GameState {
        let tubes = self
            .tubes
            .iter()
            .map(|tube| {
                if tube.id() != tube_id {
                    return tube.clone();
                }
                // Full tube: the block is dropped.
                tube.push(block).unwrap_or_else(|| tube.clone())
            })
            .collect();
        Self {
            tubes,
            ..self.clone()
        }
    }

    fn remove_top_block(&self, tube_id: TubeId) -> GameState {
        let tubes = self
            .tubes
            .iter()
            .map(|tube| {
                if tube.id() == tube_id {
                    tube.pop().0
                } else {
                    tube.clone()
                }
            })
            .collect();
        Self {
            tubes,
            ..self.clone()
        }
    }

    /// Consume every tube suffix that matches an active pattern.
    ///
    /// Patterns are tried in list order against each tube, and every match is
    /// applied before the next pattern is tried, so a later pattern sees the
    /// tube already shortened by an earlier one. Returns `None` when nothing
    /// matched. On any match all patterns are redrawn, not only the matched ones.
    pub fn check_pattern_matches(&self) -> Option<(GameState, MatchReport)> {
        let mut tubes = self.tubes.clone();
        let mut report = MatchReport::default();

        for tube in tubes.iter_mut() {
            for (pattern_index, pattern) in self.level.patterns().iter().enumerate() {
                if pattern.matches(tube) {
                    *tube = tube.consume_match(pattern.len());
                    report.matches.push(PatternMatch {
                        tube_id: tube.id(),
                        pattern_index,
                        length: pattern.len(),
                    });
                    report.points = report.points.saturating_add(match_points(pattern.len()));
                }
            }
        }

        if report.matches.is_empty() {
            return None;
        }

        let mut rng = self.rng.clone();
        let level = shuffle_patterns(&self.level, &mut rng);
        let next = Self {
            level,
            tubes,
            score: self.score.saturating_add(report.points),
            rng,
            ..self.clone()
        };
        Some((next, report))
    }

    fn tick_timer(&self) -> GameState {
        if self.paused || self.game_over {
            return self.clone();
        }
        let time_remaining = self.time_remaining.saturating_sub(1);
        Self {
            time_remaining,
            game_over: time_remaining == 0,
            ..self.clone()
        }
    }

    fn next_level(&self) -> GameState {
        let next_number = NonZeroU32::MIN.saturating_add(self.level.id());
        let difficulty = Difficulty::for_level(next_number.get());

        let mut rng = self.rng.clone();
        let level = Level::generate(next_number, difficulty, &mut rng);
        let tube = Tube::empty(TubeId::from_rng(&mut rng), level.tube_capacity());
        let bonus = calculate_score(self.time_remaining, self.level.id());

        Self {
            time_remaining: level.time_limit(),
            level,
            tubes: vec![tube],
            score: self.score.saturating_add(bonus),
            rng,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
