//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and the state machine that applies them.
//! It has **zero dependencies** on rendering, input, timers or I/O, making it:
//!
//! - **Deterministic**: the game state carries its own seeded RNG, so the same seed
//!   and action sequence replay the same game
//! - **Immutable**: every transition returns a new [`GameState`]; the previous one
//!   stays valid
//! - **Forgiving**: invalid gameplay actions (full tube, empty tube, unknown tube id)
//!   are no-ops, never errors
//!
//! # Module Structure
//!
//! - [`tube`]: blocks, tube ids and the capacity-bounded stack
//! - [`pattern`]: target patterns and top-of-stack suffix matching
//! - [`level`]: difficulty-scaled level generation and pattern reshuffling
//! - [`scoring`]: match points and the level-completion bonus
//! - [`rng`]: seeded LCG used for every random draw
//! - [`game_state`]: the reducer and its lifecycle phases
//! - [`snapshot`]: serializable observer view of a state
//!
//! # Example
//!
//! ```
//! use colorstack_core::{Block, GameAction, GameState};
//! use colorstack_core::types::Difficulty;
//!
//! let state = GameState::new(12345).reduce(GameAction::StartGame {
//!     difficulty: Difficulty::Easy,
//! });
//!
//! // Stack the first target pattern onto the main tube
//! let tube_id = state.main_tube().unwrap().id();
//! let target = state.level().patterns()[0].colors().to_vec();
//! let mut state = state;
//! for color in target {
//!     state = state.reduce(GameAction::AddBlockToTube {
//!         tube_id,
//!         block: Block::new(color),
//!     });
//! }
//!
//! // Matching is a separate step
//! let state = state.reduce(GameAction::CheckPatternMatches);
//! assert_eq!(state.score(), 30);
//! assert!(state.main_tube().unwrap().is_empty());
//! ```

pub mod action;
pub mod error;
pub mod game_state;
pub mod level;
pub mod pattern;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tube;

pub use colorstack_types as types;

// Re-export commonly used types for convenience
pub use action::GameAction;
pub use error::GameError;
pub use game_state::{GamePhase, GameState, MatchReport, PatternMatch};
pub use level::{generate_level, pattern_count, shuffle_patterns, Level};
pub use pattern::{generate_pattern, matches, random_color, Pattern};
pub use rng::{shuffled, SimpleRng};
pub use scoring::{calculate_score, match_points};
pub use snapshot::{format_time, GameSnapshot, TubeSnapshot};
pub use tube::{Block, BlockId, Tube, TubeId};
