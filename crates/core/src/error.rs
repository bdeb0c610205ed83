//! Construction-time errors.
//!
//! Gameplay actions never fail; these only guard the public constructors.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("tube capacity must be at least 1")]
    InvalidCapacity,

    #[error("level numbers start at 1")]
    InvalidLevelNumber,

    #[error("pattern must contain at least one color")]
    EmptyPattern,

    #[error("pattern of length {len} exceeds the maximum of {max}")]
    PatternTooLong { len: usize, max: usize },

    #[error("no colors available to draw from")]
    EmptyPalette,
}
