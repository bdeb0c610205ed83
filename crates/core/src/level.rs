//! Level module - difficulty-scaled level generation
//!
//! A level bundles the palette, tube capacity, time limit and the currently
//! active target patterns. The shape is picked deterministically from the
//! difficulty tiers in [`crate::types`]; only the pattern colors are random.

use std::num::NonZeroU32;

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::error::GameError;
use crate::pattern::{draw_pattern, Pattern};
use crate::rng::SimpleRng;
use crate::types::{
    Color, Difficulty, Tier, BASE_COLORS, BASE_TIER, COLOR_COUNT, EASY_MAX_LEVEL, HARD_TIER,
    LEVELS_PER_EXTRA_PATTERN, MAX_PATTERNS, MEDIUM_MAX_LEVEL, MEDIUM_TIER,
};

/// Level configuration and active targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Level {
    id: u32,
    patterns: ArrayVec<Pattern, MAX_PATTERNS>,
    available_colors: ArrayVec<Color, COLOR_COUNT>,
    tube_capacity: usize,
    time_limit: u32,
}

impl Level {
    /// Placeholder level of a game that has not started (id 0, nothing to play)
    pub fn not_started() -> Self {
        Self {
            id: 0,
            patterns: ArrayVec::new(),
            available_colors: ArrayVec::new(),
            tube_capacity: 0,
            time_limit: 0,
        }
    }

    pub(crate) fn generate(
        level_number: NonZeroU32,
        difficulty: Difficulty,
        rng: &mut SimpleRng,
    ) -> Self {
        let n = level_number.get();
        let mut available_colors: ArrayVec<Color, COLOR_COUNT> = BASE_COLORS.into_iter().collect();
        let mut tier: Tier = BASE_TIER;

        if difficulty != Difficulty::Easy || n > EASY_MAX_LEVEL {
            available_colors.push(Color::Purple);
            tier = MEDIUM_TIER;
        }

        if difficulty == Difficulty::Hard || n > MEDIUM_MAX_LEVEL {
            available_colors.push(Color::Orange);
            tier = HARD_TIER;
        }

        let count = pattern_count(n);
        let patterns = (0..count)
            .map(|_| draw_pattern(&available_colors, tier.pattern_length, rng))
            .collect();

        Self {
            id: n,
            patterns,
            available_colors,
            tube_capacity: tier.tube_capacity,
            time_limit: tier.time_limit,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn available_colors(&self) -> &[Color] {
        &self.available_colors
    }

    pub fn tube_capacity(&self) -> usize {
        self.tube_capacity
    }

    /// Time limit in seconds
    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    #[cfg(test)]
    pub(crate) fn with_patterns(mut self, patterns: Vec<Pattern>) -> Self {
        self.patterns = patterns.into_iter().collect();
        self
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::not_started()
    }
}

/// Number of simultaneous patterns for a level: `min(3, 1 + n / 3)`
pub fn pattern_count(level_number: u32) -> usize {
    let n = 1 + (level_number / LEVELS_PER_EXTRA_PATTERN) as usize;
    n.min(MAX_PATTERNS)
}

/// Generate a level for `level_number` (1-based) at `difficulty`.
///
/// The difficulty and level-number thresholds are checked independently,
/// so `generate_level(11, Easy)` still lands on the hard tier.
pub fn generate_level(
    level_number: u32,
    difficulty: Difficulty,
    rng: &mut SimpleRng,
) -> Result<Level, GameError> {
    let level_number = NonZeroU32::new(level_number).ok_or(GameError::InvalidLevelNumber)?;
    Ok(Level::generate(level_number, difficulty, rng))
}

/// Replace every pattern with a fresh one of the same length.
pub fn shuffle_patterns(level: &Level, rng: &mut SimpleRng) -> Level {
    let patterns = level
        .patterns
        .iter()
        .map(|p| draw_pattern(&level.available_colors, p.len(), rng))
        .collect();
    Level {
        patterns,
        ..level.clone()
    }
}
