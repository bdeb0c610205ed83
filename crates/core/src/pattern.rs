//! Pattern module - target color sequences and suffix matching
//!
//! A pattern matches a tube when the tube's topmost blocks, read bottom to top,
//! equal the pattern's colors element-wise. Pattern index 0 lines up with the
//! deepest block of the compared slice and the last index with the top block.
//! There is no partial credit.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::error::GameError;
use crate::rng::SimpleRng;
use crate::tube::Tube;
use crate::types::{Color, MAX_PATTERN_LENGTH};

/// Target sequence of 1..=[`MAX_PATTERN_LENGTH`] colors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    colors: ArrayVec<Color, MAX_PATTERN_LENGTH>,
}

impl Pattern {
    pub fn new(colors: &[Color]) -> Result<Self, GameError> {
        if colors.is_empty() {
            return Err(GameError::EmptyPattern);
        }
        let colors = ArrayVec::try_from(colors).map_err(|_| GameError::PatternTooLong {
            len: colors.len(),
            max: MAX_PATTERN_LENGTH,
        })?;
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for constructed patterns
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether this pattern is the exact top-of-stack suffix of `tube`.
    pub fn matches(&self, tube: &Tube) -> bool {
        matches(tube, self)
    }
}

/// Check if the pattern matches the tube's top blocks
pub fn matches(tube: &Tube, pattern: &Pattern) -> bool {
    let blocks = tube.blocks();
    let n = pattern.len();
    if n == 0 || blocks.len() < n {
        return false;
    }
    blocks[blocks.len() - n..]
        .iter()
        .zip(pattern.colors())
        .all(|(block, &color)| block.color == color)
}

/// Pick a color uniformly from `colors`
pub fn random_color(colors: &[Color], rng: &mut SimpleRng) -> Option<Color> {
    rng.pick(colors).copied()
}

/// Generate a pattern of `length` colors drawn with replacement from `colors`.
pub fn generate_pattern(
    colors: &[Color],
    length: usize,
    rng: &mut SimpleRng,
) -> Result<Pattern, GameError> {
    if colors.is_empty() {
        return Err(GameError::EmptyPalette);
    }
    if length == 0 {
        return Err(GameError::EmptyPattern);
    }
    if length > MAX_PATTERN_LENGTH {
        return Err(GameError::PatternTooLong {
            len: length,
            max: MAX_PATTERN_LENGTH,
        });
    }
    Ok(draw_pattern(colors, length, rng))
}

/// Unchecked draw for callers that already hold a valid palette and length.
pub(crate) fn draw_pattern(colors: &[Color], length: usize, rng: &mut SimpleRng) -> Pattern {
    let colors = (0..length.min(MAX_PATTERN_LENGTH))
        .filter_map(|_| random_color(colors, rng))
        .collect();
    Pattern { colors }
}
