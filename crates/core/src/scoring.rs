//! Scoring module - match points and level-completion bonus
//!
//! The level bonus is `floor((100 + time_remaining * 5) * (1 + level * 0.1))`,
//! evaluated in integer tenths so it never picks up float rounding.

use crate::types::{LEVEL_BASE_SCORE, MATCH_POINTS_PER_BLOCK, TIME_BONUS_PER_SECOND};

/// Points for consuming a matched pattern of `pattern_length` blocks
pub fn match_points(pattern_length: usize) -> u32 {
    (pattern_length as u32).saturating_mul(MATCH_POINTS_PER_BLOCK)
}

/// Level-completion bonus
/// time_remaining: seconds left on the clock
/// level_number: the level being completed
pub fn calculate_score(time_remaining: u32, level_number: u32) -> u32 {
    let base = LEVEL_BASE_SCORE as u64 + time_remaining as u64 * TIME_BONUS_PER_SECOND as u64;
    let multiplier_tenths = 10 + level_number as u64;
    let total = base.saturating_mul(multiplier_tenths) / 10;
    total.min(u32::MAX as u64) as u32
}
