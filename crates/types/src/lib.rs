//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no behaviour beyond parsing and naming, making them
//! usable in any context (core logic, the session shell, the command parser).
//!
//! # Difficulty Tiers
//!
//! A level's shape is chosen from one of three tiers:
//!
//! | Tier | Colors | Pattern length | Tube capacity | Time limit |
//! |------|--------|----------------|---------------|------------|
//! | Base | red, blue, green, yellow | 3 | 8 | 60s |
//! | Medium | + purple | 4 | 10 | 90s |
//! | Hard | + orange | 5 | 12 | 120s |
//!
//! The medium tier applies when the difficulty is above [`Difficulty::Easy`] or the level
//! number exceeds [`EASY_MAX_LEVEL`]; the hard tier when the difficulty is
//! [`Difficulty::Hard`] or the level number exceeds [`MEDIUM_MAX_LEVEL`]. A hard level
//! always carries the medium palette too, purple before orange.
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MATCH_POINTS_PER_BLOCK` | 10 | Points per block consumed by a match |
//! | `LEVEL_BASE_SCORE` | 100 | Flat bonus for finishing a level |
//! | `TIME_BONUS_PER_SECOND` | 5 | Bonus per second left on the clock |
//!
//! # Examples
//!
//! ```
//! use colorstack_types::{Color, Difficulty, MAX_PATTERNS};
//!
//! assert_eq!(Color::from_str("Red"), Some(Color::Red));
//! assert_eq!(Color::from_str("p"), Some(Color::Purple));
//! assert_eq!(Color::Orange.as_str(), "orange");
//!
//! assert_eq!(Difficulty::for_level(5), Difficulty::Easy);
//! assert_eq!(Difficulty::for_level(6), Difficulty::Medium);
//! assert_eq!(Difficulty::for_level(11), Difficulty::Hard);
//!
//! assert_eq!(MAX_PATTERNS, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Timer tick interval in milliseconds (one game second)
pub const TICK_MS: u64 = 1000;

/// Maximum number of simultaneously active patterns
pub const MAX_PATTERNS: usize = 3;

/// One extra pattern is added every this many levels (until [`MAX_PATTERNS`])
pub const LEVELS_PER_EXTRA_PATTERN: u32 = 3;

/// Longest pattern any tier generates
pub const MAX_PATTERN_LENGTH: usize = 5;

/// Number of colors in the closed palette
pub const COLOR_COUNT: usize = 6;

/// Highest level number still generated with the base tier (unless difficulty overrides)
pub const EASY_MAX_LEVEL: u32 = 5;

/// Highest level number still generated below the hard tier (unless difficulty overrides)
pub const MEDIUM_MAX_LEVEL: u32 = 10;

/// Points awarded per block consumed by a pattern match
pub const MATCH_POINTS_PER_BLOCK: u32 = 10;

/// Flat level-completion bonus before the time bonus and multiplier
pub const LEVEL_BASE_SCORE: u32 = 100;

/// Level-completion bonus per second remaining
pub const TIME_BONUS_PER_SECOND: u32 = 5;

/// Block colors
///
/// The palette is closed: every block, pattern and level draws from these six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// All colors, in palette order
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    /// Parse color from string (case-insensitive)
    ///
    /// Accepts the full name or its initial letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorstack_types::Color;
    ///
    /// assert_eq!(Color::from_str("blue"), Some(Color::Blue));
    /// assert_eq!(Color::from_str("G"), Some(Color::Green));
    /// assert_eq!(Color::from_str("cyan"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(Color::Red),
            "blue" | "b" => Some(Color::Blue),
            "green" | "g" => Some(Color::Green),
            "yellow" | "y" => Some(Color::Yellow),
            "purple" | "p" => Some(Color::Purple),
            "orange" | "o" => Some(Color::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
        }
    }
}

/// Coarse difficulty knob chosen when a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Difficulty implied by a level number when advancing levels
    pub fn for_level(level_number: u32) -> Self {
        if level_number <= EASY_MAX_LEVEL {
            Difficulty::Easy
        } else if level_number <= MEDIUM_MAX_LEVEL {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// "easy" | "e", "medium" | "m", "hard" | "h"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "e" => Some(Difficulty::Easy),
            "medium" | "m" => Some(Difficulty::Medium),
            "hard" | "h" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Shape of a level before patterns are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub pattern_length: usize,
    pub tube_capacity: usize,
    pub time_limit: u32,
}

/// Colors every level starts with
pub const BASE_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

pub const BASE_TIER: Tier = Tier {
    pattern_length: 3,
    tube_capacity: 8,
    time_limit: 60,
};

/// Added on top of the base tier; unlocks [`Color::Purple`]
pub const MEDIUM_TIER: Tier = Tier {
    pattern_length: 4,
    tube_capacity: 10,
    time_limit: 90,
};

/// Added on top of the medium tier; unlocks [`Color::Orange`]
pub const HARD_TIER: Tier = Tier {
    pattern_length: 5,
    tube_capacity: 12,
    time_limit: 120,
};
