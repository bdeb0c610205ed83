//! Session configuration from environment variables.

use colorstack_types::{Difficulty, TICK_MS};
use rand::Rng;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the game RNG
    pub seed: u32,
    /// Milliseconds between timer ticks (one game second)
    pub tick_ms: u64,
    /// Difficulty used when a start command names none
    pub difficulty: Difficulty,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            difficulty: Difficulty::Easy,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `COLORSTACK_SEED`: RNG seed (default: random)
    /// - `COLORSTACK_TICK_MS`: tick interval (default: 1000)
    /// - `COLORSTACK_DIFFICULTY`: easy | medium | hard (default: easy)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("COLORSTACK_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(|| rand::rng().random());

        let tick_ms = lookup("COLORSTACK_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(TICK_MS);

        let difficulty = lookup("COLORSTACK_DIFFICULTY")
            .and_then(|s| Difficulty::from_str(s.trim()))
            .unwrap_or_default();

        Self {
            seed,
            tick_ms,
            difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_from_vars() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("COLORSTACK_SEED", "42"),
            ("COLORSTACK_TICK_MS", "250"),
            ("COLORSTACK_DIFFICULTY", "Hard"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.tick_ms, 250);
        assert_eq!(config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_config_falls_back_on_bad_values() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("COLORSTACK_TICK_MS", "0"),
            ("COLORSTACK_DIFFICULTY", "brutal"),
        ]));
        assert_eq!(config.tick_ms, TICK_MS);
        assert_eq!(config.difficulty, Difficulty::Easy);

        let config = SessionConfig::from_lookup(lookup(&[("COLORSTACK_TICK_MS", "soon")]));
        assert_eq!(config.tick_ms, TICK_MS);
    }

    #[test]
    fn test_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.tick_ms, 1000);
        assert_eq!(config.difficulty, Difficulty::Easy);
    }
}
