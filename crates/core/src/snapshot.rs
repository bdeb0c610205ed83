//! Observer snapshot of a [`GameState`].
//!
//! Flattened, serializable view re-read after every transition.

use serde::Serialize;

use crate::game_state::{GamePhase, GameState};
use crate::pattern::Pattern;
use crate::tube::TubeId;
use crate::types::Color;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TubeSnapshot {
    pub id: TubeId,
    pub capacity: usize,
    /// Bottom to top
    pub colors: Vec<Color>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub level: u32,
    pub phase: GamePhase,
    pub headline: &'static str,
    pub score: u32,
    pub time_remaining: u32,
    /// `time_remaining` as `m:ss`
    pub clock: String,
    pub available_colors: Vec<Color>,
    pub patterns: Vec<Pattern>,
    pub tubes: Vec<TubeSnapshot>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let phase = state.phase();
        Self {
            level: state.level().id(),
            phase,
            headline: phase.headline(),
            score: state.score(),
            time_remaining: state.time_remaining(),
            clock: format_time(state.time_remaining()),
            available_colors: state.level().available_colors().to_vec(),
            patterns: state.level().patterns().to_vec(),
            tubes: state
                .tubes()
                .iter()
                .map(|t| TubeSnapshot {
                    id: t.id(),
                    capacity: t.capacity(),
                    colors: t.colors().collect(),
                })
                .collect(),
        }
    }
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

/// Format seconds as `m:ss`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::GameAction;
    use crate::types::Difficulty;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(125), "2:05");
    }

    #[test]
    fn test_snapshot_of_not_started() {
        let snap = GameState::new(1).snapshot();
        assert_eq!(snap.level, 0);
        assert_eq!(snap.phase, GamePhase::NotStarted);
        assert_eq!(snap.headline, "Start New Game");
        assert!(snap.tubes.is_empty());
        assert!(!snap.playable());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::new(7).reduce(GameAction::StartGame {
            difficulty: Difficulty::Medium,
        });
        let snap = state.snapshot();
        assert!(snap.playable());
        assert_eq!(snap.clock, "1:30");
        assert_eq!(snap.available_colors.len(), 5);
        assert_eq!(snap.patterns, state.level().patterns());
        assert_eq!(snap.tubes.len(), 1);
        assert_eq!(snap.tubes[0].capacity, 10);
        assert_eq!(snap.tubes[0].id, state.main_tube().unwrap().id());
    }

    #[test]
    fn test_snapshot_serializes_lowercase_names() {
        let state = GameState::new(7).reduce(GameAction::StartGame {
            difficulty: Difficulty::Easy,
        });
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["phase"], "playing");
        assert_eq!(json["available_colors"][0], "red");
        assert_eq!(json["patterns"][0]["colors"].as_array().unwrap().len(), 3);
    }
}
