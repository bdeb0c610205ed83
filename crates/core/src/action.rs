//! Actions consumed by [`GameState::reduce`](crate::GameState::reduce).

use crate::tube::{Block, TubeId};
use crate::types::Difficulty;

/// Game actions that can be applied to produce the next game state
///
/// Player intents and the timer tick both arrive here. Each action maps to
/// exactly one transition of the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start level 1 at the given difficulty (valid from any state)
    StartGame { difficulty: Difficulty },
    /// Return to the not-started state
    ResetGame,
    PauseGame,
    ResumeGame,
    /// Push a block onto the addressed tube (dropped if the tube is full)
    AddBlockToTube { tube_id: TubeId, block: Block },
    /// Pop the top block of the addressed tube
    RemoveTopBlock { tube_id: TubeId },
    /// Consume every tube suffix that matches an active pattern
    CheckPatternMatches,
    /// One second of game time
    TickTimer,
    /// Advance to the next level, awarding the time bonus
    NextLevel,
    /// Redraw every active pattern
    ShufflePatterns,
}

impl GameAction {
    /// Convert to camelCase string for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::StartGame { .. } => "startGame",
            GameAction::ResetGame => "resetGame",
            GameAction::PauseGame => "pauseGame",
            GameAction::ResumeGame => "resumeGame",
            GameAction::AddBlockToTube { .. } => "addBlockToTube",
            GameAction::RemoveTopBlock { .. } => "removeTopBlock",
            GameAction::CheckPatternMatches => "checkPatternMatches",
            GameAction::TickTimer => "tickTimer",
            GameAction::NextLevel => "nextLevel",
            GameAction::ShufflePatterns => "shufflePatterns",
        }
    }

    /// Whether this action is a direct tube mutation that must be followed by a match check.
    pub fn mutates_tubes(&self) -> bool {
        matches!(
            self,
            GameAction::AddBlockToTube { .. } | GameAction::RemoveTopBlock { .. }
        )
    }
}
