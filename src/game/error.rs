use thiserror::Error;

use crate::models::Slot;

/// Reasons an action against the game is turned down. None are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0} does not exist")]
    SlotOutOfRange(Slot),

    #[error("{0} holds no tile")]
    EmptySource(Slot),

    #[error("{0} is already occupied")]
    DestinationOccupied(Slot),

    #[error("there is no word on the board")]
    EmptyBoard,

    #[error("Invalid word: tiles must be contiguous (no gaps).")]
    GapInBoard,
}

impl GameError {
    /// Rejections that are plain no-ops and never shown to the player
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            GameError::EmptySource(_) | GameError::DestinationOccupied(_) | GameError::EmptyBoard
        )
    }
}
