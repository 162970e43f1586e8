use serde::{Deserialize, Serialize};

use super::game::{Board, BonusLayout, Rack};

/// Everything a presentation layer needs to redraw the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rack: Rack,
    pub board: Board,
    pub bonuses: BonusLayout,
    /// Letters currently on the board, left to right
    pub word: String,
    pub word_score: u32,
    pub total_score: u32,
    pub tiles_remaining: usize,
    /// Player-facing status line, e.g. a gap warning
    pub message: Option<String>,
}
