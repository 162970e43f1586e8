use std::fmt;

use serde::{Deserialize, Serialize};

use super::game::{BOARD_SIZE, RACK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Rack,
    Board,
}

/// An addressable tile position, either on the rack or on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub kind: SlotKind,
    pub index: usize,
}

impl Slot {
    pub fn rack(index: usize) -> Self {
        Self {
            kind: SlotKind::Rack,
            index,
        }
    }

    pub fn board(index: usize) -> Self {
        Self {
            kind: SlotKind::Board,
            index,
        }
    }

    /// Whether the index lies within the rack or board it names
    pub fn in_range(&self) -> bool {
        match self.kind {
            SlotKind::Rack => self.index < RACK_SIZE,
            SlotKind::Board => self.index < BOARD_SIZE,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SlotKind::Rack => write!(f, "rack[{}]", self.index),
            SlotKind::Board => write!(f, "board[{}]", self.index),
        }
    }
}
