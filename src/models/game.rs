use serde::{Deserialize, Serialize};

use crate::utils::letters::{get_letter_value, BLANK};

/// Number of slots on the player's rack
pub const RACK_SIZE: usize = 7;
/// Number of squares on the one-line board
pub const BOARD_SIZE: usize = 15;

pub type TileId = u64;

/// A letter drawn from the bag.
///
/// Tiles are deliberately not `Copy`: moving one between slots hands over
/// ownership, so the same tile can never sit in two slots at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub letter: char,
    pub value: u8,
}

impl Tile {
    /// Mint a tile, copying its value from the letter table
    pub fn new(id: TileId, letter: char) -> Self {
        Self {
            id,
            letter,
            value: get_letter_value(letter),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.letter == BLANK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bonus {
    #[serde(rename = "DL")]
    DoubleLetter,
    #[serde(rename = "DW")]
    DoubleWord,
}

pub type BonusLayout = [Option<Bonus>; BOARD_SIZE];

/// Bonus squares of the one-line board
pub const BOARD_BONUS: BonusLayout = [
    None,
    None,
    Some(Bonus::DoubleWord),
    None,
    None,
    None,
    Some(Bonus::DoubleLetter),
    None,
    Some(Bonus::DoubleLetter),
    None,
    None,
    Some(Bonus::DoubleWord),
    None,
    None,
    None,
];

pub type Rack = [Option<Tile>; RACK_SIZE];
pub type Board = [Option<Tile>; BOARD_SIZE];
