use crate::models::TileId;

use super::{bag::TileBag, rack_board::RackBoardState};

/// All mutable state of one game, owned by its controller
pub struct GameState {
    pub bag: TileBag,
    pub tiles: RackBoardState,
    pub total_score: u32,
    /// Live score of the word currently on the board
    pub word_score: u32,
    pub message: Option<String>,
    /// Id handed to the next tile drawn. Keeps counting across restarts.
    pub next_tile_id: TileId,
}

impl GameState {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            bag: TileBag::new(seed),
            tiles: RackBoardState::new(),
            total_score: 0,
            word_score: 0,
            message: None,
            next_tile_id: 1,
        }
    }

    pub fn refill_rack(&mut self) -> usize {
        self.tiles.refill_rack(&mut self.bag, &mut self.next_tile_id)
    }
}
