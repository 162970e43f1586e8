use crate::models::{Board, Rack, Slot, SlotKind, Tile, TileId};

use super::{bag::TileBag, error::GameError};

/// The player's rack and the one-line board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RackBoardState {
    rack: Rack,
    board: Board,
}

impl RackBoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn get(&self, slot: Slot) -> Option<&Tile> {
        match slot.kind {
            SlotKind::Rack => self.rack.get(slot.index)?.as_ref(),
            SlotKind::Board => self.board.get(slot.index)?.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> Result<&mut Option<Tile>, GameError> {
        let cell = match slot.kind {
            SlotKind::Rack => self.rack.get_mut(slot.index),
            SlotKind::Board => self.board.get_mut(slot.index),
        };
        cell.ok_or(GameError::SlotOutOfRange(slot))
    }

    /// Move the tile at `from` into the empty slot `to`.
    ///
    /// Tiles never overwrite each other: an occupied destination (including
    /// `from == to`) or an empty source leaves everything untouched.
    pub fn move_tile(&mut self, from: Slot, to: Slot) -> Result<TileId, GameError> {
        for slot in [from, to] {
            if !slot.in_range() {
                return Err(GameError::SlotOutOfRange(slot));
            }
        }
        if self.get(to).is_some() {
            return Err(GameError::DestinationOccupied(to));
        }

        let tile = self.slot_mut(from)?.take().ok_or(GameError::EmptySource(from))?;
        let id = tile.id;
        *self.slot_mut(to)? = Some(tile);

        tracing::debug!("Moved tile {} from {} to {}", id, from, to);
        Ok(id)
    }

    /// Fill empty rack slots left to right from the bag.
    /// Occupied slots are kept; slots stay empty once the bag runs out.
    /// Returns the number of tiles drawn.
    pub fn refill_rack(&mut self, bag: &mut TileBag, next_id: &mut TileId) -> usize {
        let mut drawn = 0;
        for cell in self.rack.iter_mut().filter(|cell| cell.is_none()) {
            let Some(letter) = bag.draw() else {
                break;
            };
            *cell = Some(Tile::new(*next_id, letter));
            *next_id += 1;
            drawn += 1;
        }

        if drawn > 0 {
            tracing::debug!("Drew {} tiles, {} left in bag", drawn, bag.len());
        }
        drawn
    }

    pub fn clear_board(&mut self) {
        self.board = Default::default();
    }

    pub fn clear_rack(&mut self) {
        self.rack = Default::default();
    }

    pub fn board_is_empty(&self) -> bool {
        self.board.iter().all(Option::is_none)
    }

    /// Every tile on the rack or board
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rack.iter().chain(self.board.iter()).flatten()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::{BOARD_SIZE, RACK_SIZE};
    use crate::utils::letters::full_set;

    fn dealt(seed: u64) -> (RackBoardState, TileBag, TileId) {
        let mut state = RackBoardState::new();
        let mut bag = TileBag::new(Some(seed));
        let mut next_id = 1;
        state.refill_rack(&mut bag, &mut next_id);
        (state, bag, next_id)
    }

    #[test]
    fn test_refill_fills_all_slots() {
        let (state, bag, next_id) = dealt(5);
        assert!(state.rack().iter().all(Option::is_some));
        assert_eq!(bag.len(), 91);
        assert_eq!(next_id, 8);
    }

    #[test]
    fn test_move_rack_to_board() {
        let (mut state, _, _) = dealt(5);
        let id = state.rack()[0].as_ref().unwrap().id;

        assert_eq!(state.move_tile(Slot::rack(0), Slot::board(7)), Ok(id));
        assert!(state.rack()[0].is_none());
        assert_eq!(state.board()[7].as_ref().map(|t| t.id), Some(id));
    }

    #[test]
    fn test_move_to_occupied_is_rejected() {
        let (mut state, _, _) = dealt(5);
        let before = state.clone();

        assert_eq!(
            state.move_tile(Slot::rack(0), Slot::rack(1)),
            Err(GameError::DestinationOccupied(Slot::rack(1)))
        );
        assert_eq!(
            state.move_tile(Slot::rack(2), Slot::rack(2)),
            Err(GameError::DestinationOccupied(Slot::rack(2)))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_from_empty_is_rejected() {
        let (mut state, _, _) = dealt(5);
        let before = state.clone();
        assert_eq!(
            state.move_tile(Slot::board(0), Slot::board(1)),
            Err(GameError::EmptySource(Slot::board(0)))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_out_of_range() {
        let (mut state, _, _) = dealt(5);
        assert_eq!(
            state.move_tile(Slot::rack(0), Slot::board(BOARD_SIZE)),
            Err(GameError::SlotOutOfRange(Slot::board(BOARD_SIZE)))
        );
        assert_eq!(
            state.move_tile(Slot::rack(RACK_SIZE), Slot::board(0)),
            Err(GameError::SlotOutOfRange(Slot::rack(RACK_SIZE)))
        );
    }

    #[test]
    fn test_refill_keeps_untouched_tiles() {
        let (mut state, mut bag, mut next_id) = dealt(9);
        let kept: Vec<TileId> = state.rack()[3..].iter().flatten().map(|t| t.id).collect();
        for i in 0..3 {
            state.move_tile(Slot::rack(i), Slot::board(i)).unwrap();
        }
        state.clear_board();

        assert_eq!(state.refill_rack(&mut bag, &mut next_id), 3);
        let after: Vec<TileId> = state.rack()[3..].iter().flatten().map(|t| t.id).collect();
        assert_eq!(kept, after);
        assert_eq!(state.rack()[0].as_ref().unwrap().id, 8);
    }

    #[test]
    fn test_refill_with_short_bag() {
        let mut bag = TileBag::new(Some(2));
        while bag.len() > 3 {
            bag.draw();
        }
        let mut state = RackBoardState::new();
        let mut next_id = 1;

        assert_eq!(state.refill_rack(&mut bag, &mut next_id), 3);
        assert_eq!(state.rack().iter().flatten().count(), 3);
        assert!(state.rack()[3..].iter().all(Option::is_none));
        assert_eq!(state.refill_rack(&mut bag, &mut next_id), 0);
    }

    #[test]
    fn test_moves_conserve_tiles() {
        let (mut state, bag, _) = dealt(11);
        let moves = [
            (Slot::rack(0), Slot::board(4)),
            (Slot::rack(1), Slot::board(5)),
            (Slot::board(4), Slot::board(9)),
            (Slot::rack(2), Slot::board(9)),
            (Slot::board(5), Slot::rack(0)),
            (Slot::rack(3), Slot::rack(3)),
            (Slot::board(12), Slot::rack(1)),
        ];
        for (from, to) in moves {
            let _ = state.move_tile(from, to);
        }

        let ids: HashSet<TileId> = state.tiles().map(|t| t.id).collect();
        assert_eq!(ids.len(), 7);

        let mut letters: Vec<char> = state.tiles().map(|t| t.letter).collect();
        letters.extend_from_slice(bag.letters());
        letters.sort_unstable();
        let mut expected = full_set();
        expected.sort_unstable();
        assert_eq!(letters, expected);
    }
}
