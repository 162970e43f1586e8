pub mod game;
pub mod slot;
pub mod snapshot;

pub use game::{
    Board, Bonus, BonusLayout, Rack, Tile, TileId, BOARD_BONUS, BOARD_SIZE, RACK_SIZE,
};
pub use slot::{Slot, SlotKind};
pub use snapshot::GameSnapshot;
