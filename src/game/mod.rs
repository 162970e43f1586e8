// Game engine modules

pub mod bag;
pub mod controller;
pub mod error;
pub mod observer;
pub mod rack_board;
pub mod scorer;
pub mod state;

pub use bag::TileBag;
pub use controller::GameController;
pub use error::GameError;
pub use observer::GameObserver;
pub use rack_board::RackBoardState;
pub use scorer::{ScoreResult, Scorer};
pub use state::GameState;
