//! One-line Scrabble: a rack of seven tiles, a fifteen-square board with
//! letter and word bonuses, and a running score.
//!
//! [`GameController`] owns a whole game. Front ends feed it tile moves and
//! button presses and redraw from the [`GameSnapshot`]s it publishes to its
//! observers. [`session::run_session`] is a ready-made JSON-lines front end.

pub mod config;
pub mod game;
pub mod models;
pub mod session;
pub mod utils;

pub use game::{GameController, GameError, GameObserver, ScoreResult};
pub use models::{GameSnapshot, Slot, SlotKind, Tile};
