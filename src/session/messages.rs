use serde::{Deserialize, Serialize};

use crate::models::{GameSnapshot, Slot};

/// Messages sent from the front end to the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    MoveTile { from: Slot, to: Slot },
    ScoreWord,
    CommitWord,
    Restart,
}

/// Messages sent from the game to the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    GameState(GameSnapshot),
    Error { message: String },
}
