use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameConfig {
    /// Fixed seed for the bag shuffle; random when unset
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Input lines longer than this are rejected unparsed
    pub max_message_bytes: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: 4096,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let game = GameConfig {
            seed: lookup("GAME_SEED")
                .map(|seed| seed.trim().parse())
                .transpose()
                .context("GAME_SEED must be a non-negative integer")?,
        };

        let session = SessionConfig {
            max_message_bytes: lookup("SESSION_MAX_MESSAGE_BYTES")
                .unwrap_or_else(|| "4096".to_string())
                .trim()
                .parse()
                .context("SESSION_MAX_MESSAGE_BYTES must be a number")?,
        };

        Ok(Config { game, session })
    }
}
