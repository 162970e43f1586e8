use crate::{
    config::GameConfig,
    models::{BonusLayout, GameSnapshot, Slot, BOARD_BONUS},
};

use super::{
    error::GameError,
    observer::GameObserver,
    scorer::{ScoreResult, Scorer},
    state::GameState,
};

/// Drives one game: tile moves, word commits and restarts.
///
/// Every handled event, accepted or rejected, ends with observers receiving
/// a fresh snapshot so the presentation can redraw (or snap a tile back).
pub struct GameController {
    state: GameState,
    bonuses: BonusLayout,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameController {
    /// Start a game with a freshly shuffled bag and a full rack
    pub fn new(seed: Option<u64>) -> Self {
        let mut state = GameState::new(seed);
        state.refill_rack();
        Self {
            state,
            bonuses: BOARD_BONUS,
            observers: Vec::new(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.seed)
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: GameObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Move a tile between any two slots and rescore the board.
    ///
    /// A gap in the resulting board is reported through `ScoreResult::has_gaps`
    /// and the status message, not as an error: the move itself went through.
    pub fn move_tile(&mut self, from: Slot, to: Slot) -> Result<ScoreResult, GameError> {
        let result = match self.state.tiles.move_tile(from, to) {
            Ok(_) => Ok(self.update_preview()),
            Err(e) => {
                tracing::debug!("Move {} -> {} rejected: {}", from, to, e);
                Err(e)
            }
        };
        self.notify();
        result
    }

    /// Re-evaluate the word on the board, surfacing a gap as an error
    pub fn score_word(&mut self) -> Result<u32, GameError> {
        let result = self.update_preview();
        self.notify();
        if result.has_gaps {
            Err(GameError::GapInBoard)
        } else {
            Ok(result.score)
        }
    }

    /// Bank the word on the board, clear it and top the rack back up.
    /// Returns the score added to the total.
    pub fn commit_word(&mut self) -> Result<u32, GameError> {
        let result = self.try_commit();
        self.notify();
        result
    }

    fn try_commit(&mut self) -> Result<u32, GameError> {
        if self.state.tiles.board_is_empty() {
            return Err(GameError::EmptyBoard);
        }

        let result = self.update_preview();
        if result.has_gaps {
            tracing::debug!("Commit rejected: board has gaps");
            return Err(GameError::GapInBoard);
        }

        let word = Scorer::word(self.state.tiles.board());
        self.state.total_score += result.score;
        self.state.tiles.clear_board();
        self.state.word_score = 0;
        self.state.message = None;
        let drawn = self.state.refill_rack();

        tracing::info!(
            "Committed {} for {} points (total {}), drew {} tiles",
            word,
            result.score,
            self.state.total_score,
            drawn
        );
        Ok(result.score)
    }

    /// Throw away the current game and deal a new one
    pub fn restart(&mut self) {
        self.state.total_score = 0;
        self.state.word_score = 0;
        self.state.message = None;
        self.state.tiles.clear_board();
        self.state.tiles.clear_rack();
        self.state.bag.initialize();
        self.state.refill_rack();

        tracing::info!("Game restarted, {} tiles in bag", self.state.bag.len());
        self.notify();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let tiles = &self.state.tiles;
        GameSnapshot {
            rack: tiles.rack().clone(),
            board: tiles.board().clone(),
            bonuses: self.bonuses,
            word: Scorer::word(tiles.board()),
            word_score: self.state.word_score,
            total_score: self.state.total_score,
            tiles_remaining: self.state.bag.len(),
            message: self.state.message.clone(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn total_score(&self) -> u32 {
        self.state.total_score
    }

    pub fn word_score(&self) -> u32 {
        self.state.word_score
    }

    pub fn tiles_remaining(&self) -> usize {
        self.state.bag.len()
    }

    pub fn message(&self) -> Option<&str> {
        self.state.message.as_deref()
    }

    fn update_preview(&mut self) -> ScoreResult {
        let result = Scorer::calculate_score(self.state.tiles.board(), &self.bonuses);
        self.state.word_score = result.score;
        self.state.message = result
            .has_gaps
            .then(|| GameError::GapInBoard.to_string());
        result
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in self.observers.iter_mut() {
            observer.on_update(&snapshot);
        }
    }
}
