use crate::models::{Board, Bonus, BonusLayout, Tile};

/// Result of scoring the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    /// Word score, 0 when the board has gaps
    pub score: u32,
    /// Whether the occupied squares fail to form one contiguous run
    pub has_gaps: bool,
}

pub struct Scorer;

impl Scorer {
    /// Calculate the score of the word on the board.
    ///
    /// Scoring rules:
    /// - Each tile scores its letter value (blanks are always 0)
    /// - DL (Double Letter) doubles that tile's value
    /// - DW (Double Word) doubles the whole word, compounding: two DW squares quadruple it
    /// - Letter bonuses apply before word multipliers
    /// - A board with gaps scores 0
    pub fn calculate_score(board: &Board, bonuses: &BonusLayout) -> ScoreResult {
        if Self::has_gaps(board) {
            return ScoreResult {
                score: 0,
                has_gaps: true,
            };
        }

        let mut letter_score_total = 0u32;
        let mut word_multiplier = 1u32;

        for (tile, bonus) in board.iter().zip(bonuses.iter()) {
            let Some(tile) = tile else {
                continue;
            };
            let base_value = u32::from(tile.value);

            let letter_score = match bonus {
                Some(Bonus::DoubleLetter) => base_value * 2,
                Some(Bonus::DoubleWord) => {
                    word_multiplier *= 2;
                    base_value
                }
                None => base_value,
            };

            letter_score_total += letter_score;
        }

        ScoreResult {
            score: letter_score_total * word_multiplier,
            has_gaps: false,
        }
    }

    /// True if an empty square sits between the first and last occupied squares.
    /// Boards with zero or one tile never have gaps.
    pub fn has_gaps(board: &Board) -> bool {
        let first = board.iter().position(Option::is_some);
        let last = board.iter().rposition(Option::is_some);

        match (first, last) {
            (Some(first), Some(last)) => board[first..=last].iter().any(Option::is_none),
            _ => false,
        }
    }

    /// Extract the letters on the board, left to right
    pub fn word(board: &Board) -> String {
        board.iter().flatten().map(|tile: &Tile| tile.letter).collect()
    }
}
