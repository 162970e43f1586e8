use std::collections::HashMap;
use once_cell::sync::Lazy;

/// Marker used for blank tiles
pub const BLANK: char = '_';

/// Letter, point value, and number of copies in a fresh bag.
/// The supply column sums to 98, blanks included.
pub const LETTER_TABLE: [(char, u8, u8); 27] = [
    ('A', 1, 8),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 8),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
    (BLANK, 0, 2),
];

/// Letter values similar to Scrabble scoring
pub static LETTER_VALUES: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    LETTER_TABLE
        .iter()
        .map(|&(letter, value, _)| (letter, value))
        .collect()
});

/// Get the point value for a letter. Blanks and unknown characters are worth nothing.
pub fn get_letter_value(letter: char) -> u8 {
    let upper = letter.to_ascii_uppercase();
    *LETTER_VALUES.get(&upper).unwrap_or(&0)
}

/// Number of copies of `letter` in a fresh bag
pub fn get_letter_supply(letter: char) -> u8 {
    let upper = letter.to_ascii_uppercase();
    LETTER_TABLE
        .iter()
        .find(|(l, _, _)| *l == upper)
        .map(|&(_, _, supply)| supply)
        .unwrap_or(0)
}

/// Total number of tiles in a fresh bag
pub fn total_tiles() -> usize {
    LETTER_TABLE
        .iter()
        .map(|&(_, _, supply)| supply as usize)
        .sum()
}

/// Every letter repeated per its supply count, in table order (unshuffled)
pub fn full_set() -> Vec<char> {
    let mut letters = Vec::with_capacity(total_tiles());
    for &(letter, _, supply) in LETTER_TABLE.iter() {
        letters.extend(std::iter::repeat(letter).take(supply as usize));
    }
    letters
}
