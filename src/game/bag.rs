use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::utils::letters::full_set;

/// The pool of undrawn letters. Draws come off the end, like a stack.
pub struct TileBag {
    letters: Vec<char>,
    rng: StdRng,
}

impl TileBag {
    /// Create a shuffled bag. A seed makes every shuffle reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut bag = Self {
            letters: Vec::new(),
            rng,
        };
        bag.initialize();
        bag
    }

    /// Refill with the full letter set and shuffle, discarding whatever was left
    pub fn initialize(&mut self) {
        self.letters = full_set();
        self.letters.shuffle(&mut self.rng);
        tracing::debug!("Bag initialized with {} tiles", self.letters.len());
    }

    /// Take the next letter, or `None` once the bag is exhausted
    pub fn draw(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Remaining letters in draw order (last is drawn first)
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}
