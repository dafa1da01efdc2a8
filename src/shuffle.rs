use std::hash::{DefaultHasher, Hash, Hasher};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Permutation used to scramble clue letters.
///
/// `salt` changes with the word and the retry attempt, so a stateless
/// implementation can still produce a different order on each retry.
pub trait Shuffler {
    fn shuffle(&self, letters: &mut [char], salt: u64);
}

impl<F> Shuffler for F
where
    F: Fn(&mut [char]),
{
    fn shuffle(&self, letters: &mut [char], _salt: u64) {
        self(letters)
    }
}

/// Random permutations that repeat for the same seed, word and attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededShuffler {
    seed: u64,
}

impl SeededShuffler {
    /// Pick a random seed when none is given.
    pub fn new(seed: Option<u64>) -> Self {
        SeededShuffler {
            seed: seed.unwrap_or_else(rand::random),
        }
    }
}

impl Default for SeededShuffler {
    fn default() -> Self {
        SeededShuffler::new(None)
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&self, letters: &mut [char], salt: u64) {
        let mut rng = StdRng::seed_from_u64(self.seed ^ salt);
        letters.shuffle(&mut rng);
    }
}

pub fn salt(word: &str, attempt: usize) -> u64 {
    let mut hasher = DefaultHasher::new();
    word.hash(&mut hasher);
    attempt.hash(&mut hasher);
    hasher.finish()
}
