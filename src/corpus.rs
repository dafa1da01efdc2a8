use hashbrown::HashMap;
use log::debug;

use crate::letters::{anagram_root, clean_word, LetterCounts};

/// Normalized word list with the lookups every engine shares.
///
/// Words are kept once each, in the order they were first seen, so every
/// listing built from the corpus is stable for a given input.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<String>,
    letter_counts: Vec<LetterCounts>,
    index: HashMap<String, usize>,
    anagram_roots: HashMap<String, Vec<usize>>,
    by_length: HashMap<usize, Vec<usize>>,
}

impl Corpus {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Corpus::default();
        for raw in words {
            let word = clean_word(raw.as_ref());
            if word.is_empty() || corpus.index.contains_key(&word) {
                continue;
            }
            let idx = corpus.words.len();
            corpus
                .anagram_roots
                .entry(anagram_root(&word))
                .or_default()
                .push(idx);
            corpus
                .by_length
                .entry(word.chars().count())
                .or_default()
                .push(idx);
            corpus.letter_counts.push(LetterCounts::from_word(&word));
            corpus.index.insert(word.clone(), idx);
            corpus.words.push(word);
        }
        debug!(
            target: "corpus",
            "Indexed {} words into {} anagram roots and {} lengths",
            corpus.words.len(),
            corpus.anagram_roots.len(),
            corpus.by_length.len()
        );
        corpus
    }

    /// Build from the contents of a word file, one entry per line.
    pub fn from_text(text: &str) -> Self {
        Corpus::new(text.lines())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// `word` must already be normalized.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Every word paired with its letter multiset, first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &LetterCounts)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.letter_counts.iter())
    }

    pub fn letter_counts(&self, word: &str) -> Option<&LetterCounts> {
        self.index.get(word).map(|&idx| &self.letter_counts[idx])
    }

    /// Exact anagrams of `word`, the word itself included when known.
    pub fn anagrams(&self, word: &str) -> impl Iterator<Item = &str> {
        self.anagram_roots
            .get(&anagram_root(word))
            .into_iter()
            .flatten()
            .map(move |&idx| self.words[idx].as_str())
    }

    /// Words with exactly `length` letters, paired with their multisets.
    pub fn words_of_length(
        &self,
        length: usize,
    ) -> impl Iterator<Item = (&str, &LetterCounts)> {
        self.by_length
            .get(&length)
            .into_iter()
            .flatten()
            .map(move |&idx| (self.words[idx].as_str(), &self.letter_counts[idx]))
    }
}
