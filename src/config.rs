use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::engine::{AnagramPositionEngine, ClueEngine, LengthDiffEngine, SubstitutionEngine};
use crate::error::ClueError;
use crate::shuffle::SeededShuffler;

/// Which matching rule the engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Substitution,
    Anagram,
    LengthDiff,
}

impl Variant {
    pub const fn name(&self) -> &'static str {
        match self {
            Variant::Substitution => "substitution",
            Variant::Anagram => "anagram",
            Variant::LengthDiff => "length_diff",
        }
    }
}

impl FromStr for Variant {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "substitution" => Ok(Variant::Substitution),
            "anagram" => Ok(Variant::Anagram),
            "length_diff" => Ok(Variant::LengthDiff),
            other => Err(ClueError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    pub variant: Variant,
    /// Letter cells that need words before real clues are shown.
    pub min_words: usize,
    /// Shuffle seed; random when absent.
    pub seed: Option<u64>,
}

pub fn build_engine<I, S>(config: &EngineConfig, words: I) -> Box<dyn ClueEngine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_engine_from_corpus(config, Corpus::new(words))
}

pub fn build_engine_from_corpus(config: &EngineConfig, corpus: Corpus) -> Box<dyn ClueEngine> {
    let shuffler = Box::new(SeededShuffler::new(config.seed));
    debug!(
        target: "config",
        "Building {} engine over {} words (min_words {})",
        config.variant.name(),
        corpus.len(),
        config.min_words
    );
    match config.variant {
        Variant::Substitution => Box::new(SubstitutionEngine::from_corpus(
            corpus,
            config.min_words,
            shuffler,
        )),
        Variant::Anagram => Box::new(AnagramPositionEngine::from_corpus(
            corpus,
            config.min_words,
            shuffler,
        )),
        Variant::LengthDiff => Box::new(LengthDiffEngine::from_corpus(
            corpus,
            config.min_words,
            shuffler,
        )),
    }
}
