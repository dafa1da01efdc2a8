use std::collections::BTreeMap;

use log::trace;

use crate::assignments::{Assignment, Assignments, Label};
use crate::clue::{position_clue, scramble_without};
use crate::corpus::Corpus;
use crate::error::{ClueError, Result};
use crate::letters::{highlight_at, highlight_first, remove_at, upper_letter, LetterCounts};
use crate::shuffle::{SeededShuffler, Shuffler};

/// Appended to the highlighted target when the corpus does not know it.
pub const UNKNOWN_WORD_MARKER: &str = " (unknown word)";

/// Everything an engine owns besides its matching rule.
pub struct EngineState {
    pub corpus: Corpus,
    pub assignments: Assignments,
    pub min_words: usize,
    pub shuffler: Box<dyn Shuffler>,
}

impl EngineState {
    pub fn new(corpus: Corpus, min_words: usize, shuffler: Box<dyn Shuffler>) -> Self {
        EngineState {
            corpus,
            assignments: Assignments::new(),
            min_words,
            shuffler,
        }
    }

    /// Like `new`, with grid cells `a`, `b`, ... up to `min_words` present but
    /// still waiting for a word, so every cell gets a clue.
    pub fn with_grid(corpus: Corpus, min_words: usize, shuffler: Box<dyn Shuffler>) -> Self {
        let mut state = EngineState::new(corpus, min_words, shuffler);
        for letter in ('a'..='z').take(min_words) {
            state.assignments.set(Label::Letter(letter), "");
        }
        state
    }
}

/// `new`, `with_shuffler` and `from_corpus` for an engine holding `state`.
macro_rules! engine_constructors {
    ($engine:ident, $make_state:path) => {
        impl $engine {
            pub fn new<I, S>(words: I, min_words: usize) -> Self
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                Self::with_shuffler(words, min_words, SeededShuffler::default())
            }

            pub fn with_shuffler<I, S>(
                words: I,
                min_words: usize,
                shuffler: impl Shuffler + 'static,
            ) -> Self
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                Self::from_corpus(Corpus::new(words), min_words, Box::new(shuffler))
            }

            pub fn from_corpus(
                corpus: Corpus,
                min_words: usize,
                shuffler: Box<dyn Shuffler>,
            ) -> Self {
                $engine {
                    state: $make_state(corpus, min_words, shuffler),
                }
            }
        }
    };
}

macro_rules! engine_state {
    () => {
        fn state(&self) -> &EngineState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut EngineState {
            &mut self.state
        }
    };
}

pub fn word_needed(label: Label) -> String {
    match label {
        Label::Subtraction => "Subtraction word needed.".to_string(),
        Label::Letter(_) => format!("{} word needed.", label.upper()),
    }
}

/// Highlighted target, then the matches after a dash.
fn join_display(target: String, matches: &[String]) -> String {
    if matches.is_empty() {
        target
    } else {
        format!("{target} - {}", matches.join(", "))
    }
}

/// Clue generation shared by every matching rule.
///
/// Queries never fail: unknown or invalid labels behave like unassigned ones.
pub trait ClueEngine {
    fn state(&self) -> &EngineState;

    fn state_mut(&mut self) -> &mut EngineState;

    /// Display for a letter label whose word contains the letter at `position`.
    fn letter_display(&self, letter: char, assignment: &Assignment, position: usize) -> String;

    /// Clue for a letter label, only called once the puzzle is complete.
    fn letter_clue(&self, letter: char, assignment: &Assignment, position: usize) -> String;

    fn subtraction_display(&self, assignment: &Assignment) -> String {
        assignment.word.clone()
    }

    fn supports_subtraction(&self) -> bool {
        false
    }

    fn set(&mut self, label: &str, word: &str) -> Result<()> {
        let parsed = Label::parse(label)?;
        if parsed == Label::Subtraction && !self.supports_subtraction() {
            return Err(ClueError::InvalidLabel(label.to_string()));
        }
        self.state_mut().assignments.set(parsed, word);
        Ok(())
    }

    fn get(&self, label: &str) -> &str {
        match Label::parse(label) {
            Ok(parsed) => self.state().assignments.get(parsed),
            Err(_) => "",
        }
    }

    fn make_display(&self, label: &str) -> String {
        let Ok(parsed) = Label::parse(label) else {
            return format!("{} word needed.", label.to_uppercase());
        };
        let assignment = self
            .state()
            .assignments
            .assignment(parsed)
            .filter(|a| !a.word.is_empty());
        match (parsed, assignment) {
            (Label::Subtraction, Some(a)) => self.subtraction_display(a),
            (Label::Letter(letter), Some(a)) => match a.position {
                Some(position) => self.letter_display(letter, a, position),
                None => word_needed(parsed),
            },
            (_, None) => word_needed(parsed),
        }
    }

    fn make_clue(&self, label: &str) -> String {
        let Ok(Label::Letter(letter)) = Label::parse(label) else {
            return label.to_uppercase();
        };
        let fallback = upper_letter(letter);
        let state = self.state();
        if !state.assignments.complete(state.min_words) {
            return fallback;
        }
        match state.assignments.assignment(Label::Letter(letter)) {
            Some(a) => match a.position {
                Some(position) => self.letter_clue(letter, a, position),
                None => fallback,
            },
            None => fallback,
        }
    }

    /// Clue for every letter cell, keyed by lower-case letter.
    fn make_clues(&self) -> BTreeMap<char, String> {
        let clues: BTreeMap<char, String> = self
            .state()
            .assignments
            .letters()
            .filter_map(|(label, _)| label.letter())
            .map(|letter| (letter, self.make_clue(&letter.to_string())))
            .collect();
        trace!(target: "engine", "Clues: {:?}", clues);
        clues
    }
}

/// Matches words that swap the clue letter for one other letter, in any order.
///
/// Unknown target words still get matches, with a marker on the target.
pub struct SubstitutionEngine {
    state: EngineState,
}

engine_constructors!(SubstitutionEngine, EngineState::new);

impl SubstitutionEngine {
    /// Corpus words one substitution away from `word` at `position`, highlighted.
    pub fn substitutions(&self, word: &str, position: usize) -> Vec<String> {
        let Some(clue_letter) = word.chars().nth(position) else {
            return Vec::new();
        };
        let mut base = LetterCounts::from_word(word);
        base.remove_one(clue_letter);
        self.state
            .corpus
            .entries()
            .filter(|(candidate, _)| *candidate != word)
            .filter_map(|(candidate, counts)| {
                let extra = counts.single_surplus(&base)?;
                // same letter back means an exact anagram, not a substitution
                (extra != clue_letter).then(|| highlight_first(candidate, extra))
            })
            .collect()
    }
}

impl ClueEngine for SubstitutionEngine {
    engine_state!();

    fn letter_display(&self, _letter: char, assignment: &Assignment, position: usize) -> String {
        let mut target = highlight_at(&assignment.word, position);
        if !self.state.corpus.contains(&assignment.word) {
            target.push_str(UNKNOWN_WORD_MARKER);
        }
        join_display(target, &self.substitutions(&assignment.word, position))
    }

    fn letter_clue(&self, letter: char, assignment: &Assignment, _position: usize) -> String {
        scramble_without(&assignment.word, letter, self.state.shuffler.as_ref())
            .unwrap_or_else(|_| upper_letter(letter))
    }
}

/// Matches exact anagrams only; the clue letter is a position, not a value.
pub struct AnagramPositionEngine {
    state: EngineState,
}

engine_constructors!(AnagramPositionEngine, EngineState::new);

impl ClueEngine for AnagramPositionEngine {
    engine_state!();

    fn letter_display(&self, _letter: char, assignment: &Assignment, position: usize) -> String {
        let word = assignment.word.as_str();
        let mut target = highlight_at(word, position);
        if !self.state.corpus.contains(word) {
            target.push_str(UNKNOWN_WORD_MARKER);
        }
        let matches: Vec<String> = self
            .state
            .corpus
            .anagrams(word)
            .filter(|candidate| *candidate != word)
            .map(|candidate| highlight_at(candidate, position))
            .collect();
        join_display(target, &matches)
    }

    fn letter_clue(&self, _letter: char, assignment: &Assignment, position: usize) -> String {
        position_clue(&assignment.word, position, self.state.shuffler.as_ref())
    }
}

/// Matches words one letter shorter, or one longer for the subtraction cell.
///
/// Clues are the whole word: the solver strips the letter themselves.
pub struct LengthDiffEngine {
    state: EngineState,
}

engine_constructors!(LengthDiffEngine, EngineState::with_grid);

impl LengthDiffEngine {
    /// Shorter words that `word` contains plus one letter, split by whether
    /// that letter is `letter`.
    pub fn removals(&self, word: &str, letter: char) -> (Vec<String>, Vec<String>) {
        let counts = LetterCounts::from_word(word);
        let length = word.chars().count();
        let mut goal = Vec::new();
        let mut other = Vec::new();
        if length == 0 {
            return (goal, other);
        }
        for (candidate, candidate_counts) in self.state.corpus.words_of_length(length - 1) {
            if let Some(extra) = counts.single_surplus(candidate_counts) {
                let rendered = format!("{candidate}+{}", upper_letter(extra));
                if extra == letter {
                    goal.push(rendered);
                } else {
                    other.push(rendered);
                }
            }
        }
        (goal, other)
    }

    /// Longer words that are `word` plus one letter.
    pub fn additions(&self, word: &str) -> Vec<String> {
        let counts = LetterCounts::from_word(word);
        self.state
            .corpus
            .words_of_length(word.chars().count() + 1)
            .filter_map(|(candidate, candidate_counts)| {
                let extra = candidate_counts.single_surplus(&counts)?;
                Some(format!("{candidate}-{}", upper_letter(extra)))
            })
            .collect()
    }
}

impl ClueEngine for LengthDiffEngine {
    engine_state!();

    fn supports_subtraction(&self) -> bool {
        true
    }

    fn letter_display(&self, letter: char, assignment: &Assignment, position: usize) -> String {
        let (goal, other) = self.removals(&assignment.word, letter);
        let mut display = if goal.is_empty() {
            format!(
                "{}?{}",
                remove_at(&assignment.word, position),
                upper_letter(letter)
            )
        } else {
            goal.join(", ")
        };
        if !other.is_empty() {
            display.push_str(" -- ");
            display.push_str(&other.join(", "));
        }
        display
    }

    fn subtraction_display(&self, assignment: &Assignment) -> String {
        self.additions(&assignment.word).join(", ")
    }

    fn letter_clue(&self, _letter: char, assignment: &Assignment, _position: usize) -> String {
        assignment.word.to_uppercase()
    }
}
