use std::collections::BTreeMap;
use std::fmt;

use log::trace;

use crate::error::{ClueError, Result};
use crate::letters::{lower_char, lower_word, strip_whitespace, upper_char};

/// Identifier of one puzzle cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// The extra cell whose word is matched by removing a letter.
    Subtraction,
    /// Always stored lower-case.
    Letter(char),
}

impl Label {
    pub fn parse(raw: &str) -> Result<Label> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Label::Subtraction),
            (Some(c), None) => Ok(Label::Letter(lower_char(c))),
            _ => Err(ClueError::InvalidLabel(raw.to_string())),
        }
    }

    pub fn letter(&self) -> Option<char> {
        match *self {
            Label::Subtraction => None,
            Label::Letter(c) => Some(c),
        }
    }

    /// Uppercase form used for fallback clues and "word needed" messages.
    pub fn upper(&self) -> String {
        match *self {
            Label::Subtraction => String::new(),
            Label::Letter(c) => c.to_uppercase().collect(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Subtraction => Ok(()),
            Label::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// A target word bound to a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Whitespace removed, case as typed.
    pub typed: String,
    /// Lower-case form used for matching.
    pub word: String,
    /// Char position of the clue letter, `None` when the letter is missing.
    pub position: Option<usize>,
}

impl Assignment {
    pub fn new(label: Label, raw: &str) -> Self {
        let typed = strip_whitespace(raw);
        let word = lower_word(&typed);
        let position = label.letter().and_then(|letter| {
            let upper = upper_char(letter);
            typed
                .chars()
                .position(|c| c == upper)
                .or_else(|| typed.chars().position(|c| c == letter))
        });
        Assignment {
            typed,
            word,
            position,
        }
    }

    pub fn has_clue_letter(&self) -> bool {
        self.position.is_some()
    }
}

/// Current label → target word bindings.
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    entries: BTreeMap<Label, Assignment>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, label: Label, raw: &str) -> &Assignment {
        let assignment = Assignment::new(label, raw);
        trace!(
            target: "assignments",
            "Label {:?} -> {:?} (clue position {:?})",
            label,
            assignment.word,
            assignment.position
        );
        self.entries.insert(label, assignment);
        &self.entries[&label]
    }

    /// Stored lower-case word, or "" when the label is unset.
    pub fn get(&self, label: Label) -> &str {
        self.entries
            .get(&label)
            .map(|a| a.word.as_str())
            .unwrap_or("")
    }

    pub fn assignment(&self, label: Label) -> Option<&Assignment> {
        self.entries.get(&label)
    }

    /// Letter labels with their assignments, in label order.
    pub fn letters(&self) -> impl Iterator<Item = (Label, &Assignment)> {
        self.entries
            .iter()
            .filter(|(label, _)| **label != Label::Subtraction)
            .map(|(label, assignment)| (*label, assignment))
    }

    pub fn letter_count(&self) -> usize {
        self.letters().count()
    }

    /// True once enough letter cells have words that all contain their letter.
    pub fn complete(&self, min_words: usize) -> bool {
        self.letter_count() >= min_words && self.letters().all(|(_, a)| a.has_clue_letter())
    }
}
