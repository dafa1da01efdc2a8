use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    /// Labels are a single letter, or empty for the subtraction cell.
    #[error("invalid label {0:?}: expected a single letter or an empty label")]
    InvalidLabel(String),

    #[error("No {letter} in {word}.")]
    MissingLetter { letter: char, word: String },

    #[error("unknown engine variant {0:?}")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, ClueError>;
