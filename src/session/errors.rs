//! Session error types
//!
//! Startup and per-guess failures. Each variant renders the exact message
//! shown to the player.

use crate::core::WordError;
use std::fmt;

/// Which of the two list files an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRole {
    /// The full word list, the first argument.
    Words,
    /// The candidate pool, the second argument.
    Candidates,
}

impl fmt::Display for ListRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Words => write!(f, "words"),
            Self::Candidates => write!(f, "candidate words"),
        }
    }
}

/// Why a session failed to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// Not exactly two file paths were supplied.
    WrongArgumentCount,
    /// A list file could not be opened or read.
    UnreadableFile { role: ListRole, path: String },
    /// A list file contains lines that are not playable words.
    InvalidWords { count: usize, path: String },
    /// Candidate words missing from the word list.
    ForeignCandidates { count: usize, words_path: String },
    /// The candidate pool was empty after validation.
    EmptyCandidates,
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArgumentCount => write!(f, "Error: Wrong number of arguments."),
            Self::UnreadableFile { role, path } => {
                write!(f, "Error: The {role} file {path} doesn't exist.")
            }
            Self::InvalidWords { count, path } => {
                write!(f, "Error: {count} invalid words were found in the {path} file.")
            }
            Self::ForeignCandidates { count, words_path } => {
                write!(
                    f,
                    "Error: {count} candidate words are not included in the {words_path} file."
                )
            }
            Self::EmptyCandidates => write!(f, "Empty candidates list"),
        }
    }
}

impl std::error::Error for StartError {}

/// Why a guess was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// The input is not a valid word at all.
    Word(WordError),
    /// A valid word, but not one the game knows.
    NotInWordList,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(err) => err.fmt(f),
            Self::NotInWordList => {
                write!(f, "The input word isn't included in my words list.")
            }
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(err) => Some(err),
            Self::NotInWordList => None,
        }
    }
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        Self::Word(err)
    }
}
