//! Core domain types
//!
//! This module contains the fundamental game types with zero external dependencies.
//! All types here are pure, testable, and have clear properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use word::{Word, WordError};
