//! Validated game word representation
//!
//! A playable word is exactly five ASCII letters with no letter repeated.
//! Words are stored lower-cased, so equality and hashing are case-insensitive.

use std::fmt;
use std::str::FromStr;

/// A five-letter word with all letters distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; 5],
}

/// Reasons a line of text is not a playable word.
///
/// Variants are listed in check-priority order: length first, then the
/// character set, then letter repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    /// Not exactly five characters long.
    WrongLength,
    /// Contains a character outside ASCII `a`-`z`.
    InvalidCharacters,
    /// The same letter appears more than once.
    RepeatedLetters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength => write!(f, "The input isn't a 5-letter word."),
            Self::InvalidCharacters => {
                write!(f, "One or more letters of the input aren't valid.")
            }
            Self::RepeatedLetters => write!(f, "The input has duplicate letters."),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Validate and normalize `text` into a playable word.
    ///
    /// The text is lower-cased first, so `"CRANE"` and `"crane"` produce the
    /// same word. Nothing is trimmed: a padded line fails validation.
    ///
    /// # Errors
    /// Returns the highest-priority `WordError` the text violates: length,
    /// then character set, then repetition.
    ///
    /// # Examples
    /// ```
    /// use words_virtuoso::core::Word;
    ///
    /// let word = Word::parse("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::parse("cranes").is_err());
    /// assert!(Word::parse("hello").is_err()); // repeated 'l'
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by the length
    /// and character-set checks above it.
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let text = text.to_lowercase();

        if text.chars().count() != 5 {
            return Err(WordError::WrongLength);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Five ASCII letters means exactly five bytes
        let chars: [u8; 5] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        let mut seen = 0u32;
        for &letter in &chars {
            let bit = 1 << (letter - b'a');
            if seen & bit != 0 {
                return Err(WordError::RepeatedLetters);
            }
            seen |= bit;
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
