//! Per-letter guess feedback
//!
//! Scoring compares a guess to the secret position by position: an exact
//! match scores correct, a letter occurring anywhere else in the secret
//! scores misplaced, everything else scores absent. Playable words never
//! repeat a letter, so no duplicate budgeting is needed.

use super::Word;

/// Score of one guess letter against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterScore {
    /// Right letter in the right position.
    Correct,
    /// Letter occurs in the secret, but not here.
    Misplaced,
    /// Letter does not occur in the secret.
    Absent,
}

/// Feedback for a full five-letter guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    scores: [LetterScore; 5],
}

impl Feedback {
    /// Score `guess` against `secret`.
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut scores = [LetterScore::Absent; 5];
        for (i, &letter) in guess.chars().iter().enumerate() {
            scores[i] = if secret.chars()[i] == letter {
                LetterScore::Correct
            } else if secret.has_letter(letter) {
                LetterScore::Misplaced
            } else {
                LetterScore::Absent
            };
        }
        Self { scores }
    }

    /// Per-position scores in guess letter order.
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; 5] {
        &self.scores
    }

    /// Check whether every position scored [`LetterScore::Correct`].
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.scores
            .iter()
            .all(|score| matches!(score, LetterScore::Correct))
    }
}
