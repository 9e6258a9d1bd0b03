//! Feedback rendering
//!
//! The session composes its responses through a small rendering seam so the
//! ANSI terminal styling can be swapped for a plain-text one in tests or on
//! consoles without escape support.

use colored::Colorize;

/// Semantic highlight classes for rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Guess letter in the secret at this exact position.
    Correct,
    /// Guess letter in the secret, somewhere else.
    Misplaced,
    /// Guess letter absent from the secret.
    Absent,
    /// Summary of letters eliminated so far.
    Eliminated,
    /// Unstyled text.
    Plain,
}

/// Renders text in one of the five highlight classes.
pub trait Palette {
    /// Wrap `text` in the rendering for `highlight`.
    fn apply(&self, text: &str, highlight: Highlight) -> String;
}

/// ANSI rendering via background colors.
///
/// Green for a correct position, yellow for a misplaced letter, white for an
/// absent one and cyan for the eliminated-letter summary. Styling degrades
/// to plain text automatically when output is not a terminal or `NO_COLOR`
/// is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Palette for Ansi {
    fn apply(&self, text: &str, highlight: Highlight) -> String {
        match highlight {
            Highlight::Correct => text.on_bright_green().to_string(),
            Highlight::Misplaced => text.on_bright_yellow().to_string(),
            Highlight::Absent => text.on_white().to_string(),
            Highlight::Eliminated => text.on_bright_cyan().to_string(),
            Highlight::Plain => text.to_string(),
        }
    }
}

/// Plain-text rendering with bracket markers.
///
/// `[A]` for correct, `(A)` for misplaced, `~A~` for absent and `<ABC>` for
/// the eliminated-letter summary. Used by tests and suitable for consoles
/// without escape support.
#[derive(Debug, Clone, Copy, Default)]
pub struct Markup;

impl Palette for Markup {
    fn apply(&self, text: &str, highlight: Highlight) -> String {
        match highlight {
            Highlight::Correct => format!("[{text}]"),
            Highlight::Misplaced => format!("({text})"),
            Highlight::Absent => format!("~{text}~"),
            Highlight::Eliminated => format!("<{text}>"),
            Highlight::Plain => text.to_string(),
        }
    }
}
