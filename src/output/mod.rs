//! Terminal output formatting
//!
//! Rendering seam for guess feedback and the eliminated-letter summary.

mod palette;

pub use palette::{Ansi, Highlight, Markup, Palette};
