//! Game session
//!
//! The session state machine, its error types and the console loop that
//! drives it.

pub mod console;
mod errors;
mod game;

pub use errors::{GuessError, ListRole, StartError};
pub use game::{GameSession, SessionState};
