//! Words Virtuoso
//!
//! An interactive five-letter word-guessing game for the terminal. A secret
//! word is drawn from a candidate pool; the player guesses and receives
//! per-letter feedback until the word is found or the game is quit.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use words_virtuoso::output::Markup;
//! use words_virtuoso::session::GameSession;
//!
//! let mut session = GameSession::new(StdRng::seed_from_u64(7), Markup);
//! let paths = vec![
//!     "data/words.txt".to_string(),
//!     "data/candidates.txt".to_string(),
//! ];
//!
//! println!("{}", session.start(&paths).unwrap());
//! println!("{}", session.process_input("crane"));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game session state machine
pub mod session;

// Terminal output formatting
pub mod output;
