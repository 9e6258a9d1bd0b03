//! Game session state machine
//!
//! A session owns the word lists, the secret, and all per-game progress.
//! It exposes two operations: `start` loads and validates the list files,
//! draws a secret and arms the session; `process_input` advances the game by
//! one line of player input and returns the message to print.

use log::{debug, trace};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::time::Instant;

use super::errors::{GuessError, ListRole, StartError};
use crate::core::{Feedback, LetterScore, Word};
use crate::output::{Highlight, Palette};
use crate::wordlists::loader;

const BANNER: &str = "Words Virtuoso";

/// Lifecycle state of a session.
///
/// Stopped is both the initial state and the terminal one, reached again
/// after a win or an explicit `exit`. Guesses are only accepted while
/// active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No game in progress; input is not accepted.
    Stopped,
    /// A secret is armed and guesses are being scored.
    Active,
}

/// The word-guessing game session.
///
/// Generic over the random source used to draw the secret and the palette
/// used to render feedback, so tests can fix the draw with a seeded rng and
/// read responses through plain-text markers.
pub struct GameSession<R: Rng, P: Palette> {
    rng: R,
    palette: P,
    state: SessionState,
    words: FxHashSet<Word>,
    candidates: Vec<Word>,
    secret: Option<Word>,
    clues: Vec<String>,
    wrong_letters: BTreeSet<char>,
    tries: u32,
    started_at: Instant,
}

impl<R: Rng, P: Palette> GameSession<R, P> {
    /// Create a stopped session with the given random source and palette.
    pub fn new(rng: R, palette: P) -> Self {
        Self {
            rng,
            palette,
            state: SessionState::Stopped,
            words: FxHashSet::default(),
            candidates: Vec::new(),
            secret: None,
            clues: Vec::new(),
            wrong_letters: BTreeSet::new(),
            tries: 0,
            started_at: Instant::now(),
        }
    }

    /// Load the list files, draw a secret and arm the session.
    ///
    /// `paths` must hold exactly two entries: the word list file and the
    /// candidate list file. Checks run in order and stop at the first
    /// failure: argument count, readability of each file, content validity
    /// of each file, candidate subset, non-empty pool. On success all
    /// per-game progress is reset and the returned banner should be shown
    /// to the player.
    ///
    /// # Errors
    /// Returns the first [`StartError`] encountered; the session is left
    /// unchanged on failure.
    pub fn start(&mut self, paths: &[String]) -> Result<String, StartError> {
        let [words_path, candidates_path] = paths else {
            return Err(StartError::WrongArgumentCount);
        };

        let words_lines = loader::read_lines(words_path).map_err(|err| {
            debug!("cannot read {words_path}: {err}");
            StartError::UnreadableFile {
                role: ListRole::Words,
                path: words_path.clone(),
            }
        })?;
        let candidate_lines = loader::read_lines(candidates_path).map_err(|err| {
            debug!("cannot read {candidates_path}: {err}");
            StartError::UnreadableFile {
                role: ListRole::Candidates,
                path: candidates_path.clone(),
            }
        })?;

        let (word_list, invalid_words) = loader::parse_words(&words_lines);
        if invalid_words > 0 {
            return Err(StartError::InvalidWords {
                count: invalid_words,
                path: words_path.clone(),
            });
        }
        let (candidate_list, invalid_candidates) = loader::parse_words(&candidate_lines);
        if invalid_candidates > 0 {
            return Err(StartError::InvalidWords {
                count: invalid_candidates,
                path: candidates_path.clone(),
            });
        }

        let words: FxHashSet<Word> = word_list.into_iter().collect();
        let candidate_set: FxHashSet<Word> = candidate_list.iter().cloned().collect();
        let foreign = candidate_set.difference(&words).count();
        if foreign > 0 {
            return Err(StartError::ForeignCandidates {
                count: foreign,
                words_path: words_path.clone(),
            });
        }

        // Deduplicate keeping file order, so the draw is uniform over
        // distinct candidates
        let mut seen = FxHashSet::default();
        let pool: Vec<Word> = candidate_list
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        let secret = pool
            .choose(&mut self.rng)
            .cloned()
            .ok_or(StartError::EmptyCandidates)?;
        trace!("secret = {secret}");

        self.words = words;
        self.candidates = pool;
        self.secret = Some(secret);
        self.clues.clear();
        self.wrong_letters.clear();
        self.tries = 0;
        self.started_at = Instant::now();
        self.state = SessionState::Active;
        debug!(
            "session armed: {} words, {} candidates",
            self.words.len(),
            self.candidates.len()
        );

        Ok(String::from(BANNER))
    }

    /// Advance the session by one line of player input.
    ///
    /// The line is lower-cased and never trimmed, so a padded `exit ` counts
    /// as a guess. The literal `exit` stops the session in any state. While
    /// active, every other line consumes a try, is validated as a guess and,
    /// if valid, scored against the secret.
    ///
    /// # Panics
    /// Panics when called on a stopped session with anything other than
    /// `exit`. The driving loop must stop polling once [`Self::is_running`]
    /// returns false.
    pub fn process_input(&mut self, line: &str) -> String {
        let input = line.to_lowercase();
        if input == "exit" {
            debug!("session stopped by exit command");
            self.state = SessionState::Stopped;
            return String::from("The game is over.");
        }

        match self.state {
            SessionState::Active => {
                self.tries += 1;
                let secret = self
                    .secret
                    .clone()
                    .expect("active session always has a secret");
                match self.check_guess(&input) {
                    Ok(guess) => self.score_guess(&guess, &secret),
                    Err(err) => err.to_string(),
                }
            }
            SessionState::Stopped => panic!("process_input called on a stopped session"),
        }
    }

    /// The prompt to print before reading the next line.
    #[must_use]
    pub fn prompt(&self) -> String {
        let text = match self.state {
            SessionState::Active => "Input a 5-letter word:",
            SessionState::Stopped => "",
        };
        format!("\n{text}")
    }

    /// Check whether the session accepts guesses.
    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Active)
    }

    /// Get the current lifecycle state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Validate a lower-cased input line as a guess.
    fn check_guess(&self, input: &str) -> Result<Word, GuessError> {
        let word = Word::parse(input)?;
        if !self.words.contains(&word) {
            return Err(GuessError::NotInWordList);
        }
        Ok(word)
    }

    /// Score a validated guess, record its clue and compose the response.
    fn score_guess(&mut self, guess: &Word, secret: &Word) -> String {
        let feedback = Feedback::score(guess, secret);
        let mut clue = String::new();
        for (&letter, &score) in guess.chars().iter().zip(feedback.scores()) {
            let upper = char::from(letter.to_ascii_uppercase());
            let highlight = match score {
                LetterScore::Correct => Highlight::Correct,
                LetterScore::Misplaced => Highlight::Misplaced,
                LetterScore::Absent => {
                    self.wrong_letters.insert(upper);
                    Highlight::Absent
                }
            };
            clue.push_str(&self.palette.apply(&upper.to_string(), highlight));
        }
        self.clues.push(clue);

        let history = format!("\n{}\n\n", self.clues.join("\n"));
        if guess == secret {
            debug!("solved in {} tries", self.tries);
            self.state = SessionState::Stopped;
            format!("{history}{}", self.win_message())
        } else {
            format!("{history}{}", self.eliminated_summary())
        }
    }

    fn win_message(&self) -> String {
        let elapsed = self.started_at.elapsed().as_secs();
        let verdict = if self.tries == 1 {
            String::from("Amazing luck! The solution was found at once.")
        } else {
            format!(
                "The solution was found after {} tries in {elapsed} seconds.",
                self.tries
            )
        };
        format!("Correct!\n{verdict}")
    }

    fn eliminated_summary(&self) -> String {
        let letters: String = self.wrong_letters.iter().collect();
        self.palette.apply(&letters, Highlight::Eliminated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Markup;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    fn session() -> GameSession<StdRng, Markup> {
        GameSession::new(StdRng::seed_from_u64(7), Markup)
    }

    fn write_lists(dir: &TempDir, words: &str, candidates: &str) -> Vec<String> {
        let words_path = dir.path().join("words.txt");
        let candidates_path = dir.path().join("candidates.txt");
        fs::write(&words_path, words).unwrap();
        fs::write(&candidates_path, candidates).unwrap();
        vec![
            words_path.display().to_string(),
            candidates_path.display().to_string(),
        ]
    }

    fn started_session(words: &str, candidates: &str) -> (GameSession<StdRng, Markup>, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, words, candidates);
        let mut game = session();
        game.start(&paths).unwrap();
        (game, dir)
    }

    const WORDS: &str = "crane\nslate\nprone\nnacre\nlymph\n";

    #[test]
    fn start_rejects_wrong_argument_count() {
        let mut game = session();

        assert_eq!(game.start(&[]), Err(StartError::WrongArgumentCount));
        assert_eq!(
            game.start(&["one.txt".to_string()]),
            Err(StartError::WrongArgumentCount)
        );
        assert_eq!(
            game.start(&["a".to_string(), "b".to_string(), "c".to_string()]),
            Err(StartError::WrongArgumentCount)
        );
        assert!(!game.is_running());
    }

    #[test]
    fn start_reports_missing_words_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, WORDS, "crane\n");
        let missing = vec!["no/such/words.txt".to_string(), paths[1].clone()];

        let err = session().start(&missing).unwrap_err();
        assert_eq!(
            err,
            StartError::UnreadableFile {
                role: ListRole::Words,
                path: "no/such/words.txt".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Error: The words file no/such/words.txt doesn't exist."
        );
    }

    #[test]
    fn start_reports_missing_candidates_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, WORDS, "crane\n");
        let missing = vec![paths[0].clone(), "no/such/candidates.txt".to_string()];

        let err = session().start(&missing).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: The candidate words file no/such/candidates.txt doesn't exist."
        );
    }

    #[test]
    fn availability_is_checked_before_content() {
        // The words file has invalid lines, but the missing candidates file
        // is reported first
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, "not-a-word\n", "crane\n");
        let missing = vec![paths[0].clone(), "no/such/candidates.txt".to_string()];

        let err = session().start(&missing).unwrap_err();
        assert!(matches!(
            err,
            StartError::UnreadableFile {
                role: ListRole::Candidates,
                ..
            }
        ));
    }

    #[test]
    fn start_counts_invalid_words_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, "crane\nabc\nhello\nhello\nslate\n", "crane\n");

        let err = session().start(&paths).unwrap_err();
        assert_eq!(
            err,
            StartError::InvalidWords {
                count: 3,
                path: paths[0].clone(),
            }
        );
        assert_eq!(
            err.to_string(),
            format!("Error: 3 invalid words were found in the {} file.", paths[0])
        );
    }

    #[test]
    fn words_content_is_checked_before_candidates_content() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, "abc\n", "xyz\n");

        let err = session().start(&paths).unwrap_err();
        assert_eq!(
            err,
            StartError::InvalidWords {
                count: 1,
                path: paths[0].clone(),
            }
        );
    }

    #[test]
    fn start_counts_invalid_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, WORDS, "crane\ncrane \n");

        let err = session().start(&paths).unwrap_err();
        assert_eq!(
            err,
            StartError::InvalidWords {
                count: 1,
                path: paths[1].clone(),
            }
        );
    }

    #[test]
    fn start_reports_foreign_candidates() {
        let dir = tempfile::tempdir().unwrap();
        // brick is a valid word but missing from the word list; listing it
        // twice still counts it once
        let paths = write_lists(&dir, WORDS, "crane\nbrick\nbrick\n");

        let err = session().start(&paths).unwrap_err();
        assert_eq!(
            err,
            StartError::ForeignCandidates {
                count: 1,
                words_path: paths[0].clone(),
            }
        );
        assert_eq!(
            err.to_string(),
            format!(
                "Error: 1 candidate words are not included in the {} file.",
                paths[0]
            )
        );
    }

    #[test]
    fn start_fails_on_empty_candidate_pool() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, "", "");

        let err = session().start(&paths).unwrap_err();
        assert_eq!(err, StartError::EmptyCandidates);
        assert_eq!(err.to_string(), "Empty candidates list");
    }

    #[test]
    fn start_arms_the_session() {
        let (game, _dir) = started_session(WORDS, "crane\nslate\n");

        assert!(game.is_running());
        assert_eq!(game.state(), SessionState::Active);

        let secret = game.secret.clone().unwrap();
        assert!(game.candidates.contains(&secret));
        assert!(game.candidates.iter().all(|word| game.words.contains(word)));
    }

    #[test]
    fn start_banner() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, WORDS, "crane\n");

        assert_eq!(session().start(&paths).unwrap(), "Words Virtuoso");
    }

    #[test]
    fn secret_draw_is_seed_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, WORDS, "crane\nslate\nprone\nnacre\n");

        let mut first = session();
        let mut second = session();
        first.start(&paths).unwrap();
        second.start(&paths).unwrap();

        assert_eq!(first.secret, second.secret);
    }

    #[test]
    fn restart_resets_session_state() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, WORDS, "crane\n");
        let mut game = session();

        game.start(&paths).unwrap();
        game.process_input("slate");
        assert_eq!(game.clues.len(), 1);
        assert!(!game.wrong_letters.is_empty());

        game.start(&paths).unwrap();
        assert!(game.clues.is_empty());
        assert!(game.wrong_letters.is_empty());
        assert_eq!(game.tries, 0);
        assert!(game.is_running());
    }

    #[test]
    fn failed_start_leaves_session_stopped() {
        let mut game = session();
        let _ = game.start(&[]);
        assert!(!game.is_running());
        assert_eq!(game.prompt(), "\n");
    }

    #[test]
    fn exit_stops_the_session() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        assert_eq!(game.process_input("exit"), "The game is over.");
        assert_eq!(game.state(), SessionState::Stopped);
        assert!(!game.is_running());
    }

    #[test]
    fn exit_is_case_insensitive() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        assert_eq!(game.process_input("EXIT"), "The game is over.");
        assert!(!game.is_running());
    }

    #[test]
    fn exit_works_before_start() {
        let mut game = session();
        assert_eq!(game.process_input("exit"), "The game is over.");
        assert!(!game.is_running());
    }

    #[test]
    fn padded_exit_counts_as_a_guess() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        let response = game.process_input("exit ");
        assert_eq!(response, "One or more letters of the input aren't valid.");
        assert_eq!(game.tries, 1);
        assert!(game.is_running());
    }

    #[test]
    fn invalid_guesses_report_without_scoring() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        assert_eq!(
            game.process_input("abc"),
            "The input isn't a 5-letter word."
        );
        assert_eq!(
            game.process_input("cra3e"),
            "One or more letters of the input aren't valid."
        );
        assert_eq!(game.process_input("hello"), "The input has duplicate letters.");
        assert_eq!(
            game.process_input("quick"),
            "The input word isn't included in my words list."
        );

        assert!(game.clues.is_empty());
        assert_eq!(game.tries, 4);
        assert!(game.is_running());
    }

    #[test]
    fn first_try_win_message() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        assert_eq!(
            game.process_input("crane"),
            "\n[C][R][A][N][E]\n\nCorrect!\nAmazing luck! The solution was found at once."
        );
        assert!(!game.is_running());
    }

    #[test]
    fn later_win_reports_try_count() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        game.process_input("slate");
        let response = game.process_input("crane");

        assert!(response.contains("Correct!\nThe solution was found after 2 tries in "));
        assert!(response.ends_with(" seconds."));
        assert!(!game.is_running());
    }

    #[test]
    fn invalid_attempts_still_consume_tries() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        game.process_input("abc");
        let response = game.process_input("crane");

        assert!(response.contains("The solution was found after 2 tries in "));
    }

    #[test]
    fn clue_history_accumulates() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        assert_eq!(
            game.process_input("slate"),
            "\n~S~~L~[A]~T~[E]\n\n<LST>"
        );
        assert_eq!(
            game.process_input("prone"),
            "\n~S~~L~[A]~T~[E]\n~P~[R]~O~[N][E]\n\n<LOPST>"
        );
        assert_eq!(game.clues.len(), 2);
    }

    #[test]
    fn history_grows_only_on_scored_guesses() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        game.process_input("slate");
        game.process_input("abc");
        game.process_input("prone");

        assert_eq!(game.clues.len(), 2);
        assert_eq!(game.tries, 3);
    }

    #[test]
    fn input_is_lowercased() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        assert_eq!(
            game.process_input("SLATE"),
            "\n~S~~L~[A]~T~[E]\n\n<LST>"
        );
    }

    #[test]
    fn misplaced_letters_render_distinctly() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        // Every letter of nacre occurs in crane; no letter is eliminated,
        // so the summary renders empty
        assert_eq!(game.process_input("nacre"), "\n(N)(A)(C)(R)[E]\n\n<>");
        assert!(game.wrong_letters.is_empty());
    }

    #[test]
    fn wrong_letters_exclude_secret_letters() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        game.process_input("slate");
        game.process_input("lymph");
        let secret = game.secret.clone().unwrap();

        assert!(!game.wrong_letters.is_empty());
        assert!(
            game.wrong_letters
                .iter()
                .all(|&c| !secret.text().contains(c.to_ascii_lowercase()))
        );
    }

    #[test]
    fn wrong_letters_only_grow() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        game.process_input("slate");
        let after_first: Vec<char> = game.wrong_letters.iter().copied().collect();
        game.process_input("lymph");

        assert!(after_first.iter().all(|c| game.wrong_letters.contains(c)));
        assert!(game.wrong_letters.len() >= after_first.len());
    }

    #[test]
    fn prompt_reflects_state() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_lists(&dir, WORDS, "crane\n");
        let mut game = session();

        assert_eq!(game.prompt(), "\n");
        game.start(&paths).unwrap();
        assert_eq!(game.prompt(), "\nInput a 5-letter word:");
        game.process_input("exit");
        assert_eq!(game.prompt(), "\n");
    }

    #[test]
    #[should_panic(expected = "stopped session")]
    fn stopped_session_rejects_guesses() {
        let (mut game, _dir) = started_session(WORDS, "crane\n");

        game.process_input("exit");
        game.process_input("slate");
    }
}
