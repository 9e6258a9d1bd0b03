//! Blocking console loop
//!
//! Drives a session against any line-oriented reader and writer. The binary
//! connects it to stdin and stdout; tests feed it in-memory buffers.

use log::debug;
use rand::Rng;
use std::io::{BufRead, Write};

use super::GameSession;
use crate::output::Palette;

/// Print the start outcome, then prompt, read and respond while the session
/// runs.
///
/// A failed start prints its error message and the loop never begins. The
/// loop ends when the session stops, after a win or an `exit` command, or
/// when the reader runs out of lines.
///
/// # Errors
/// Returns any I/O error raised while reading input or writing output.
pub fn run<R, P, In, Out>(
    session: &mut GameSession<R, P>,
    paths: &[String],
    input: In,
    mut out: Out,
) -> std::io::Result<()>
where
    R: Rng,
    P: Palette,
    In: BufRead,
    Out: Write,
{
    match session.start(paths) {
        Ok(banner) => writeln!(out, "{banner}")?,
        Err(err) => writeln!(out, "{err}")?,
    }

    let mut lines = input.lines();
    while session.is_running() {
        writeln!(out, "{}", session.prompt())?;
        let Some(line) = lines.next() else {
            debug!("input exhausted, leaving the loop");
            break;
        };
        writeln!(out, "{}", session.process_input(&line?))?;
    }
    out.flush()
}
