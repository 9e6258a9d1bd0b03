//! Words Virtuoso - CLI
//!
//! Interactive five-letter word-guessing game. Takes a word list file and a
//! candidate list file, draws a secret and plays a guess loop on the console.

use anyhow::Result;
use clap::Parser;
use std::io;
use words_virtuoso::{
    output::Ansi,
    session::{GameSession, console},
};

#[derive(Parser)]
#[command(
    name = "words_virtuoso",
    about = "Interactive five-letter word-guessing game",
    version
)]
struct Cli {
    /// Word list file followed by the candidate list file
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut session = GameSession::new(rand::rng(), Ansi);

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(&mut session, &cli.files, stdin.lock(), stdout.lock())?;

    Ok(())
}
