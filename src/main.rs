//! Interactive autocomplete over a dictionary file.
//!
//! Loads the dictionary, then reads one line at a time from standard input
//! and prints the suggestions for the text typed so far. See
//! [`autocomplete::session`] for the commands understood.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use autocomplete::loader::{load_dictionary, LoadOptions};
use autocomplete::session::{Command, Session, Step};
use autocomplete::suggest::format_suggestions;
use autocomplete::{Trie, DEFAULT_LIMIT};

use clap::Parser;
use log::error;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "autocomplete", about = "Suggests dictionary words as you type")]
struct Args {
    /// Dictionary file, one word per line.
    dictionary: PathBuf,

    /// Maximum number of suggestions shown (at least 1).
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    limit: usize,

    /// Skip dictionary lines which are not valid words instead of failing.
    #[arg(long)]
    skip_invalid: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let options = LoadOptions {
        skip_invalid: args.skip_invalid,
    };
    let (trie, _) = load_dictionary(&args.dictionary, &options).map_err(|e| {
        error!("failed to load {}: {}", args.dictionary.display(), e);
        e
    })?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    if let Some(word) = run(&trie, args.limit, stdin, stdout)? {
        println!("{}", word);
    }
    Ok(())
}

/// Drive a session from `input` until it is committed, writing prompts and
/// suggestions to `out`. End of input commits.
fn run<R: BufRead, W: Write>(
    trie: &Trie,
    limit: usize,
    input: R,
    mut out: W,
) -> io::Result<Option<String>> {
    let mut session = Session::new(trie, limit);
    let mut lines = input.lines();

    loop {
        write!(out, ">> {}", session.buffer())?;
        out.flush()?;

        let command = match lines.next() {
            Some(line) => Command::parse(&line?),
            None => Command::Commit,
        };
        match session.apply(command) {
            Ok(Step::Finished(word)) => {
                writeln!(out)?;
                return Ok(Some(word).filter(|w| !w.is_empty()));
            }
            Ok(Step::Continue) => {
                writeln!(out, "\nSuggestions: {}", format_suggestions(session.suggestions()))?;
            }
            Err(e) => {
                writeln!(out, "\nInvalid input: {}", e)?;
            }
        }
    }
}
