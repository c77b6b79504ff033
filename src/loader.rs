//! Building a [`Trie`] from a dictionary.
//!
//! A dictionary is a plain text list with one word per line. Every line is
//! trimmed and uppercased before it is inserted, blank lines are ignored.
//! Lines which are not valid UTF-8 or contain characters outside of the
//! alphabet either abort the load (the default) or are skipped with a
//! warning, see [`LoadOptions`]. A leading byte order mark is ignored.
//!
//! ```
//! use autocomplete::loader::{load_words, LoadOptions};
//! use autocomplete::trie::Trie;
//!
//! let mut trie = Trie::new();
//! let dictionary = "  apple\nApp\n\napply \nbanana\n";
//! let stats = load_words(&mut trie, dictionary.as_bytes(), &LoadOptions::default()).unwrap();
//! assert_eq!(stats.inserted, 4);
//! assert!(trie.contains_word("APPLE").unwrap());
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::alphabet;
use crate::errors::{AutocompleteError, Result};
use crate::trie::Trie;

/// Controls how a dictionary is loaded.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    /// Skip (and log) lines which are not valid words instead of failing.
    pub skip_invalid: bool,
}

/// What happened while loading a dictionary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub lines: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub blank: usize,
    pub invalid: usize,
}

/// Insert every word read from `reader` into `trie`.
///
/// I/O errors are always returned. A line which is not valid UTF-8 or not a
/// valid word is returned as [`AutocompleteError::InvalidEntry`] with its
/// 1-based line number unless `options.skip_invalid` is set.
///
/// Words are inserted as they are read, so on error `trie` keeps the words
/// from the lines before the failing one. Load into a fresh [`Trie`] (as
/// [`load_dictionary`] does) when that matters.
pub fn load_words<R: BufRead>(
    trie: &mut Trie,
    reader: R,
    options: &LoadOptions,
) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line_no = idx + 1;
        stats.lines += 1;

        let parsed = String::from_utf8(bytes)
            .map_err(AutocompleteError::from)
            .and_then(|line| {
                // A byte order mark may start the first line
                let line = match idx {
                    0 => line.strip_prefix('\u{feff}').unwrap_or(line.as_str()),
                    _ => line.as_str(),
                };
                let word = alphabet::normalize(line);
                alphabet::parse(&word)
            });

        match parsed {
            Ok(symbols) if symbols.is_empty() => stats.blank += 1,
            Ok(symbols) => {
                if trie.insert(symbols)? {
                    stats.inserted += 1;
                } else {
                    stats.duplicates += 1;
                }
            }
            Err(e) if options.skip_invalid => {
                warn!("skipping line {}: {}", line_no, e);
                stats.invalid += 1;
            }
            Err(e) => {
                return Err(AutocompleteError::InvalidEntry {
                    line: line_no,
                    source: Box::new(e),
                })
            }
        }
    }
    debug!("{:?}", stats);
    Ok(stats)
}

/// Open the dictionary at `path` and build a new [`Trie`] from it.
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> Result<(Trie, LoadStats)> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut trie = Trie::new();
    let stats = load_words(&mut trie, BufReader::new(file), options)?;
    info!(
        "loaded {} words from {} ({} duplicates, {} skipped)",
        stats.inserted,
        path.display(),
        stats.duplicates,
        stats.invalid
    );
    Ok((trie, stats))
}
