//! Lexicon loading
//!
//! A lexicon file is any whitespace-separated list of words, normally one
//! word per line. Duplicates collapse; order is not kept.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{LadderError, Result};
use crate::graph::Lexicon;
use crate::trace_time;

/// Load a lexicon from a file on disk.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_lexicon(path: impl AsRef<Path>) -> Result<Lexicon> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LadderError::LexiconOpen {
        path: path.to_path_buf(),
        source,
    })?;

    read_lexicon_from(BufReader::new(file), path)
}

/// Load a lexicon from any buffered reader.
///
/// `origin` only labels errors (e.g. `-` for stdin).
pub fn read_lexicon_from(reader: impl BufRead, origin: impl Into<PathBuf>) -> Result<Lexicon> {
    let start = Instant::now();
    let origin = origin.into();
    let mut lexicon = Lexicon::new();

    for line in reader.lines() {
        let line = line.map_err(|source| LadderError::LexiconRead {
            path: origin.clone(),
            source,
        })?;
        lexicon.extend(line.split_whitespace().map(str::to_string));
    }

    trace_time!(start, "read_lexicon", words = lexicon.len());
    tracing::debug!(words = lexicon.len(), "lexicon loaded");
    Ok(lexicon)
}

/// Build a lexicon from in-memory words.
pub fn lexicon_from_words<I, S>(words: I) -> Lexicon
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words.into_iter().map(Into::into).collect()
}
