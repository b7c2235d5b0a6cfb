use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// A single lexicon entry.
pub type Word = String;

/// The set of permissible words for a query.
pub type Lexicon = HashSet<Word>;

/// One transformation sequence, start word first.
pub type Ladder = Vec<Word>;

/// Every shortest ladder for a query, sorted lexicographically.
pub type LadderSet = Vec<Ladder>;

/// BFS hop distance from the start word, keyed by words borrowed from the graph.
pub type DepthMap<'g> = HashMap<&'g str, usize>;

/// Length of a word in characters (Unicode scalar values, not bytes).
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// Result of a ladder search, shaped for structured output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub from: String,
    pub to: String,
    /// Number of single-character steps in each ladder (None when no ladder exists)
    pub steps: Option<usize>,
    /// Number of ladders found before any output limit was applied
    pub count: usize,
    pub ladders: LadderSet,
}

impl SearchResult {
    pub fn new(from: &str, to: &str, ladders: LadderSet) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            steps: ladders.first().map(|ladder| ladder.len() - 1),
            count: ladders.len(),
            ladders,
        }
    }

    /// Whether at least one ladder was found
    pub fn found(&self) -> bool {
        self.count > 0
    }

    /// Keep only the first `limit` ladders; `count` still reports the total.
    pub fn truncate(&mut self, limit: usize) {
        self.ladders.truncate(limit);
    }

    /// Whether `truncate` dropped ladders
    pub fn truncated(&self) -> bool {
        self.ladders.len() < self.count
    }
}
