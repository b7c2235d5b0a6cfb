//! One-character-difference adjacency over a lexicon
//!
//! Edges are found by bucketing every word under each of its wildcard
//! patterns (the word with one position blanked out). Two words share a
//! bucket only if they agree everywhere except that position, so pairing
//! within buckets yields exactly the one-character neighbours without
//! comparing every pair of words.

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use crate::graph::types::{word_len, Lexicon, Word};
use crate::trace_time;

/// Wildcard pattern: the blanked position plus the remaining characters.
///
/// Keeping the position out of band means no character inside a word can
/// be mistaken for the wildcard marker.
type Pattern = (usize, String);

/// Undirected word graph; every lexicon word is a vertex, isolated or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordGraph {
    adjacency: HashMap<Word, BTreeSet<Word>>,
}

impl WordGraph {
    /// Build the graph with wildcard buckets.
    ///
    /// Words of differing lengths never share a bucket, but callers normally
    /// pass a lexicon already narrowed by [`lexicon_filter`].
    pub fn build(lexicon: &Lexicon) -> Self {
        let start = Instant::now();
        let buckets = wildcard_buckets(lexicon);
        let mut graph = Self::with_vertices(lexicon);

        for bucket in buckets.values().filter(|bucket| bucket.len() > 1) {
            for (i, first) in bucket.iter().enumerate() {
                for second in &bucket[i + 1..] {
                    graph.add_edge(first, second);
                }
            }
        }

        trace_time!(
            start,
            "build_adjacency",
            buckets = buckets.len(),
            edges = graph.edge_count()
        );
        graph
    }

    /// Build the graph by testing every pair with [`is_one_char_diff`].
    ///
    /// Quadratic; kept as the reference the bucket construction is checked against.
    pub fn build_pairwise(lexicon: &Lexicon) -> Self {
        let mut graph = Self::with_vertices(lexicon);
        let words: Vec<&Word> = lexicon.iter().collect();

        for (i, first) in words.iter().enumerate() {
            for second in &words[i + 1..] {
                if is_one_char_diff(first, second) {
                    graph.add_edge(first, second);
                }
            }
        }
        graph
    }

    fn with_vertices(lexicon: &Lexicon) -> Self {
        Self {
            adjacency: lexicon
                .iter()
                .map(|word| (word.clone(), BTreeSet::new()))
                .collect(),
        }
    }

    fn add_edge(&mut self, first: &str, second: &str) {
        if first == second {
            return;
        }
        if let Some(neighbors) = self.adjacency.get_mut(first) {
            neighbors.insert(second.to_string());
        }
        if let Some(neighbors) = self.adjacency.get_mut(second) {
            neighbors.insert(first.to_string());
        }
    }

    /// Neighbours of `word`, or `None` if it is not a vertex
    pub fn neighbors(&self, word: &str) -> Option<&BTreeSet<Word>> {
        self.adjacency.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Number of vertices with no neighbours
    pub fn isolated_count(&self) -> usize {
        self.adjacency.values().filter(|n| n.is_empty()).count()
    }
}

/// Group words by every wildcard pattern they match.
fn wildcard_buckets(lexicon: &Lexicon) -> HashMap<Pattern, Vec<&Word>> {
    let mut buckets: HashMap<Pattern, Vec<&Word>> = HashMap::new();

    for word in lexicon {
        let chars: Vec<char> = word.chars().collect();
        for i in 0..chars.len() {
            let rest: String = chars[..i].iter().chain(&chars[i + 1..]).collect();
            buckets.entry((i, rest)).or_default().push(word);
        }
    }
    buckets
}

/// Words of `lexicon` with the same length as `from`.
pub fn lexicon_filter(from: &str, lexicon: &Lexicon) -> Lexicon {
    filter_by_length(word_len(from), lexicon)
}

/// Words of `lexicon` that are exactly `len` characters long.
pub fn filter_by_length(len: usize, lexicon: &Lexicon) -> Lexicon {
    lexicon
        .iter()
        .filter(|word| word_len(word) == len)
        .cloned()
        .collect()
}

/// Whether two words have equal length and differ in exactly one position.
pub fn is_one_char_diff(first: &str, second: &str) -> bool {
    if word_len(first) != word_len(second) {
        return false;
    }

    let mut diff_count = 0;
    for (a, b) in first.chars().zip(second.chars()) {
        if a != b {
            diff_count += 1;
            if diff_count > 1 {
                return false;
            }
        }
    }
    diff_count == 1
}
