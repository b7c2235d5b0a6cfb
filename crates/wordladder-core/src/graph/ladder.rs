use std::collections::BTreeSet;
use std::time::Instant;

use crate::graph::adjacency::{lexicon_filter, WordGraph};
use crate::graph::bfs::bfs_find_depth;
use crate::graph::dfs::dfs_find_paths;
use crate::graph::types::{DepthMap, LadderSet, Lexicon, Word};
use crate::trace_time;

/// Word graph rooted at a start word.
///
/// Holds the lexicon narrowed to the start word's length and the adjacency
/// over it. Built once; every [`path_search`](Self::path_search) borrows it
/// read-only and keeps its own depth map and path buffer.
#[derive(Debug, Clone)]
pub struct LadderGraph {
    from: Word,
    lexicon: Lexicon,
    graph: WordGraph,
}

impl LadderGraph {
    /// Build the graph for ladders starting at `from`.
    ///
    /// `from` is expected to be in `lexicon`; this is not checked.
    #[tracing::instrument(skip(lexicon), fields(lexicon_size = lexicon.len()))]
    pub fn new(from: &str, lexicon: &Lexicon) -> Self {
        let start = Instant::now();
        let lexicon = lexicon_filter(from, lexicon);
        let graph = WordGraph::build(&lexicon);

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "ladder graph built"
        );
        trace_time!(start, "ladder_graph_new");

        Self {
            from: from.to_string(),
            lexicon,
            graph,
        }
    }

    /// Every shortest ladder from the start word to `to`, sorted.
    ///
    /// Empty when `to` cannot be reached. When `to` is the start word itself
    /// the single one-word ladder is returned, provided the start word is in
    /// the graph.
    #[tracing::instrument(skip(self), fields(from = %self.from))]
    pub fn path_search(&self, to: &str) -> LadderSet {
        let start = Instant::now();

        if to == self.from {
            return if self.graph.contains(to) {
                vec![vec![self.from.clone()]]
            } else {
                LadderSet::new()
            };
        }

        let mut depth = DepthMap::new();
        if !bfs_find_depth(&self.graph, &self.from, to, &mut depth) {
            tracing::debug!(visited = depth.len(), "no ladder");
            return LadderSet::new();
        }
        trace_time!(start, "bfs_find_depth", visited = depth.len());

        let ladders = dfs_find_paths(&self.graph, &self.from, to, &depth);
        tracing::debug!(
            ladders = ladders.len(),
            steps = depth.get(to).copied().unwrap_or_default(),
            "ladders found"
        );
        trace_time!(start, "path_search");
        ladders
    }

    /// The start word
    pub fn from_word(&self) -> &str {
        &self.from
    }

    /// The lexicon narrowed to the start word's length
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// One-character neighbours of `word` within the narrowed lexicon
    pub fn neighbors(&self, word: &str) -> Option<&BTreeSet<Word>> {
        self.graph.neighbors(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.graph.contains(word)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// All shortest ladders from `from` to `to` through `lexicon`.
///
/// Preconditions, not checked: `from` and `to` have the same length and both
/// are in `lexicon`. Use [`validate_query`](crate::validate::validate_query)
/// to enforce them up front. Violations give an unspecified (possibly empty)
/// result, never a panic.
pub fn generate(from: &str, to: &str, lexicon: &Lexicon) -> LadderSet {
    LadderGraph::new(from, lexicon).path_search(to)
}
