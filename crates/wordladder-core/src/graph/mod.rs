//! Word graph construction and ladder search
//!
//! - `adjacency`: one-character-difference graph via wildcard buckets
//! - `bfs`: shortest-distance pass recording each word's depth
//! - `dfs`: enumeration of every shortest path over the depth-labelled DAG
//! - `ladder`: the rooted graph and the `generate` entry point

pub mod adjacency;
pub mod bfs;
pub mod dfs;
pub mod ladder;
pub mod types;

pub use adjacency::{filter_by_length, is_one_char_diff, lexicon_filter, WordGraph};
pub use bfs::bfs_find_depth;
pub use dfs::dfs_find_paths;
pub use ladder::{generate, LadderGraph};
pub use types::{word_len, DepthMap, Ladder, LadderSet, Lexicon, SearchResult, Word};
