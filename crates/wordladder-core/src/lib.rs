//! Wordladder Core Library
//!
//! Finds every shortest word ladder between two equal-length words, where
//! each step changes one character and every word is drawn from a lexicon.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod lexicon;
pub mod logging;
pub mod validate;

pub use graph::{generate, LadderGraph};
pub use lexicon::read_lexicon;
