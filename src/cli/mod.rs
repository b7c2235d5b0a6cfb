//! CLI argument parsing for wordladder
//!
//! Supports global flags: --lexicon, --format, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use wordladder_core::format::OutputFormat;
use parse::parse_format;

/// Wordladder - find every shortest word ladder between two words
#[derive(Parser, Debug)]
#[command(name = "wordladder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Lexicon file, whitespace-separated words (`-` reads stdin)
    #[arg(long, short = 'l', global = true, env = "WORDLADDER_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Output format: human, json or records
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and report timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find every shortest ladder from one word to another
    Search {
        /// Start word
        from: String,

        /// Target word
        to: String,

        /// Print at most this many ladders
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the words one character away from a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Summarize the lexicon and its word graph
    Stats {
        /// Report graph size for words of this length
        #[arg(long)]
        length: Option<usize>,
    },

    /// Show or change the global configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Set the default lexicon file
    SetLexicon {
        /// Path to the lexicon file
        path: PathBuf,
    },

    /// Set the default output format
    SetFormat {
        /// human, json or records
        #[arg(value_name = "FORMAT", value_parser = parse_format)]
        value: OutputFormat,
    },
}
