//! `wordladder stats` command - summarize the lexicon and its word graph
//!
//! Without `--length`, reports the lexicon size and a histogram of word
//! lengths. With `--length N`, builds the graph for that length and reports
//! its vertex, edge and isolated-word counts.

use std::collections::BTreeMap;

use tracing::debug;
use wordladder_core::bail_invalid;
use wordladder_core::error::Result;
use wordladder_core::graph::{filter_by_length, word_len, Lexicon, WordGraph};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the stats command
pub fn execute(ctx: &CommandContext, length: Option<usize>) -> Result<()> {
    if length == Some(0) {
        bail_invalid!("--length", 0);
    }

    let lexicon = ctx.load_lexicon()?;

    match length {
        Some(length) => graph_stats(ctx, &lexicon, length),
        None => lexicon_stats(ctx, &lexicon),
    }
}

fn lexicon_stats(ctx: &CommandContext, lexicon: &Lexicon) -> Result<()> {
    let mut by_length: BTreeMap<usize, usize> = BTreeMap::new();
    for word in lexicon {
        *by_length.entry(word_len(word)).or_default() += 1;
    }

    match ctx.format {
        OutputFormat::Json => {
            let lengths: BTreeMap<String, usize> = by_length
                .iter()
                .map(|(len, count)| (len.to_string(), *count))
                .collect();
            let output = serde_json::json!({
                "words": lexicon.len(),
                "lengths": lengths,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Words: {}", lexicon.len());
            if !ctx.quiet() && !by_length.is_empty() {
                println!();
                println!("By length:");
                for (len, count) in &by_length {
                    println!("  {:>3}: {}", len, count);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H wordladder=1 records=1 mode=stats words={} lengths={}",
                lexicon.len(),
                by_length.len()
            );
            for (len, count) in &by_length {
                println!("S length={} words={}", len, count);
            }
        }
    }

    Ok(())
}

fn graph_stats(ctx: &CommandContext, lexicon: &Lexicon, length: usize) -> Result<()> {
    let graph = WordGraph::build(&filter_by_length(length, lexicon));
    let vertices = graph.vertex_count();
    let edges = graph.edge_count();
    let isolated = graph.isolated_count();
    debug!(length, vertices, edges, elapsed = ?ctx.start.elapsed(), "graph_stats");

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "words": lexicon.len(),
                "length": length,
                "vertices": vertices,
                "edges": edges,
                "isolated": isolated,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Words: {}", lexicon.len());
            println!("Length {}: {} words, {} edges", length, vertices, edges);
            if !ctx.quiet() {
                println!("Isolated: {}", isolated);
            }
        }
        OutputFormat::Records => {
            println!(
                "H wordladder=1 records=1 mode=stats words={} length={} vertices={} edges={} isolated={}",
                lexicon.len(),
                length,
                vertices,
                edges,
                isolated
            );
        }
    }

    Ok(())
}
