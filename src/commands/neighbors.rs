//! `wordladder neighbors` command - list words one character away

use wordladder_core::error::{LadderError, Result};
use wordladder_core::graph::LadderGraph;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the neighbors command
pub fn execute(ctx: &CommandContext, word: &str) -> Result<()> {
    let lexicon = ctx.load_lexicon()?;
    if !lexicon.contains(word) {
        return Err(LadderError::word_not_in_lexicon(word));
    }

    let graph = LadderGraph::new(word, &lexicon);
    let neighbors: Vec<&str> = graph
        .neighbors(word)
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "word": word,
                "count": neighbors.len(),
                "neighbors": neighbors,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if neighbors.is_empty() {
                if !ctx.quiet() {
                    println!("No neighbors for '{}'", word);
                }
            } else {
                for neighbor in &neighbors {
                    println!("{}", neighbor);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H wordladder=1 records=1 mode=neighbors word={} neighbors={}",
                word,
                neighbors.len()
            );
            for neighbor in &neighbors {
                println!("N {}", neighbor);
            }
        }
    }

    Ok(())
}
