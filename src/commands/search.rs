//! `wordladder search` command - find every shortest ladder between two words
//!
//! - Validates both words against the lexicon before searching
//! - `--limit` caps the ladders printed; the reported count stays the total
//! - An empty result is not an error

use tracing::debug;
use wordladder_core::bail_invalid;
use wordladder_core::error::Result;
use wordladder_core::graph::{LadderGraph, SearchResult};
use wordladder_core::validate::validate_query;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the search command
pub fn execute(ctx: &CommandContext, from: &str, to: &str, limit: Option<usize>) -> Result<()> {
    if limit == Some(0) {
        bail_invalid!("--limit", 0);
    }

    let lexicon = ctx.load_lexicon()?;
    validate_query(from, to, &lexicon)?;

    let graph = LadderGraph::new(from, &lexicon);
    let mut result = SearchResult::new(from, to, graph.path_search(to));
    debug!(ladders = result.count, steps = ?result.steps, elapsed = ?ctx.start.elapsed(), "search");

    if let Some(limit) = limit {
        result.truncate(limit);
    }

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => output_human(ctx, &result),
        OutputFormat::Records => output_records(&result),
    }

    Ok(())
}

fn output_human(ctx: &CommandContext, result: &SearchResult) {
    if !result.found() {
        if !ctx.quiet() {
            println!("No ladder found from '{}' to '{}'", result.from, result.to);
        }
        return;
    }

    for ladder in &result.ladders {
        println!("{}", ladder.join(" -> "));
    }

    if !ctx.quiet() {
        let steps = result.steps.unwrap_or_default();
        let noun = if result.count == 1 { "ladder" } else { "ladders" };
        let step_noun = if steps == 1 { "step" } else { "steps" };
        if result.truncated() {
            println!(
                "\nShowing {} of {} {} ({} {})",
                result.ladders.len(),
                result.count,
                noun,
                steps,
                step_noun
            );
        } else {
            println!("\n{} {} ({} {})", result.count, noun, steps, step_noun);
        }
    }
}

fn output_records(result: &SearchResult) {
    let length = result
        .steps
        .map(|steps| steps.to_string())
        .unwrap_or_else(|| "none".to_string());
    println!(
        "H wordladder=1 records=1 mode=search from={} to={} ladders={} length={} truncated={}",
        result.from,
        result.to,
        result.count,
        length,
        result.truncated()
    );

    for (idx, ladder) in result.ladders.iter().enumerate() {
        println!("L {} {}", idx + 1, ladder.join(" "));
    }
}
