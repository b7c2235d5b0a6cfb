//! Command dispatch logic for wordladder

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use tracing::debug;
use wordladder_core::error::Result;

mod command;

pub use command::{Command, CommandContext};

pub fn run(cli: &Cli, format: OutputFormat, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), %format, "resolve_format");

    let ctx = CommandContext::new(cli, format, start);
    cli.command.execute(&ctx)
}
