//! Command trait and context for dispatching commands

use std::io;
use std::path::Path;
use std::time::Instant;

use tracing::debug;
use wordladder_core::config::GlobalConfig;
use wordladder_core::error::Result;
use wordladder_core::graph::Lexicon;
use wordladder_core::lexicon::{read_lexicon, read_lexicon_from};

use crate::cli::{Cli, Commands, ConfigCommands, OutputFormat};
use crate::commands;

/// Lexicon path that reads words from standard input
const STDIN_PATH: &str = "-";

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, format: OutputFormat, start: Instant) -> Self {
        Self { cli, format, start }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Load the lexicon named by `--lexicon` or the global config.
    ///
    /// The config file is only read when `--lexicon` is absent.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        let explicit = self.cli.lexicon.as_deref();
        let config = match explicit {
            Some(_) => GlobalConfig::default(),
            None => GlobalConfig::load()?,
        };
        let path = config.resolve_lexicon(explicit)?;

        let lexicon = if path == Path::new(STDIN_PATH) {
            read_lexicon_from(io::stdin().lock(), path)?
        } else {
            read_lexicon(&path)?
        };

        debug!(words = lexicon.len(), elapsed = ?self.start.elapsed(), "load_lexicon");
        Ok(lexicon)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search { from, to, limit } => {
                commands::search::execute(ctx, from, to, *limit)
            }
            Commands::Neighbors { word } => commands::neighbors::execute(ctx, word),
            Commands::Stats { length } => commands::stats::execute(ctx, *length),
            Commands::Config(command) => command.execute(ctx),
        }
    }
}

impl Command for ConfigCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            ConfigCommands::Show => commands::config::show(ctx),
            ConfigCommands::SetLexicon { path } => commands::config::set_lexicon(ctx, path),
            ConfigCommands::SetFormat { value } => commands::config::set_format(ctx, *value),
        }
    }
}
