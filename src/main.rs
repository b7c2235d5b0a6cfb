//! Wordladder - find every shortest word ladder between two words
//!
//! Each step of a ladder changes exactly one character, and every word
//! along the way must appear in the lexicon.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use wordladder_core::config::GlobalConfig;
use wordladder_core::error::{ExitCode as LadderExitCode, LadderError};
use wordladder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `Cli.format` exists, so honour `--format json`
            // from argv and emit the structured error envelope.
            if argv_format_json {
                let ladder_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::MissingSubcommand
                    | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                    | clap::error::ErrorKind::ArgumentConflict => {
                        LadderError::UsageError(err.to_string())
                    }
                    _ => LadderError::Other(err.to_string()),
                };

                eprintln!("{}", ladder_error.to_json());
                return ExitCode::from(ladder_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let format = resolve_format(cli.format);

    let result = commands::dispatch::run(&cli, format, start);

    match result {
        Ok(()) => ExitCode::from(LadderExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// `--format` wins; otherwise the config file, which is only read when needed.
fn resolve_format(explicit: Option<OutputFormat>) -> OutputFormat {
    if let Some(format) = explicit {
        return format;
    }

    match GlobalConfig::load() {
        Ok(config) => config.resolve_format(None),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable config for output format");
            OutputFormat::default()
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
