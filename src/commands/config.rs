//! `wordladder config` command - show or update the global configuration

use std::path::Path;

use tracing::{info, warn};
use wordladder_core::config::GlobalConfig;
use wordladder_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Print the configuration file path and its settings
pub fn show(ctx: &CommandContext) -> Result<()> {
    let path = GlobalConfig::config_path()?;
    let config = GlobalConfig::load()?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path,
                "lexicon": config.lexicon,
                "format": config.format,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Config: {}", path.display());
            match &config.lexicon {
                Some(lexicon) => println!("lexicon = {}", lexicon.display()),
                None => println!("lexicon = (unset)"),
            }
            match config.format {
                Some(format) => println!("format = {}", format),
                None => println!("format = (unset)"),
            }
        }
        OutputFormat::Records => {
            let lexicon = config
                .lexicon
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            let format = config
                .format
                .map(|f| f.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "H wordladder=1 records=1 mode=config path={} lexicon={} format={}",
                path.display(),
                lexicon,
                format
            );
        }
    }

    Ok(())
}

/// Store the default lexicon path, made absolute against the working directory
pub fn set_lexicon(ctx: &CommandContext, path: &Path) -> Result<()> {
    let lexicon = if path == Path::new("-") {
        path.to_path_buf()
    } else {
        std::path::absolute(path)?
    };

    let mut config = load_for_update();
    config.lexicon = Some(lexicon.clone());
    let saved = config.save()?;
    info!(path = %saved.display(), "saved lexicon setting");

    report_saved(ctx, &saved, "lexicon", &lexicon.display().to_string())
}

/// Store the default output format
pub fn set_format(ctx: &CommandContext, format: OutputFormat) -> Result<()> {
    let mut config = load_for_update();
    config.format = Some(format);
    let saved = config.save()?;
    info!(path = %saved.display(), "saved format setting");

    report_saved(ctx, &saved, "format", &format.to_string())
}

/// Current config, or the defaults when the file cannot be read, so a
/// malformed file can be overwritten.
fn load_for_update() -> GlobalConfig {
    GlobalConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "replacing unreadable config");
        GlobalConfig::default()
    })
}

fn report_saved(ctx: &CommandContext, saved: &Path, key: &str, value: &str) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": saved,
                "key": key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.quiet() {
                println!("Set {} = {} in {}", key, value, saved.display());
            }
        }
        OutputFormat::Records => {
            println!(
                "H wordladder=1 records=1 mode=config.set path={} {}={}",
                saved.display(),
                key,
                value
            );
        }
    }
    Ok(())
}
