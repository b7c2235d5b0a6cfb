//! Error types and exit codes for wordladder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, config parsing)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (word not in lexicon, mismatched lengths, no lexicon)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - query does not fit the lexicon (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wordladder operations
#[derive(Error, Debug)]
pub enum LadderError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("no lexicon given (pass --lexicon or set `lexicon` in {config_path:?})")]
    NoLexicon { config_path: PathBuf },

    #[error("word not in lexicon: {word}")]
    WordNotInLexicon { word: String },

    #[error("length mismatch: {from:?} has {from_len} characters, {to:?} has {to_len}")]
    LengthMismatch {
        from: String,
        to: String,
        from_len: usize,
        to_len: usize,
    },

    // Generic failures (exit code 1)
    #[error("failed to open lexicon {path:?}: {source}")]
    LexiconOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read lexicon {path:?}: {source}")]
    LexiconRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    Other(String),
}

impl LadderError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        LadderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a word missing from the lexicon
    pub fn word_not_in_lexicon(word: impl Into<String>) -> Self {
        LadderError::WordNotInLexicon { word: word.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LadderError::UnknownFormat(_)
            | LadderError::UsageError(_)
            | LadderError::InvalidValue { .. } => ExitCode::Usage,

            LadderError::NoLexicon { .. }
            | LadderError::WordNotInLexicon { .. }
            | LadderError::LengthMismatch { .. } => ExitCode::Data,

            LadderError::LexiconOpen { .. }
            | LadderError::LexiconRead { .. }
            | LadderError::Io(_)
            | LadderError::Json(_)
            | LadderError::Toml(_)
            | LadderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            LadderError::UnknownFormat(_) => "unknown_format",
            LadderError::UsageError(_) => "usage_error",
            LadderError::NoLexicon { .. } => "no_lexicon",
            LadderError::WordNotInLexicon { .. } => "word_not_in_lexicon",
            LadderError::LengthMismatch { .. } => "length_mismatch",
            LadderError::LexiconOpen { .. } => "lexicon_open",
            LadderError::LexiconRead { .. } => "lexicon_read",
            LadderError::Io(_) => "io_error",
            LadderError::Json(_) => "json_error",
            LadderError::Toml(_) => "toml_error",
            LadderError::InvalidValue { .. } => "invalid_value",
            LadderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wordladder operations
pub type Result<T> = std::result::Result<T, LadderError>;
