//! Up-front checks for a ladder query
//!
//! [`generate`](crate::graph::generate) assumes its preconditions hold;
//! callers that take words from users run these checks first.

use crate::bail_usage;
use crate::error::{LadderError, Result};
use crate::graph::{word_len, Lexicon};

/// Check that `from` and `to` are non-empty, equally long and both in `lexicon`.
pub fn validate_query(from: &str, to: &str, lexicon: &Lexicon) -> Result<()> {
    if from.is_empty() || to.is_empty() {
        bail_usage!("start and target words must not be empty");
    }

    let (from_len, to_len) = (word_len(from), word_len(to));
    if from_len != to_len {
        return Err(LadderError::LengthMismatch {
            from: from.to_string(),
            to: to.to_string(),
            from_len,
            to_len,
        });
    }

    for word in [from, to] {
        if !lexicon.contains(word) {
            return Err(LadderError::word_not_in_lexicon(word));
        }
    }

    Ok(())
}
