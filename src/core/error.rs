//! Load-time errors.
//!
//! Validation never fails: an illegal deck is an ordinary `Problem`.
//! These errors only cover turning raw card data into engine values.

use thiserror::Error;

/// Error raised while loading cards, options, or configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input was not valid JSON for the expected shape.
    #[error("invalid card data: {0}")]
    Json(#[from] serde_json::Error),

    /// A deck option carries a text pattern that is not a valid regex.
    #[error("deck option {index} has invalid text pattern `{pattern}`")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A deck slot references a code missing from the registry.
    #[error("unknown card code `{0}`")]
    UnknownCard(String),

    /// The code names a card, but not one that can lead a deck.
    #[error("card `{0}` is not an investigator")]
    NotInvestigator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_card_message() {
        let err = LoadError::UnknownCard("01999".into());
        assert_eq!(err.to_string(), "unknown card code `01999`");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<Vec<u32>, _> = serde_json::from_str("[1,");
        let err: LoadError = parse.unwrap_err().into();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
