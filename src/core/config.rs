//! Validator configuration.
//!
//! The defaults reproduce the card database's conventions: a 30 card deck,
//! hero and alter-ego cards never legal as deck contents, and encounter
//! cards kept out of player decks. Callers may load a different set from
//! JSON or adjust it with the builder methods.

use serde::{Deserialize, Serialize};

use super::error::LoadError;

/// Deck size used when an investigator does not state one.
pub const DEFAULT_DECK_SIZE: usize = 30;

/// Bucket name for cards without a `real_name` in copy counting.
pub const UNKNOWN_CARD_NAME: &str = "Unknown Card";

/// Configuration shared by every validation run of a `DeckValidator`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Target deck size when `deck_requirements.size` is absent or zero.
    pub default_deck_size: usize,

    /// Card types rejected before any deck option is consulted.
    pub excluded_type_codes: Vec<String>,

    /// Factions rejected before any deck option is consulted.
    pub excluded_faction_codes: Vec<String>,

    /// Grouping key for nameless cards when counting copies.
    pub unknown_card_name: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_deck_size: DEFAULT_DECK_SIZE,
            excluded_type_codes: vec!["hero".to_string(), "alter_ego".to_string()],
            excluded_faction_codes: vec!["encounter".to_string()],
            unknown_card_name: UNKNOWN_CARD_NAME.to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the fallback deck size.
    #[must_use]
    pub fn with_default_deck_size(mut self, size: usize) -> Self {
        self.default_deck_size = size;
        self
    }

    /// Reject an additional card type up front.
    #[must_use]
    pub fn exclude_type(mut self, type_code: impl Into<String>) -> Self {
        self.excluded_type_codes.push(type_code.into());
        self
    }

    /// Reject an additional faction up front.
    #[must_use]
    pub fn exclude_faction(mut self, faction_code: impl Into<String>) -> Self {
        self.excluded_faction_codes.push(faction_code.into());
        self
    }

    /// Is this type barred from every deck?
    #[must_use]
    pub fn is_excluded_type(&self, type_code: &str) -> bool {
        self.excluded_type_codes.iter().any(|t| t == type_code)
    }

    /// Is this faction barred from every deck?
    #[must_use]
    pub fn is_excluded_faction(&self, faction_code: &str) -> bool {
        self.excluded_faction_codes.iter().any(|f| f == faction_code)
    }
}
