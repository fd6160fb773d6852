//! # deck-legality
//!
//! Deck-building legality engine for investigator-led card games.
//!
//! Given an investigator and a candidate card list, the engine decides
//! whether the list is a legal deck and, when it is not, reports why.
//!
//! ## Design Principles
//!
//! 1. **Plain Values In, Verdict Out**: The engine reads materialized
//!    cards and investigators. It does no I/O and knows nothing about how
//!    the data was loaded.
//!
//! 2. **Ordered Options, First Match Wins**: An investigator's deck
//!    options are scanned in order. The first option a card matches claims
//!    it, and only that option's counters move.
//!
//! 3. **Illegal Is Not An Error**: Validation returns `Option<Problem>`.
//!    Errors exist only for loading malformed data.
//!
//! ## Modules
//!
//! - `core`: Validator configuration and load errors
//! - `cards`: Cards, investigators, and the card registry
//! - `rules`: Deck options, matching, tallies, storage queries
//! - `validation`: Admission, deck checks, and the validator

pub mod core;
pub mod cards;
pub mod rules;
pub mod validation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{LoadError, ValidatorConfig};

pub use crate::cards::{
    Card, CardRegistry, CardRequirement, CardRestrictions, DeckRequirements, Investigator,
};

pub use crate::rules::{AtLeast, DeckMeta, DeckOption, OptionLevel, RuleSet, RuleTally};

pub use crate::validation::{CopyCount, DeckValidator, Mode, Problem, ProblemKind};
