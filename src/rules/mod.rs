//! Deck-building rules.
//!
//! An investigator's `deck_options` form an ordered list. Each card is
//! claimed by the first option it matches; a `not` option vetoes the card
//! instead. Options with `limit` or `atleast` accumulate counts in a
//! `RuleTally` during a counting pass.
//!
//! ## Key Types
//!
//! - `DeckOption`: One option, as stored in the card database
//! - `DeckMeta`: Per-deck faction selection
//! - `RuleSet`: Options with compiled text patterns; first-match scan
//! - `RuleTally`: Per-run counters aligned with the options

pub mod matcher;
pub mod meta;
pub mod option;
pub mod query;
pub mod tally;

pub use matcher::{CompiledOption, RuleSet};
pub use meta::DeckMeta;
pub use option::{AtLeast, DeckOption, OptionLevel};
pub use query::HEALS_HORROR_PATTERNS;
pub use tally::{OptionTally, RuleTally};
