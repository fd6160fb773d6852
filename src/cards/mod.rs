//! Card data: cards, investigators, and the registry.
//!
//! ## Key Types
//!
//! - `Card`: Static card data as materialized by the card database
//! - `Investigator`: A card that leads a deck, with its ordered deck options
//! - `DeckRequirements` / `CardRequirement`: Deck size and signature cards
//! - `CardRegistry`: Code-keyed card pool
//!
//! Nothing here is mutated by validation.

pub mod definition;
pub mod investigator;
pub mod registry;

pub use definition::{normalize_traits, Card, CardRestrictions};
pub use investigator::{CardRequirement, DeckRequirements, Investigator};
pub use registry::CardRegistry;
