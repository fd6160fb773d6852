//! Investigators - cards that lead a deck and define how it is built.

use serde::{Deserialize, Serialize};

use crate::core::LoadError;
use crate::rules::DeckOption;

use super::definition::Card;

/// A signature card the deck must contain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRequirement {
    /// Preferred card code.
    pub code: String,

    /// Codes that satisfy the requirement in place of `code`.
    #[serde(default)]
    pub alternates: Vec<String>,
}

impl CardRequirement {
    /// Create a requirement with no alternates.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            alternates: Vec::new(),
        }
    }

    /// Add an alternate code.
    #[must_use]
    pub fn with_alternate(mut self, code: impl Into<String>) -> Self {
        self.alternates.push(code.into());
        self
    }

    /// Is the requirement met by a card with this code?
    #[must_use]
    pub fn is_satisfied_by(&self, code: &str) -> bool {
        self.code == code || self.alternates.iter().any(|alt| alt == code)
    }
}

/// Deck size and signature requirements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRequirements {
    /// Exact draw-deck size. `None` (or zero) falls back to the configured default.
    pub size: Option<usize>,

    /// Required signature cards.
    pub card: Vec<CardRequirement>,
}

/// A card that leads a deck.
///
/// The investigator's `deck_options` are evaluated in order, and that
/// order is significant: the first matching option claims a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Investigator {
    /// The investigator's own card data.
    #[serde(flatten)]
    pub card: Card,

    /// Size and signature requirements, if any.
    #[serde(default)]
    pub deck_requirements: Option<DeckRequirements>,

    /// Ordered deck-building options.
    #[serde(default)]
    pub deck_options: Vec<DeckOption>,
}

impl Investigator {
    /// Wrap a card with no requirements and no options.
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self {
            card,
            deck_requirements: None,
            deck_options: Vec::new(),
        }
    }

    /// Parse a single investigator record.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the exact deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_requirements.get_or_insert_with(Default::default).size = Some(size);
        self
    }

    /// Add a signature requirement.
    #[must_use]
    pub fn requiring(mut self, requirement: CardRequirement) -> Self {
        self.deck_requirements
            .get_or_insert_with(Default::default)
            .card
            .push(requirement);
        self
    }

    /// Append a deck option. Options keep insertion order.
    #[must_use]
    pub fn with_option(mut self, option: DeckOption) -> Self {
        self.deck_options.push(option);
        self
    }

    /// The investigator's card code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.card.code
    }

    /// Deck size this investigator demands, or `default` when unstated.
    #[must_use]
    pub fn deck_size(&self, default: usize) -> usize {
        self.deck_requirements
            .as_ref()
            .and_then(|r| r.size)
            .filter(|&size| size > 0)
            .unwrap_or(default)
    }

    /// Signature requirements; empty when there are none.
    #[must_use]
    pub fn requirements(&self) -> &[CardRequirement] {
        match &self.deck_requirements {
            Some(requirements) => requirements.card.as_slice(),
            None => &[],
        }
    }

    /// Options the deck editor must offer a faction choice for.
    pub fn hero_options(&self) -> impl Iterator<Item = &DeckOption> {
        self.deck_options
            .iter()
            .filter(|option| !option.faction_select.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Card {
        Card::new("01001a", "Spider-Man", "hero", "hero")
    }

    #[test]
    fn test_requirement_alternates() {
        let req = CardRequirement::new("01001").with_alternate("01001b");
        assert!(req.is_satisfied_by("01001"));
        assert!(req.is_satisfied_by("01001b"));
        assert!(!req.is_satisfied_by("01002"));
    }

    #[test]
    fn test_deck_size_defaults() {
        let bare = Investigator::new(hero());
        assert_eq!(bare.deck_size(30), 30);
        assert!(bare.requirements().is_empty());

        let sized = Investigator::new(hero()).with_deck_size(40);
        assert_eq!(sized.deck_size(30), 40);

        let zero = Investigator::new(hero()).with_deck_size(0);
        assert_eq!(zero.deck_size(30), 30);
    }

    #[test]
    fn test_hero_options() {
        let investigator = Investigator::new(hero())
            .with_option(DeckOption::new().with_factions(["basic"]))
            .with_option(
                DeckOption::new()
                    .with_faction_select(["aggression", "justice"])
                    .named("Secondary Class"),
            );

        let options: Vec<_> = investigator.hero_options().collect();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].display_name(), Some("Secondary Class"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "code": "01001a",
            "real_name": "Peter Parker",
            "type_code": "alter_ego",
            "faction_code": "hero",
            "deck_requirements": {
                "size": 40,
                "card": [{"code": "01002", "alternates": ["01002b"]}]
            },
            "deck_options": [
                {"faction": ["basic"]},
                {"type": ["event"], "limit": 5, "error": "too_many_events"}
            ]
        }"#;

        let investigator = Investigator::from_json(json).unwrap();
        assert_eq!(investigator.code(), "01001a");
        assert_eq!(investigator.deck_size(30), 40);
        assert_eq!(investigator.requirements().len(), 1);
        assert_eq!(investigator.deck_options.len(), 2);
        assert_eq!(investigator.deck_options[1].type_code, vec!["event".to_string()]);
        assert_eq!(investigator.deck_options[1].limit, Some(5));
    }
}
