//! Card registry for code lookup.
//!
//! The `CardRegistry` holds the materialized card pool. Investigators are
//! indexed twice: as plain cards (they can appear in a card list) and as
//! `Investigator`s carrying their deck-building data.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::LoadError;

use super::definition::Card;
use super::investigator::Investigator;

/// Registry of cards keyed by code.
///
/// ## Example
///
/// ```
/// use deck_legality::cards::{Card, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new("01050", "Web-Shooter", "upgrade", "hero"));
///
/// let found = registry.get("01050").unwrap();
/// assert_eq!(found.real_name.as_deref(), Some("Web-Shooter"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, Card>,
    investigators: FxHashMap<String, Investigator>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON array of card records.
    ///
    /// Records carrying `deck_requirements` or `deck_options` are also
    /// registered as investigators. Later duplicates replace earlier ones.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let records: Vec<Investigator> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for record in records {
            if record.deck_requirements.is_some() || !record.deck_options.is_empty() {
                registry.register_investigator(record);
            } else {
                registry.register(record.card);
            }
        }
        debug!(
            cards = registry.len(),
            investigators = registry.investigators.len(),
            "loaded card registry"
        );
        Ok(registry)
    }

    /// Register a card, returning any card it replaced.
    pub fn register(&mut self, card: Card) -> Option<Card> {
        let replaced = self.cards.insert(card.code.clone(), card);
        if let Some(old) = &replaced {
            warn!(code = %old.code, "replaced duplicate card code");
        }
        replaced
    }

    /// Register an investigator, also indexing its card.
    pub fn register_investigator(&mut self, investigator: Investigator) {
        self.register(investigator.card.clone());
        self.investigators
            .insert(investigator.card.code.clone(), investigator);
    }

    /// Get a card by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Card> {
        self.cards.get(code)
    }

    /// Get an investigator by code.
    ///
    /// Distinguishes unknown codes from cards that cannot lead a deck.
    pub fn investigator(&self, code: &str) -> Result<&Investigator, LoadError> {
        match self.investigators.get(code) {
            Some(investigator) => Ok(investigator),
            None if self.cards.contains_key(code) => {
                Err(LoadError::NotInvestigator(code.to_string()))
            }
            None => Err(LoadError::UnknownCard(code.to_string())),
        }
    }

    /// Check if a card code is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.cards.contains_key(code)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Iterate over all investigators.
    pub fn investigators(&self) -> impl Iterator<Item = &Investigator> {
        self.investigators.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }

    /// Expand `(code, quantity)` deck slots into one entry per physical copy.
    ///
    /// Slot order is preserved; copies of a slot are adjacent.
    pub fn resolve_slots<I, S>(&self, slots: I) -> Result<Vec<&Card>, LoadError>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let mut cards = Vec::new();
        for (code, quantity) in slots {
            let code = code.as_ref();
            let card = self
                .get(code)
                .ok_or_else(|| LoadError::UnknownCard(code.to_string()))?;
            cards.extend(std::iter::repeat(card).take(quantity));
        }
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: &str = r#"[
        {"code": "01001a", "real_name": "Spider-Man", "type_code": "hero", "faction_code": "hero",
         "deck_requirements": {"size": 40}, "deck_options": [{"faction": ["basic"]}]},
        {"code": "01088", "real_name": "Energy", "type_code": "resource", "faction_code": "basic", "deck_limit": 3},
        {"code": "01089", "real_name": "Genius", "type_code": "resource", "faction_code": "basic", "deck_limit": 3}
    ]"#;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        assert!(registry.is_empty());

        registry.register(Card::new("01088", "Energy", "resource", "basic"));
        assert!(registry.contains("01088"));
        assert!(registry.get("01099").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_replaces_duplicates() {
        let mut registry = CardRegistry::new();
        assert!(registry.register(Card::new("x", "Old", "ally", "basic")).is_none());

        let replaced = registry.register(Card::new("x", "New", "ally", "basic"));
        assert_eq!(replaced.unwrap().real_name.as_deref(), Some("Old"));
        assert_eq!(registry.get("x").unwrap().real_name.as_deref(), Some("New"));
    }

    #[test]
    fn test_from_json_splits_investigators() {
        let registry = CardRegistry::from_json(POOL).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.investigators().count(), 1);

        let investigator = registry.investigator("01001a").unwrap();
        assert_eq!(investigator.deck_size(30), 40);

        assert!(matches!(
            registry.investigator("01088"),
            Err(LoadError::NotInvestigator(_))
        ));
        assert!(matches!(
            registry.investigator("nope"),
            Err(LoadError::UnknownCard(_))
        ));
    }

    #[test]
    fn test_resolve_slots() {
        let registry = CardRegistry::from_json(POOL).unwrap();
        let cards = registry
            .resolve_slots([("01088", 2), ("01089", 1)])
            .unwrap();
        let codes: Vec<_> = cards.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["01088", "01088", "01089"]);

        let err = registry.resolve_slots([("01088", 1), ("99999", 1)]).unwrap_err();
        assert!(matches!(err, LoadError::UnknownCard(code) if code == "99999"));
    }

    #[test]
    fn test_find() {
        let registry = CardRegistry::from_json(POOL).unwrap();
        let resources: Vec<_> = registry.find(|c| c.type_code == "resource").collect();
        assert_eq!(resources.len(), 2);
    }
}
