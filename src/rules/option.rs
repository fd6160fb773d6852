//! Deck options - the investigator's deck-building rules.
//!
//! A `DeckOption` is a bundle of independent predicate axes. Every axis is
//! optional; an empty list means "no constraint on this axis". Populated
//! axes are AND'd together, and the entries inside one axis are OR'd.
//!
//! ## Axes
//!
//! - `faction` / `faction_select`: card's primary or secondary faction
//! - `type_code`: card type
//! - `traits`: `#trait#` membership in the normalized trait line
//! - `uses`: `(N token).` markers in the rules text
//! - `text`: case-insensitive regex over the rules text
//! - `level`: parsed but not enforced

use serde::{Deserialize, Serialize};

use crate::core::LoadError;

use super::meta::DeckMeta;

/// Requirement that several factions each reach a minimum count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtLeast {
    /// Number of distinct factions that must reach `min`.
    pub factions: u32,
    /// Copies each of those factions needs.
    pub min: u32,
}

impl AtLeast {
    /// Zero in either field disables the requirement.
    #[must_use]
    pub fn is_enforced(&self) -> bool {
        self.factions > 0 && self.min > 0
    }
}

/// Experience range. Recognized in the data but not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionLevel {
    pub min: u32,
    pub max: u32,
}

/// One deck-building option.
///
/// Field names follow the card database's JSON (`type`, `trait`, `name`).
///
/// ## Example
///
/// ```
/// use deck_legality::rules::DeckOption;
///
/// let events = DeckOption::new()
///     .with_types(["event"])
///     .with_limit(5)
///     .with_error("too_many_events");
///
/// assert!(!events.is_catch_all());
/// assert_eq!(events.effective_limit(), Some(5));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckOption {
    pub faction: Vec<String>,
    pub faction_select: Vec<String>,
    pub uses: Vec<String>,
    #[serde(rename = "trait")]
    pub traits: Vec<String>,
    pub text: Vec<String>,
    #[serde(rename = "type", alias = "type_code")]
    pub type_code: Vec<String>,

    /// Maximum number of cards this option may admit.
    pub limit: Option<u32>,
    pub atleast: Option<AtLeast>,
    pub level: Option<OptionLevel>,

    /// Message key reported when `limit` or `atleast` is violated.
    pub error: Option<String>,

    /// Matching cards are vetoed instead of admitted.
    pub not: bool,

    /// Display name shown by the deck-options editor.
    #[serde(rename = "name")]
    pub real_name: Option<String>,
}

fn strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl DeckOption {
    /// Create an option with no predicates; it matches every card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of options.
    pub fn parse_list(json: &str) -> Result<Vec<Self>, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_factions<I: IntoIterator<Item = S>, S: Into<String>>(mut self, factions: I) -> Self {
        self.faction = strings(factions);
        self
    }

    #[must_use]
    pub fn with_faction_select<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        factions: I,
    ) -> Self {
        self.faction_select = strings(factions);
        self
    }

    #[must_use]
    pub fn with_types<I: IntoIterator<Item = S>, S: Into<String>>(mut self, types: I) -> Self {
        self.type_code = strings(types);
        self
    }

    #[must_use]
    pub fn with_traits<I: IntoIterator<Item = S>, S: Into<String>>(mut self, traits: I) -> Self {
        self.traits = strings(traits);
        self
    }

    #[must_use]
    pub fn with_uses<I: IntoIterator<Item = S>, S: Into<String>>(mut self, uses: I) -> Self {
        self.uses = strings(uses);
        self
    }

    #[must_use]
    pub fn with_text<I: IntoIterator<Item = S>, S: Into<String>>(mut self, patterns: I) -> Self {
        self.text = strings(patterns);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_atleast(mut self, factions: u32, min: u32) -> Self {
        self.atleast = Some(AtLeast { factions, min });
        self
    }

    #[must_use]
    pub fn with_level(mut self, min: u32, max: u32) -> Self {
        self.level = Some(OptionLevel { min, max });
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Turn the option into a veto.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.not = true;
        self
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.real_name = Some(name.into());
        self
    }

    /// True when no predicate axis is populated.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.faction.is_empty()
            && self.faction_select.is_empty()
            && self.uses.is_empty()
            && self.traits.is_empty()
            && self.text.is_empty()
            && self.type_code.is_empty()
    }

    /// The option's display name.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.real_name.as_deref()
    }

    /// Limit that is both counted and enforced. A zero limit is treated as unset.
    #[must_use]
    pub fn effective_limit(&self) -> Option<u32> {
        self.limit.filter(|&limit| limit > 0)
    }

    /// `atleast` requirement that is both counted and enforced.
    #[must_use]
    pub fn effective_atleast(&self) -> Option<AtLeast> {
        self.atleast.filter(AtLeast::is_enforced)
    }

    /// The factions `faction_select` admits for this deck.
    ///
    /// A selection that is a member of the list narrows it to that one
    /// faction; anything else leaves the whole list in effect.
    #[must_use]
    pub fn effective_factions(&self, meta: Option<&DeckMeta>) -> &[String] {
        let selected = meta.and_then(|m| m.faction_selected.as_deref());
        match selected.and_then(|s| self.faction_select.iter().position(|f| f == s)) {
            Some(idx) => &self.faction_select[idx..=idx],
            None => &self.faction_select,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_catch_all() {
        let option = DeckOption::new();
        assert!(option.is_catch_all());
        assert!(!option.not);

        // Level alone does not make an option selective.
        assert!(DeckOption::new().with_level(0, 5).is_catch_all());
        assert!(!DeckOption::new().with_uses(["ammo"]).is_catch_all());
    }

    #[test]
    fn test_effective_limit_and_atleast() {
        assert_eq!(DeckOption::new().effective_limit(), None);
        assert_eq!(DeckOption::new().with_limit(0).effective_limit(), None);
        assert_eq!(DeckOption::new().with_limit(2).effective_limit(), Some(2));

        assert!(DeckOption::new().with_atleast(2, 0).effective_atleast().is_none());
        assert!(DeckOption::new().with_atleast(0, 6).effective_atleast().is_none());
        assert_eq!(
            DeckOption::new().with_atleast(2, 6).effective_atleast(),
            Some(AtLeast { factions: 2, min: 6 })
        );
    }

    #[test]
    fn test_effective_factions() {
        let option = DeckOption::new().with_faction_select(["aggression", "justice", "leadership"]);

        assert_eq!(option.effective_factions(None).len(), 3);
        assert_eq!(option.effective_factions(Some(&DeckMeta::default())).len(), 3);
        assert_eq!(
            option.effective_factions(Some(&DeckMeta::with_faction("justice"))),
            &["justice".to_string()]
        );
        // A selection outside the list leaves the full list in effect.
        assert_eq!(
            option
                .effective_factions(Some(&DeckMeta::with_faction("protection")))
                .len(),
            3
        );
    }

    #[test]
    fn test_parse_list() {
        let json = r#"[
            {"faction": ["justice", "basic"]},
            {"faction_select": ["aggression", "justice"], "name": "Secondary Class"},
            {"trait": ["Avenger"], "type": ["ally"], "limit": 3, "error": "too_many_avengers"},
            {"text": ["[Hh]eals? \\d+ damage"], "not": true},
            {"atleast": {"factions": 2, "min": 6}, "level": {"min": 0, "max": 5}}
        ]"#;

        let options = DeckOption::parse_list(json).unwrap();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].faction, vec!["justice", "basic"]);
        assert_eq!(options[1].display_name(), Some("Secondary Class"));
        assert_eq!(options[2].traits, vec!["Avenger"]);
        assert_eq!(options[2].type_code, vec!["ally"]);
        assert_eq!(options[2].error.as_deref(), Some("too_many_avengers"));
        assert!(options[3].not);
        assert_eq!(options[4].atleast, Some(AtLeast { factions: 2, min: 6 }));
        assert_eq!(options[4].level, Some(OptionLevel { min: 0, max: 5 }));
    }

    #[test]
    fn test_parse_list_accepts_type_code_key() {
        let options = DeckOption::parse_list(r#"[{"type_code": ["event"]}]"#).unwrap();
        assert_eq!(options[0].type_code, vec!["event"]);
    }

    #[test]
    fn test_parse_list_rejects_malformed() {
        assert!(DeckOption::parse_list(r#"[{"limit": "three"}]"#).is_err());
    }
}
