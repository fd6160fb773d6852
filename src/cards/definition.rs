//! Card data - the static, read-only side of the engine.
//!
//! A `Card` is whatever the card database materialized: identity, faction,
//! copy limit, text, and traits. The validator only ever borrows cards;
//! nothing in this crate mutates them.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Investigator allow-list carried by restricted cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRestrictions {
    /// Codes of the investigators allowed to include the card.
    ///
    /// `None` means the card carries no investigator restriction at all.
    #[serde(default)]
    pub investigators: Option<Vec<String>>,
}

impl CardRestrictions {
    /// Does this restriction admit the given investigator?
    #[must_use]
    pub fn allows(&self, investigator_code: &str) -> bool {
        match &self.investigators {
            Some(codes) => codes.iter().any(|c| c == investigator_code),
            None => true,
        }
    }
}

/// A card as delivered by the card database.
///
/// ## Example
///
/// ```
/// use deck_legality::cards::Card;
///
/// let card = Card::new("01050", "Swinging Through the City", "event", "justice")
///     .with_deck_limit(3)
///     .with_traits(&["Aerial"]);
///
/// assert!(card.has_faction("justice"));
/// assert_eq!(card.normalized_traits().as_deref(), Some("#aerial#"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    /// Unique card code.
    pub code: String,

    /// Canonical English name; copies are grouped by it.
    pub real_name: Option<String>,

    /// Card type (`event`, `ally`, `hero`, ...).
    pub type_code: String,

    /// Primary faction.
    pub faction_code: String,

    /// Secondary faction for dual-faction cards.
    pub faction2_code: Option<String>,

    /// Maximum copies per deck.
    pub deck_limit: Option<u32>,

    /// Experience cost. Carried for callers; no option enforces it.
    pub xp: Option<u32>,

    /// Double-sided cards do not take a draw-deck slot.
    pub double_sided: bool,

    /// Canonical English rules text.
    pub real_text: Option<String>,

    /// Trait line as printed, e.g. `"Hero. Avenger."`.
    pub real_traits: Option<String>,

    /// Trait line in `#trait#trait#` form.
    pub real_traits_normalized: Option<String>,

    /// Investigator restrictions.
    pub restrictions: Option<CardRestrictions>,
}

impl Card {
    /// Create a card with the fields every validation touches.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        type_code: impl Into<String>,
        faction_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            real_name: Some(name.into()),
            type_code: type_code.into(),
            faction_code: faction_code.into(),
            ..Self::default()
        }
    }

    /// Set the secondary faction.
    #[must_use]
    pub fn with_faction2(mut self, faction: impl Into<String>) -> Self {
        self.faction2_code = Some(faction.into());
        self
    }

    /// Set the copy limit.
    #[must_use]
    pub fn with_deck_limit(mut self, limit: u32) -> Self {
        self.deck_limit = Some(limit);
        self
    }

    /// Set the experience cost.
    #[must_use]
    pub fn with_xp(mut self, xp: u32) -> Self {
        self.xp = Some(xp);
        self
    }

    /// Mark the card as double-sided.
    #[must_use]
    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Set the rules text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.real_text = Some(text.into());
        self
    }

    /// Set the trait line, filling both the printed and normalized forms.
    #[must_use]
    pub fn with_traits(mut self, traits: &[&str]) -> Self {
        let printed: Vec<String> = traits.iter().map(|t| format!("{t}.")).collect();
        let printed = printed.join(" ");
        self.real_traits_normalized = Some(normalize_traits(&printed));
        self.real_traits = Some(printed);
        self
    }

    /// Restrict the card to the given investigators.
    #[must_use]
    pub fn restricted_to<I, S>(mut self, investigators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restrictions = Some(CardRestrictions {
            investigators: Some(investigators.into_iter().map(Into::into).collect()),
        });
        self
    }

    /// Primary and secondary factions, skipping empty codes.
    pub fn factions(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.faction_code.as_str())
            .chain(self.faction2_code.as_deref())
            .filter(|f| !f.is_empty())
    }

    /// Does either faction equal `faction`?
    #[must_use]
    pub fn has_faction(&self, faction: &str) -> bool {
        self.factions().any(|f| f == faction)
    }

    /// Trait line in `#trait#` form.
    ///
    /// Falls back to normalizing `real_traits` when the database did not
    /// supply the normalized column.
    #[must_use]
    pub fn normalized_traits(&self) -> Option<Cow<'_, str>> {
        if let Some(normalized) = &self.real_traits_normalized {
            return Some(Cow::Borrowed(normalized));
        }
        self.real_traits
            .as_deref()
            .map(|traits| Cow::Owned(normalize_traits(traits)))
    }

    /// Is this card barred for the given investigator by its restrictions?
    #[must_use]
    pub fn is_restricted_from(&self, investigator_code: &str) -> bool {
        self.restrictions
            .as_ref()
            .is_some_and(|r| !r.allows(investigator_code))
    }
}

/// Convert a printed trait line (`"Hero. S.H.I.E.L.D."`) to `#hero#s.h.i.e.l.d#`.
///
/// Traits are separated by `". "`; the trailing period is dropped.
#[must_use]
pub fn normalize_traits(traits: &str) -> String {
    let mut out = String::from("#");
    for t in traits
        .split(". ")
        .map(|t| t.trim().trim_end_matches('.'))
        .filter(|t| !t.is_empty())
    {
        out.push_str(&t.to_lowercase());
        out.push('#');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_builder() {
        let card = Card::new("01001", "Spider-Man", "event", "justice")
            .with_faction2("protection")
            .with_deck_limit(2)
            .with_xp(1)
            .with_text("Heal 2 damage.");

        assert_eq!(card.code, "01001");
        assert_eq!(card.real_name.as_deref(), Some("Spider-Man"));
        assert_eq!(card.deck_limit, Some(2));
        assert_eq!(card.xp, Some(1));
        assert!(!card.double_sided);
        assert_eq!(card.factions().collect::<Vec<_>>(), vec!["justice", "protection"]);
    }

    #[test]
    fn test_factions_skip_empty() {
        let card = Card::new("x", "X", "event", "");
        assert_eq!(card.factions().count(), 0);
        assert!(!card.has_faction(""));
    }

    #[test]
    fn test_normalize_traits() {
        assert_eq!(normalize_traits("Hero. Avenger."), "#hero#avenger#");
        assert_eq!(normalize_traits("S.H.I.E.L.D."), "#s.h.i.e.l.d#");
        assert_eq!(normalize_traits("Item. S.H.I.E.L.D. Tech."), "#item#s.h.i.e.l.d#tech#");
        assert_eq!(normalize_traits(""), "#");
    }

    #[test]
    fn test_normalized_traits_prefers_column() {
        let mut card = Card::new("x", "X", "ally", "basic");
        card.real_traits = Some("Ignored.".into());
        card.real_traits_normalized = Some("#kept#".into());
        assert_eq!(card.normalized_traits().as_deref(), Some("#kept#"));

        card.real_traits_normalized = None;
        assert_eq!(card.normalized_traits().as_deref(), Some("#ignored#"));
    }

    #[test]
    fn test_restrictions() {
        let open = Card::new("x", "X", "ally", "basic");
        assert!(!open.is_restricted_from("01001a"));

        let restricted = open.clone().restricted_to(["01001a"]);
        assert!(!restricted.is_restricted_from("01001a"));
        assert!(restricted.is_restricted_from("01010a"));

        let empty = open.restricted_to(Vec::<String>::new());
        assert!(empty.is_restricted_from("01001a"));
    }

    #[test]
    fn test_card_from_json() {
        let json = r#"{
            "code": "01010",
            "real_name": "Jarvis",
            "type_code": "ally",
            "faction_code": "hero",
            "deck_limit": 1,
            "restrictions": {"investigators": ["01009a"]}
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.code, "01010");
        assert_eq!(card.deck_limit, Some(1));
        assert!(card.is_restricted_from("01001a"));
        assert!(card.faction2_code.is_none());
        assert!(!card.double_sided);
    }
}
