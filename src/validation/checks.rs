//! Rule-independent deck checks: physical deck, signatures, copy limits.

use std::borrow::Borrow;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::cards::{Card, CardRequirement};

/// Copies of one card name in the draw deck, and the limit that applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CopyCount {
    pub copies: u32,
    pub deck_limit: u32,
}

impl CopyCount {
    #[must_use]
    pub fn exceeds_limit(&self) -> bool {
        self.copies > self.deck_limit
    }
}

/// Cards that occupy a draw-deck slot (everything but double-sided cards).
pub fn draw_deck<C: Borrow<Card>>(cards: &[C]) -> impl Iterator<Item = &Card> {
    cards
        .iter()
        .map(<C as Borrow<Card>>::borrow)
        .filter(|card| !card.double_sided)
}

/// Signature requirements no card in the list satisfies.
pub fn missing_requirements<'r, C: Borrow<Card>>(
    requirements: &'r [CardRequirement],
    cards: &[C],
) -> Vec<&'r CardRequirement> {
    requirements
        .iter()
        .filter(|req| {
            !cards.iter().any(|card| {
                let card: &Card = card.borrow();
                req.is_satisfied_by(&card.code)
            })
        })
        .collect()
}

/// Group the draw deck by card name.
///
/// Nameless cards share the `unknown_name` bucket. The limit of a group is
/// that of its first card; a missing limit counts as zero.
pub fn copies_and_deck_limit<C: Borrow<Card>>(
    cards: &[C],
    unknown_name: &str,
) -> FxHashMap<String, CopyCount> {
    let mut groups: FxHashMap<String, CopyCount> = FxHashMap::default();
    for card in draw_deck(cards) {
        let name = card.real_name.as_deref().unwrap_or(unknown_name);
        groups
            .entry(name.to_string())
            .or_insert(CopyCount {
                copies: 0,
                deck_limit: card.deck_limit.unwrap_or(0),
            })
            .copies += 1;
    }
    groups
}
