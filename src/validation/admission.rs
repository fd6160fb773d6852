//! Card admissibility.
//!
//! Decides whether one card may sit in a deck led by the validator's
//! investigator. In counting mode the claiming option's counters are
//! bumped; in probe mode nothing is recorded, so the card browser can ask
//! "would this card be legal" without touching a running tally.

use tracing::trace;

use crate::cards::Card;
use crate::rules::RuleTally;

use super::validator::DeckValidator;

/// How `admit` treats option counters.
#[derive(Debug)]
pub enum Mode<'t> {
    /// Record the admitted card in this tally.
    Counting(&'t mut RuleTally),
    /// Answer only.
    Probe,
}

impl DeckValidator<'_> {
    /// Can `card` belong to this deck?
    ///
    /// Investigator cards, encounter cards, and cards restricted to other
    /// investigators are rejected before any option is consulted. After
    /// that the first matching option decides: a `not` option vetoes, any
    /// other admits. No matching option means rejection.
    pub fn admit(&self, card: &Card, mode: Mode<'_>) -> bool {
        let config = self.config();
        if config.is_excluded_type(&card.type_code) {
            trace!(card = %card.code, type_code = %card.type_code, "card type never legal");
            return false;
        }
        if config.is_excluded_faction(&card.faction_code) {
            trace!(card = %card.code, faction = %card.faction_code, "faction never legal");
            return false;
        }
        if card.is_restricted_from(self.investigator().code()) {
            trace!(card = %card.code, "restricted to other investigators");
            return false;
        }

        let Some((index, option)) = self.rules().first_match(card, self.meta()) else {
            trace!(card = %card.code, "no deck option admits card");
            return false;
        };
        if option.not {
            trace!(card = %card.code, option = index, "vetoed by deck option");
            return false;
        }

        if let Mode::Counting(tally) = mode {
            if option.effective_limit().is_some() {
                tally.record_limit(index);
            }
            if option.effective_atleast().is_some() {
                tally.record_factions(index, card);
            }
        }
        true
    }

    /// Would `card` be a legal addition? Never records anything.
    #[must_use]
    pub fn can_include_card(&self, card: &Card) -> bool {
        self.admit(card, Mode::Probe)
    }
}
