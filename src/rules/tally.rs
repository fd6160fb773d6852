//! Per-run option counters.
//!
//! A `RuleTally` is working memory for one validation pass: one slot per
//! deck option, aligned by index. It is created fresh for every pass and
//! dropped afterwards; nothing shares or persists it.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::Card;

/// Counters for a single deck option.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionTally {
    /// Cards admitted by the option, when it has a limit.
    pub limit: u32,
    /// Admitted cards per faction, when it has an `atleast` requirement.
    pub atleast: FxHashMap<String, u32>,
}

impl OptionTally {
    /// Number of factions with at least `min` admitted cards.
    #[must_use]
    pub fn factions_reaching(&self, min: u32) -> usize {
        self.atleast.values().filter(|&&count| count >= min).count()
    }
}

/// Counters for every option of an investigator.
///
/// SmallVec keeps the typical handful of options inline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTally {
    slots: SmallVec<[OptionTally; 8]>,
}

impl RuleTally {
    /// Create zeroed counters for `option_count` options.
    #[must_use]
    pub fn for_options(option_count: usize) -> Self {
        Self {
            slots: (0..option_count).map(|_| OptionTally::default()).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Counters for the option at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&OptionTally> {
        self.slots.get(index)
    }

    /// Count one card against the option's limit.
    pub fn record_limit(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.limit += 1;
        }
    }

    /// Count one card against each of its factions.
    pub fn record_factions(&mut self, index: usize, card: &Card) {
        if let Some(slot) = self.slots.get_mut(index) {
            for faction in card.factions() {
                *slot.atleast.entry(faction.to_string()).or_insert(0) += 1;
            }
        }
    }

    /// Iterate over slots in option order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionTally> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_options_zeroed() {
        let tally = RuleTally::for_options(3);
        assert_eq!(tally.len(), 3);
        assert!(tally.iter().all(|slot| slot.limit == 0 && slot.atleast.is_empty()));
        assert!(RuleTally::for_options(0).is_empty());
    }

    #[test]
    fn test_record_limit() {
        let mut tally = RuleTally::for_options(2);
        tally.record_limit(1);
        tally.record_limit(1);
        assert_eq!(tally.get(0).unwrap().limit, 0);
        assert_eq!(tally.get(1).unwrap().limit, 2);

        // Out of range is ignored.
        tally.record_limit(5);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_record_factions_counts_both() {
        let mut tally = RuleTally::for_options(1);
        let dual = Card::new("x", "X", "event", "aggression").with_faction2("justice");
        let single = Card::new("y", "Y", "event", "aggression");

        tally.record_factions(0, &dual);
        tally.record_factions(0, &single);

        let slot = tally.get(0).unwrap();
        assert_eq!(slot.atleast.get("aggression"), Some(&2));
        assert_eq!(slot.atleast.get("justice"), Some(&1));
        assert_eq!(slot.factions_reaching(1), 2);
        assert_eq!(slot.factions_reaching(2), 1);
        assert_eq!(slot.factions_reaching(3), 0);
    }
}
