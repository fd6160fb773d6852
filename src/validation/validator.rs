//! The deck validator.
//!
//! `DeckValidator` binds an investigator, an optional `DeckMeta`, and a
//! configuration, and turns a candidate card list into a verdict. Checks
//! run in a fixed priority order and the first failing check decides the
//! reason:
//!
//! 1. Signature cards present (`investigator`)
//! 2. Copy limits (`too_many_copies`)
//! 3. Every card admitted by some option (`invalid_cards`); this pass is
//!    the only one that fills the option tally
//! 4. Option `limit` / `atleast` requirements (`investigator`, with the
//!    error key of every violated option)
//! 5. Draw-deck size (`too_few_cards` / `too_many_cards`)

use std::borrow::Borrow;
use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cards::{Card, CardRequirement, Investigator};
use crate::core::{LoadError, ValidatorConfig};
use crate::rules::{DeckMeta, RuleSet, RuleTally};

use super::admission::Mode;
use super::checks::{self, CopyCount};
use super::problem::{Problem, ProblemKind};

/// Validates card lists for one investigator.
///
/// Immutable after construction; every call owns its own tally, so a
/// validator can be shared freely between threads.
///
/// ## Example
///
/// ```
/// use deck_legality::cards::{Card, Investigator};
/// use deck_legality::rules::DeckOption;
/// use deck_legality::validation::{DeckValidator, ProblemKind};
///
/// let investigator = Investigator::new(Card::new("01001a", "Spider-Man", "hero", "hero"))
///     .with_deck_size(2)
///     .with_option(DeckOption::new().with_factions(["basic"]));
/// let validator = DeckValidator::new(&investigator, None).unwrap();
///
/// let energy = Card::new("01088", "Energy", "resource", "basic").with_deck_limit(3);
/// assert!(validator.problem(&[energy.clone(), energy.clone()]).is_none());
///
/// let problem = validator.problem(&[energy]).unwrap();
/// assert_eq!(problem.reason, ProblemKind::TooFewCards);
/// ```
#[derive(Clone, Debug)]
pub struct DeckValidator<'a> {
    investigator: &'a Investigator,
    meta: Option<DeckMeta>,
    config: ValidatorConfig,
    rules: RuleSet,
}

impl<'a> DeckValidator<'a> {
    /// Create a validator with the default configuration.
    pub fn new(investigator: &'a Investigator, meta: Option<DeckMeta>) -> Result<Self, LoadError> {
        Self::with_config(investigator, meta, ValidatorConfig::default())
    }

    /// Create a validator, compiling the investigator's deck options.
    pub fn with_config(
        investigator: &'a Investigator,
        meta: Option<DeckMeta>,
        config: ValidatorConfig,
    ) -> Result<Self, LoadError> {
        let rules = RuleSet::compile(&investigator.deck_options)?;
        let faction_selected = meta.as_ref().and_then(|m| m.faction_selected.as_deref());
        debug!(
            investigator = %investigator.code(),
            options = rules.len(),
            ?faction_selected,
            "built deck validator"
        );
        Ok(Self {
            investigator,
            meta,
            config,
            rules,
        })
    }

    #[must_use]
    pub fn investigator(&self) -> &'a Investigator {
        self.investigator
    }

    #[must_use]
    pub fn meta(&self) -> Option<&DeckMeta> {
        self.meta.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The investigator's compiled options.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Required draw-deck size.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.investigator.deck_size(self.config.default_deck_size)
    }

    /// Cards that take a draw-deck slot.
    pub fn draw_deck<'c, C: Borrow<Card>>(&self, cards: &'c [C]) -> Vec<&'c Card> {
        checks::draw_deck(cards).collect()
    }

    #[must_use]
    pub fn draw_deck_size<C: Borrow<Card>>(&self, cards: &[C]) -> usize {
        checks::draw_deck(cards).count()
    }

    /// Signature requirements the list does not satisfy.
    pub fn missing_requirements<C: Borrow<Card>>(&self, cards: &[C]) -> Vec<&'a CardRequirement> {
        checks::missing_requirements(self.investigator.requirements(), cards)
    }

    /// Copies per card name, with the deck limit that applies.
    pub fn copies_and_deck_limit<C: Borrow<Card>>(&self, cards: &[C]) -> FxHashMap<String, CopyCount> {
        checks::copies_and_deck_limit(cards, &self.config.unknown_card_name)
    }

    /// Cards no option admits, in input order.
    pub fn invalid_cards<'c, C: Borrow<Card>>(&self, cards: &'c [C]) -> Vec<&'c Card> {
        let mut tally = RuleTally::for_options(self.rules.len());
        self.count_cards(cards, &mut tally)
    }

    /// The option tally produced by a counting pass over `cards`.
    pub fn tally<C: Borrow<Card>>(&self, cards: &[C]) -> RuleTally {
        let mut tally = RuleTally::for_options(self.rules.len());
        self.count_cards(cards, &mut tally);
        tally
    }

    /// Filter a card pool down to cards that could legally be added.
    pub fn includable_cards<'c, I>(&self, cards: I) -> Vec<&'c Card>
    where
        I: IntoIterator<Item = &'c Card>,
    {
        cards
            .into_iter()
            .filter(|card| self.can_include_card(card))
            .collect()
    }

    /// Run every card through counting-mode admission; return the rejects.
    fn count_cards<'c, C: Borrow<Card>>(&self, cards: &'c [C], tally: &mut RuleTally) -> Vec<&'c Card> {
        let mut invalid = Vec::new();
        for card in cards {
            let card: &Card = card.borrow();
            if !self.admit(card, Mode::Counting(&mut *tally)) {
                invalid.push(card);
            }
        }
        invalid
    }

    /// Error keys of every option whose `limit` or `atleast` the tally
    /// violates, or `None` when all hold.
    #[must_use]
    pub fn option_violations(&self, tally: &RuleTally) -> Option<Vec<String>> {
        let mut violated = false;
        let mut errors = Vec::new();

        for (index, option) in self.rules.iter().enumerate() {
            let Some(slot) = tally.get(index) else {
                continue;
            };
            if let Some(limit) = option.effective_limit() {
                if slot.limit > limit {
                    violated = true;
                    errors.extend(option.error.iter().cloned());
                }
            }
            if let Some(atleast) = option.effective_atleast() {
                if slot.factions_reaching(atleast.min) < atleast.factions as usize {
                    violated = true;
                    errors.extend(option.error.iter().cloned());
                }
            }
        }

        violated.then_some(errors)
    }

    /// Validate a candidate list. `None` means the deck is legal.
    ///
    /// Duplicate entries are physical copies; order does not matter.
    pub fn problem<C: Borrow<Card>>(&self, cards: &[C]) -> Option<Problem> {
        let problem = self.find_problem(cards);
        match &problem {
            Some(problem) => debug!(
                investigator = %self.investigator.code(),
                reason = %problem.reason,
                problems = ?problem.problems,
                "deck is illegal"
            ),
            None => debug!(investigator = %self.investigator.code(), "deck is legal"),
        }
        problem
    }

    /// Shorthand for `problem(cards).is_none()`.
    pub fn is_valid<C: Borrow<Card>>(&self, cards: &[C]) -> bool {
        self.problem(cards).is_none()
    }

    fn find_problem<C: Borrow<Card>>(&self, cards: &[C]) -> Option<Problem> {
        if !self.missing_requirements(cards).is_empty() {
            return Some(Problem::new(ProblemKind::Investigator));
        }

        if self
            .copies_and_deck_limit(cards)
            .values()
            .any(CopyCount::exceeds_limit)
        {
            return Some(Problem::new(ProblemKind::TooManyCopies));
        }

        let mut tally = RuleTally::for_options(self.rules.len());
        if !self.count_cards(cards, &mut tally).is_empty() {
            return Some(Problem::new(ProblemKind::InvalidCards));
        }

        if let Some(problems) = self.option_violations(&tally) {
            return Some(Problem {
                reason: ProblemKind::Investigator,
                problems,
            });
        }

        match self.draw_deck_size(cards).cmp(&self.deck_size()) {
            Ordering::Less => Some(Problem::new(ProblemKind::TooFewCards)),
            Ordering::Greater => Some(Problem::new(ProblemKind::TooManyCards)),
            Ordering::Equal => None,
        }
    }
}
