//! Option matching.
//!
//! `RuleSet` owns an investigator's deck options together with their
//! compiled text patterns and answers one question: which option, if any,
//! claims a given card. Options are scanned in order and the first one
//! whose populated axes all match wins.

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::cards::Card;
use crate::core::LoadError;

use super::meta::DeckMeta;
use super::option::DeckOption;

/// A deck option with its text patterns compiled.
#[derive(Clone, Debug)]
pub struct CompiledOption {
    option: DeckOption,
    patterns: Vec<Regex>,
}

impl CompiledOption {
    /// Compile the option's text patterns, case-insensitively.
    ///
    /// `index` is only used to locate the option in error reports.
    pub fn compile(index: usize, option: &DeckOption) -> Result<Self, LoadError> {
        let patterns = option
            .text
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| LoadError::InvalidPattern {
                        index,
                        pattern: pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            option: option.clone(),
            patterns,
        })
    }

    /// The underlying option.
    #[must_use]
    pub fn option(&self) -> &DeckOption {
        &self.option
    }

    /// Do all of the option's populated axes match the card?
    #[must_use]
    pub fn matches(&self, card: &Card, meta: Option<&DeckMeta>) -> bool {
        let option = &self.option;
        any_faction(card, &option.faction)
            && any_faction(card, option.effective_factions(meta))
            && any_type(card, &option.type_code)
            && any_trait(card, &option.traits)
            && any_uses(card, &option.uses)
            && any_pattern(card, &self.patterns)
    }
}

fn any_faction(card: &Card, factions: &[String]) -> bool {
    factions.is_empty() || factions.iter().any(|f| card.has_faction(f))
}

fn any_type(card: &Card, types: &[String]) -> bool {
    types.is_empty() || types.iter().any(|t| *t == card.type_code)
}

fn any_trait(card: &Card, traits: &[String]) -> bool {
    if traits.is_empty() {
        return true;
    }
    let Some(normalized) = card.normalized_traits() else {
        return false;
    };
    let normalized = normalized.to_uppercase();
    traits
        .iter()
        .any(|t| normalized.contains(&format!("{}#", t.to_uppercase())))
}

fn any_uses(card: &Card, uses: &[String]) -> bool {
    if uses.is_empty() {
        return true;
    }
    let Some(text) = card.real_text.as_deref() else {
        return false;
    };
    let text = text.to_uppercase();
    uses.iter()
        .any(|u| text.contains(&format!("{}).", u.to_uppercase())))
}

fn any_pattern(card: &Card, patterns: &[Regex]) -> bool {
    if patterns.is_empty() {
        return true;
    }
    let Some(text) = card.real_text.as_deref() else {
        return false;
    };
    patterns.iter().any(|p| p.is_match(text))
}

/// An investigator's ordered, compiled deck options.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    options: Vec<CompiledOption>,
}

impl RuleSet {
    /// Compile every option, keeping list order.
    pub fn compile(options: &[DeckOption]) -> Result<Self, LoadError> {
        let options = options
            .iter()
            .enumerate()
            .map(|(index, option)| CompiledOption::compile(index, option))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { options })
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when the investigator has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DeckOption> {
        self.options.get(index).map(CompiledOption::option)
    }

    /// Iterate over options in order.
    pub fn iter(&self) -> impl Iterator<Item = &DeckOption> {
        self.options.iter().map(CompiledOption::option)
    }

    /// The first option claiming `card`, with its index.
    #[must_use]
    pub fn first_match(&self, card: &Card, meta: Option<&DeckMeta>) -> Option<(usize, &DeckOption)> {
        let found = self
            .options
            .iter()
            .enumerate()
            .find(|(_, o)| o.matches(card, meta))
            .map(|(index, o)| (index, o.option()));
        let index = found.map(|(index, _)| index);
        trace!(card = %card.code, option = ?index, "option scan");
        found
    }
}
