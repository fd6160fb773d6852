//! Storage filter expressions for deck options.
//!
//! The card browser pre-filters the card database with a boolean
//! expression over card columns, then re-checks cards in memory. The
//! expression built here mirrors `CompiledOption::matches` axis for axis.
//!
//! The storage layer cannot run regexes. When every text pattern is one of
//! the two "heals horror" patterns the text axis maps to the precomputed
//! `heals_horror` column. Otherwise the text axis is left out: a positive
//! option then selects a superset of the in-memory result, and a negated
//! option selects everything.

use super::meta::DeckMeta;
use super::option::DeckOption;

/// Text patterns answered by the `heals_horror` column.
pub const HEALS_HORROR_PATTERNS: [&str; 2] = [
    r"[Hh]eals? (\d+ damage (and|or) )?(\d+ )?horror",
    r"[Hh]eals? (that much )?(\d+ damage (and|or) )?(\d+ )?horror",
];

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn any_of<'a, I, F>(values: I, clause: F) -> String
where
    I: IntoIterator<Item = &'a String>,
    F: Fn(&str) -> String,
{
    let parts: Vec<String> = values.into_iter().map(|v| clause(v.as_str())).collect();
    format!("({})", parts.join(" OR "))
}

fn faction_clause(faction: &str) -> String {
    let faction = quote(faction);
    format!("faction_code == {faction} OR faction2_code == {faction}")
}

impl DeckOption {
    /// Build the storage filter expression for this option.
    ///
    /// `meta` narrows `faction_select` exactly as in-memory matching does.
    /// An option with no predicate yields `TRUEPREDICATE` (or
    /// `FALSEPREDICATE` when negated). A negated option whose text axis
    /// cannot be expressed yields `TRUEPREDICATE`.
    ///
    /// ```
    /// use deck_legality::rules::DeckOption;
    ///
    /// let option = DeckOption::new().with_factions(["justice"]).with_types(["ally"]);
    /// assert_eq!(
    ///     option.to_query(None),
    ///     "((faction_code == 'justice' OR faction2_code == 'justice') AND (type_code == 'ally'))"
    /// );
    /// ```
    #[must_use]
    pub fn to_query(&self, meta: Option<&DeckMeta>) -> String {
        let mut clauses = Vec::new();

        if !self.faction.is_empty() {
            clauses.push(any_of(&self.faction, faction_clause));
        }
        if !self.faction_select.is_empty() {
            clauses.push(any_of(self.effective_factions(meta), faction_clause));
        }
        if !self.uses.is_empty() {
            clauses.push(any_of(&self.uses, |u| format!("uses == {}", quote(u))));
        }
        if !self.text.is_empty() {
            let heals_horror = self
                .text
                .iter()
                .all(|pattern| HEALS_HORROR_PATTERNS.contains(&pattern.as_str()));
            if heals_horror {
                clauses.push("(heals_horror == true)".to_string());
            } else if self.not {
                return "TRUEPREDICATE".to_string();
            }
        }
        if !self.traits.is_empty() {
            clauses.push(any_of(&self.traits, |t| {
                format!(
                    "real_traits_normalized CONTAINS[c] {}",
                    quote(&format!("{}#", t.to_lowercase()))
                )
            }));
        }
        if !self.type_code.is_empty() {
            clauses.push(any_of(&self.type_code, |t| format!("type_code == {}", quote(t))));
        }

        match (clauses.is_empty(), self.not) {
            (true, false) => "TRUEPREDICATE".to_string(),
            (true, true) => "FALSEPREDICATE".to_string(),
            (false, false) => format!("({})", clauses.join(" AND ")),
            (false, true) => format!("NOT ({})", clauses.join(" AND ")),
        }
    }
}
