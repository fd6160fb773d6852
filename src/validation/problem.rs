//! Validation verdicts.

use serde::{Deserialize, Serialize};

/// Why a deck is illegal. The first detected class wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// Signature cards missing, or an option's `limit`/`atleast` violated.
    Investigator,
    /// More copies of a card than its deck limit.
    TooManyCopies,
    /// At least one card no option admits.
    InvalidCards,
    /// Draw deck below the required size.
    TooFewCards,
    /// Draw deck above the required size.
    TooManyCards,
}

impl ProblemKind {
    /// Reason code as reported to the UI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProblemKind::Investigator => "investigator",
            ProblemKind::TooManyCopies => "too_many_copies",
            ProblemKind::InvalidCards => "invalid_cards",
            ProblemKind::TooFewCards => "too_few_cards",
            ProblemKind::TooManyCards => "too_many_cards",
        }
    }
}

impl std::fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An illegal-deck report.
///
/// `problems` holds the `error` keys of every violated option, in option
/// order. It is empty for reasons that carry no option message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub reason: ProblemKind,
    pub problems: Vec<String>,
}

impl Problem {
    /// A problem with no option messages.
    #[must_use]
    pub fn new(reason: ProblemKind) -> Self {
        Self {
            reason,
            problems: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes() {
        assert_eq!(ProblemKind::Investigator.to_string(), "investigator");
        assert_eq!(ProblemKind::TooManyCopies.as_str(), "too_many_copies");
        assert_eq!(ProblemKind::TooFewCards.as_str(), "too_few_cards");
    }

    #[test]
    fn test_problem_json() {
        let problem = Problem {
            reason: ProblemKind::InvalidCards,
            problems: vec!["too_many_events".into()],
        };
        let json = serde_json::to_string(&problem).unwrap();
        assert_eq!(json, r#"{"reason":"invalid_cards","problems":["too_many_events"]}"#);
    }
}
