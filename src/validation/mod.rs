//! Deck validation.
//!
//! ## Key Types
//!
//! - `DeckValidator`: Investigator-bound validator producing verdicts
//! - `Mode`: Counting vs. probe admission
//! - `Problem` / `ProblemKind`: Illegal-deck report
//! - `CopyCount`: Per-name copy totals
//!
//! Validation has no failure path: an illegal deck is a `Problem`, a
//! legal one is `None`.

pub mod admission;
pub mod checks;
pub mod problem;
pub mod validator;

pub use admission::Mode;
pub use checks::CopyCount;
pub use problem::{Problem, ProblemKind};
pub use validator::DeckValidator;
