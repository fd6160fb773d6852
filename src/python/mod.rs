//! Python bindings for the deck-legality engine.
//!
//! Cards, investigators, and metas cross the boundary as JSON strings in
//! the card database's shape.
//!
//! # Quick Start
//!
//! ```python
//! import deck_legality as dl
//!
//! validator = dl.DeckValidator(investigator_json, meta_json='{"faction_selected": "justice"}')
//!
//! problem = validator.problem(cards_json)
//! if problem is not None:
//!     print(problem.reason, problem.problems)
//!
//! validator.can_include_card(card_json)
//! ```

use pyo3::prelude::*;

mod py_validation;

pub use py_validation::*;

/// deck_legality: investigator deck validation.
#[pymodule]
fn deck_legality(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDeckValidator>()?;
    m.add_class::<PyProblem>()?;
    Ok(())
}
