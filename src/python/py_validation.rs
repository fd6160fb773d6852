//! Validator bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{Card, Investigator};
use crate::core::{LoadError, ValidatorConfig};
use crate::rules::{DeckMeta, RuleSet};
use crate::validation::{DeckValidator, Problem};

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{}", err))
}

fn parse<T: serde::de::DeserializeOwned>(json: &str) -> PyResult<T> {
    serde_json::from_str(json)
        .map_err(LoadError::from)
        .map_err(value_error)
}

/// Python wrapper for Problem.
#[pyclass(name = "Problem")]
#[derive(Clone, Debug)]
pub struct PyProblem(pub Problem);

#[pymethods]
impl PyProblem {
    /// Reason code (`investigator`, `too_many_copies`, ...).
    #[getter]
    fn reason(&self) -> &'static str {
        self.0.reason.as_str()
    }

    /// Error keys of violated deck options.
    #[getter]
    fn problems(&self) -> Vec<String> {
        self.0.problems.clone()
    }

    fn __repr__(&self) -> String {
        format!("Problem(reason={}, problems={:?})", self.0.reason, self.0.problems)
    }
}

/// Python wrapper for DeckValidator.
///
/// Owns its investigator; a borrowing validator is built per call.
#[pyclass(name = "DeckValidator")]
pub struct PyDeckValidator {
    investigator: Investigator,
    meta: Option<DeckMeta>,
    config: ValidatorConfig,
}

impl PyDeckValidator {
    fn validator(&self) -> PyResult<DeckValidator<'_>> {
        DeckValidator::with_config(&self.investigator, self.meta.clone(), self.config.clone())
            .map_err(value_error)
    }
}

#[pymethods]
impl PyDeckValidator {
    /// Create a validator.
    ///
    /// # Arguments
    /// - investigator_json: Investigator record
    /// - meta_json: Optional deck meta (`{"faction_selected": ...}`)
    /// - config_json: Optional validator configuration
    #[new]
    #[pyo3(signature = (investigator_json, meta_json = None, config_json = None))]
    fn new(
        investigator_json: &str,
        meta_json: Option<&str>,
        config_json: Option<&str>,
    ) -> PyResult<Self> {
        let investigator: Investigator = parse(investigator_json)?;
        let meta = meta_json.map(parse::<DeckMeta>).transpose()?;
        let config = match config_json {
            Some(json) => ValidatorConfig::from_json(json).map_err(value_error)?,
            None => ValidatorConfig::default(),
        };
        // Surface bad text patterns at construction rather than per call.
        RuleSet::compile(&investigator.deck_options).map_err(value_error)?;
        Ok(Self {
            investigator,
            meta,
            config,
        })
    }

    /// Investigator code.
    #[getter]
    fn investigator_code(&self) -> String {
        self.investigator.code().to_string()
    }

    /// Validate a JSON array of cards. Returns None for a legal deck.
    fn problem(&self, cards_json: &str) -> PyResult<Option<PyProblem>> {
        let cards: Vec<Card> = parse(cards_json)?;
        Ok(self.validator()?.problem(&cards).map(PyProblem))
    }

    /// Would this card be a legal addition?
    fn can_include_card(&self, card_json: &str) -> PyResult<bool> {
        let card: Card = parse(card_json)?;
        Ok(self.validator()?.can_include_card(&card))
    }

    /// Storage filter expression for each deck option, in order.
    fn option_queries(&self) -> Vec<String> {
        self.investigator
            .deck_options
            .iter()
            .map(|option| option.to_query(self.meta.as_ref()))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("DeckValidator(investigator={})", self.investigator.code())
    }
}
