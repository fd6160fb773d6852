//! Core types shared by every module: configuration and load errors.

pub mod config;
pub mod error;

pub use config::{ValidatorConfig, DEFAULT_DECK_SIZE, UNKNOWN_CARD_NAME};
pub use error::LoadError;
