//! Error types for antar-nav.
//!
//! Only ambient concerns (configuration files, survey-data payloads) use
//! this type. Algorithmic conditions — too few matched networks, a
//! degenerate triplet, an edge pointing at a missing node — are expected
//! and absorbed locally as `Option`/no-fix values, never surfaced here.

use thiserror::Error;

/// antar-nav error type
#[derive(Error, Debug)]
pub enum NavError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Survey data error: {0}")]
    Survey(String),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for NavError {
    fn from(e: serde_json::Error) -> Self {
        NavError::Survey(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
