//! Conversions between parsed config documents and module values
//!
//! Configuration loaders hand over JSON or YAML documents; these conversions
//! let such documents serve as module values and argument lists.

mod json;
mod yaml;

use thiserror::Error;

use crate::types::ValueKind;

/// Errors that can occur while converting documents to or from values
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Unsupported mapping key: {0}")]
    UnsupportedKey(String),

    #[error("Cannot represent a {kind} value in a document")]
    Unrepresentable { kind: ValueKind },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConversionResult<T> = Result<T, ConversionError>;
