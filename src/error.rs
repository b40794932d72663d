//! Error types for scenario extraction.

use thiserror::Error;

/// Errors produced while extracting a scenario from an edit-history document.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The document is not well-formed XML
    #[error("document parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// An element that records a source position has no such attribute
    #[error("element <{element}> has no {attribute:?} attribute")]
    MissingPosition {
        element: String,
        attribute: &'static str,
    },

    /// A position attribute does not hold two `:`-separated integers
    #[error("malformed position {value:?}: expected \"line:column\"")]
    MalformedPosition { value: String },

    /// The requested version does not exist in the document
    #[error("version {requested:?} not found; available versions: {available:?}")]
    VersionNotFound {
        requested: String,
        available: Vec<String>,
    },
}

/// Result type for scenario extraction.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

impl ScenarioError {
    /// Create a missing-position error
    pub fn missing_position(element: impl Into<String>, attribute: &'static str) -> Self {
        ScenarioError::MissingPosition {
            element: element.into(),
            attribute,
        }
    }

    /// Create a malformed-position error
    pub fn malformed_position(value: impl Into<String>) -> Self {
        ScenarioError::MalformedPosition {
            value: value.into(),
        }
    }
}
