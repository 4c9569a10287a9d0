//! Error types for the collate crate.
//!
//! Sorting, comparison and search never fail. Errors only come from the
//! parsing edges: kind names, field modifiers and raw JSON input.

use thiserror::Error;

/// Errors returned by the fallible parsing helpers.
#[derive(Debug, Error)]
pub enum CollateError {
    /// A kind name that is not part of the closed kind set.
    #[error("unknown value kind '{0}'")]
    UnknownKind(String),

    /// A search field modifier other than `exact`.
    #[error("unknown field modifier '{modifier}' in '{key}'")]
    UnknownModifier { key: String, modifier: String },

    /// Record text that is not valid JSON.
    #[error("invalid record json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for collate operations.
pub type Result<T> = std::result::Result<T, CollateError>;
