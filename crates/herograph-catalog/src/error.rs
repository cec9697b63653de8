//! Error types for catalog operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading or querying the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A single-character lookup missed
    #[error("Character not found: {0}")]
    NotFound(String),

    /// One or more requested names are absent from the catalog
    #[error("Unknown character name(s): {}", .0.join(", "))]
    UnknownCharacters(Vec<String>),

    /// Two records share a name
    #[error("Duplicate character name in catalog: {0}")]
    DuplicateCharacter(String),

    /// A record failed boundary validation
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the record in the source array
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Catalog file does not exist
    #[error("Could not find catalog file: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Whether this error is caused by caller input rather than by the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CatalogError::UnknownCharacters(_)
                | CatalogError::DuplicateCharacter(_)
                | CatalogError::InvalidRecord { .. }
        )
    }
}

impl From<std::convert::Infallible> for CatalogError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
