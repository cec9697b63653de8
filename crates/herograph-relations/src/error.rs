//! Error types for relationship computation

use herograph_catalog::CatalogError;
use thiserror::Error;

/// Result type alias for relationship operations.
pub type Result<T> = std::result::Result<T, RelationsError>;

/// Errors that can occur while computing relationships
#[derive(Error, Debug)]
pub enum RelationsError {
    /// Caller passed a value outside the accepted domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An intersection was requested over zero characters
    #[error("At least one character name is required")]
    EmptyNameSet,

    /// The same name appears more than once in a pair-generation input
    #[error("Duplicate character name(s) in input: {}", .0.join(", "))]
    DuplicateNames(Vec<String>),

    /// Catalog lookup or validation failure
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// CSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing an export
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelationsError {
    /// Whether this error is caused by caller input rather than by the environment
    pub fn is_invalid_input(&self) -> bool {
        match self {
            RelationsError::InvalidInput(_)
            | RelationsError::EmptyNameSet
            | RelationsError::DuplicateNames(_) => true,
            RelationsError::Catalog(e) => e.is_invalid_input(),
            _ => false,
        }
    }
}
