//! Trait definitions for external interactions
//!
//! These traits define the boundary between the relationship engine and the
//! collaborators that produce character records.

use crate::Character;

/// Anything that can hand over a complete collection of character records
///
/// Implemented by the file loader (herograph-catalog) and by in-memory
/// fixtures. Remote sources are async and are resolved into a `Vec` before
/// they reach this trait.
pub trait CharacterSource {
    /// Error type for load operations
    type Error;

    /// Load every record, in source order
    fn load(&self) -> Result<Vec<Character>, Self::Error>;
}

impl CharacterSource for Vec<Character> {
    type Error = std::convert::Infallible;

    fn load(&self) -> Result<Vec<Character>, Self::Error> {
        Ok(self.clone())
    }
}
