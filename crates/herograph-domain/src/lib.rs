//! Herograph Domain Layer
//!
//! This crate contains the domain model for Herograph. It has no external
//! dependencies and defines the value types and trait interfaces that the
//! catalog, relations, API and CLI crates depend upon.
//!
//! ## Key Concepts
//!
//! - **Character**: a named entity with membership in four sub-entity collections
//! - **Entity type**: one of comics, series, stories or events
//! - **Entity reference**: an opaque `resourceURI` shared verbatim across characters
//! - **Relationship row**: the number of sub-entities of one type two characters share
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and set logic only
//! - Loading and fetching live in other crates, behind [`traits::CharacterSource`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod character;
pub mod entity_type;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use character::{Character, EntityGroup, EntityRef};
pub use entity_type::EntityType;
pub use relationship::RelationshipRow;
