//! Herograph Relationship Engine
//!
//! Computes how many sub-entities (comics, series, stories or events) any two
//! or any N characters share, and assembles pairwise counts into tables.
//!
//! # Components
//!
//! - [`EntityUrlResolver`]: character + entity type -> set of resource URIs
//! - [`MultiSetIntersector`]: intersection of those sets across N characters
//! - [`RelationshipTableBuilder`]: one row per unordered pair of a name list
//! - [`RelationshipTable`]: the rows plus CSV and JSON export
//!
//! All computation is synchronous and reads a borrowed, immutable
//! [`CharacterCatalog`](herograph_catalog::CharacterCatalog).
//!
//! # Examples
//!
//! ```
//! use herograph_catalog::CharacterCatalog;
//! use herograph_domain::{Character, EntityGroup, EntityType};
//! use herograph_relations::RelationshipTableBuilder;
//!
//! let character = |name: &str, comics: &[&str]| {
//!     Character::new(name)
//!         .unwrap()
//!         .with_group(EntityType::Comics, EntityGroup::from_uris(comics.iter().copied()))
//! };
//! let catalog = CharacterCatalog::new(vec![
//!     character("X", &["c1", "c2", "c3"]),
//!     character("Y", &["c2", "c3", "c4"]),
//!     character("Z", &["c5"]),
//! ]).unwrap();
//!
//! let table = RelationshipTableBuilder::new(&catalog)
//!     .build(&["X", "Y", "Z"], EntityType::Comics)
//!     .unwrap();
//!
//! let counts: Vec<usize> = table.rows().iter().map(|row| row.common_count).collect();
//! assert_eq!(counts, vec![2, 0, 0]);
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod intersector;
pub mod resolver;
pub mod table;

pub use builder::{pair_count, pairs, RelationshipTableBuilder};
pub use error::{RelationsError, Result};
pub use intersector::MultiSetIntersector;
pub use resolver::{parse_entity_type, EntityUrlResolver};
pub use table::RelationshipTable;
