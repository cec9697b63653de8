//! Herograph Remote API Layer
//!
//! Async client for the remote character catalog API.
//!
//! # Architecture
//!
//! - `ApiConfig`: endpoint, credentials and page size
//! - `MarvelApiClient`: count queries and sequential offset pagination
//! - Records come back in wire form ([`CharacterRecordDto`]) so they can be
//!   saved verbatim or validated into a catalog
//!
//! # Examples
//!
//! ```no_run
//! use herograph_api::{ApiConfig, MarvelApiClient};
//! use herograph_catalog::{loader::into_characters, CharacterCatalog};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::from_file("config/marvel.json")?;
//! let client = MarvelApiClient::new(config)?;
//!
//! let records = client.fetch_catalog().await?;
//! let catalog = CharacterCatalog::new(into_characters(records)?)?;
//! println!("{} characters", catalog.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`CharacterRecordDto`]: herograph_catalog::CharacterRecordDto

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{page_count, ApiResource, MarvelApiClient};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
