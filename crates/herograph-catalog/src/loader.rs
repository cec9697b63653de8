//! JSON catalog file loading
//!
//! A catalog file is a JSON array of character objects, exactly as the remote
//! API returns them in `data.results`.

use crate::error::{CatalogError, Result};
use crate::records::{character_from_dto, CharacterRecordDto};
use herograph_domain::traits::CharacterSource;
use herograph_domain::Character;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Character source backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CharacterSource for JsonFileSource {
    type Error = CatalogError;

    fn load(&self) -> Result<Vec<Character>> {
        load_records(&self.path)
    }
}

/// Read the raw wire records from a catalog file
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<CharacterRecordDto>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(CatalogError::FileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let records: Vec<CharacterRecordDto> = serde_json::from_str(&contents)?;
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load and validate the domain records from a catalog file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Character>> {
    into_characters(read_records(path)?)
}

/// Parse and validate domain records from a JSON array string
pub fn parse_records(json: &str) -> Result<Vec<Character>> {
    let records: Vec<CharacterRecordDto> = serde_json::from_str(json)?;
    into_characters(records)
}

/// Validate wire records into domain records, failing on the first bad one
pub fn into_characters(records: Vec<CharacterRecordDto>) -> Result<Vec<Character>> {
    records
        .iter()
        .enumerate()
        .map(|(index, dto)| {
            character_from_dto(dto).map_err(|reason| CatalogError::InvalidRecord { index, reason })
        })
        .collect()
}

/// Write wire records to a catalog file as a pretty-printed JSON array
pub fn save_records<P: AsRef<Path>>(path: P, records: &[CharacterRecordDto]) -> Result<()> {
    let path = path.as_ref();

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = serde_json::to_string_pretty(records)?;
    fs::write(path, contents)?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
