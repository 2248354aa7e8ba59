//! Catalog file loading
//!
//! The CLI feeds the engine from a JSON snapshot on disk. Loading validates
//! the path, parses the document, and runs the ingestion pass so every
//! classification attribute is populated before the engine sees the data.

use crate::catalog::types::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading a catalog snapshot from disk
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file does not exist
    #[error("Catalog file not found: {0}")]
    PathNotFound(PathBuf),

    /// Catalog path points at a directory
    #[error("Catalog path is not a file: {0}")]
    NotAFile(PathBuf),

    /// Reading the file failed
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid catalog document
    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads and ingests a catalog snapshot from a JSON file.
///
/// # Errors
///
/// Returns `CatalogError` when the path is missing, unreadable, or does not
/// parse as a catalog document.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CatalogError::NotAFile(path.to_path_buf()));
    }

    debug!(path = %path.display(), "Reading catalog file");
    let raw = fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&raw)?;
    let catalog = catalog.ingest();

    info!(
        entries = catalog.total_entries(),
        cpus = catalog.cpus.len(),
        motherboards = catalog.motherboards.len(),
        "Catalog loaded"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let result = load_catalog(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CatalogError::PathNotFound(_))));
    }

    #[test]
    fn test_load_directory_fails() {
        let dir = TempDir::new().unwrap();
        let result = load_catalog(dir.path());
        assert!(matches!(result, Err(CatalogError::NotAFile(_))));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_catalog(&path);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_minimal_catalog_runs_ingestion() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{
                "cpus": [
                    {"name": "Ryzen 7 5800X", "price": 1800.0, "socket": "AM4"}
                ]
            }"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.cpus.len(), 1);
        assert_eq!(catalog.cpus[0].integrated_graphics, Some(false));
        assert!(catalog.motherboards.is_empty());
    }
}
