//! Catalog Loader
//!
//! Reads the serialized catalog and keeps it for the rest of the process.
//! Loads are memoized by path; a failed load is not cached, so a later call
//! retries once the file has been fixed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use fanmatch_domain::Catalog;
use fanmatch_domain::error::{Error, Result};
use tracing::{error, info, warn};

/// Memoizing catalog reader
#[derive(Debug, Default)]
pub struct CatalogLoader {
    cache: DashMap<PathBuf, Arc<Catalog>>,
}

impl CatalogLoader {
    /// Create a loader with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog at `path`, reusing an earlier successful load
    ///
    /// Returns `None` when the file is missing, unreadable or not a valid
    /// catalog. Callers treat `None` as "matching unavailable".
    pub fn load(&self, path: &Path) -> Option<Arc<Catalog>> {
        if let Some(catalog) = self.cache.get(path) {
            return Some(Arc::clone(catalog.value()));
        }

        // First load for this path runs under the shard lock
        let loaded = self
            .cache
            .entry(path.to_path_buf())
            .or_try_insert_with(|| read_catalog(path).map(Arc::new));

        match loaded {
            Ok(catalog) => Some(Arc::clone(catalog.value())),
            Err(Error::NotFound { resource }) => {
                warn!(path = %resource, "Catalog file not found");
                None
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to load catalog");
                None
            }
        }
    }

    /// Drop the cached catalog for `path`
    pub fn invalidate(&self, path: &Path) -> bool {
        self.cache.remove(path).is_some()
    }

    /// Whether a catalog for `path` is cached
    pub fn is_cached(&self, path: &Path) -> bool {
        self.cache.contains_key(path)
    }
}

/// Read and parse a catalog file without caching
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::not_found(path.display().to_string()),
        _ => Error::Io {
            message: format!("Failed to read catalog {}", path.display()),
            source: Some(Box::new(e)),
        },
    })?;

    let catalog: Catalog = serde_json::from_str(&content).map_err(|e| {
        Error::catalog(format!("Invalid catalog file {}: {e}", path.display()))
    })?;

    // Lookups by name resolve to the first entry
    for name in catalog.duplicate_names() {
        warn!(path = %path.display(), name = %name, "Duplicate catalog entry name");
    }

    info!(
        path = %path.display(),
        entries = catalog.len(),
        dimensions = catalog.dimensions().unwrap_or(0),
        "Catalog loaded"
    );
    Ok(catalog)
}
