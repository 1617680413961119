//! Catalog configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CATALOG_PATH, DEFAULT_CATALOG_SOURCE_PATH};

/// Catalog file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Serialized catalog read by the matcher
    pub path: PathBuf,

    /// `name -> description` mapping consumed by the catalog builder
    pub source_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
            source_path: PathBuf::from(DEFAULT_CATALOG_SOURCE_PATH),
        }
    }
}
