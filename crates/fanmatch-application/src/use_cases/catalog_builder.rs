//! Reference Catalog Builder
//!
//! Offline job that embeds every description of a `name -> description`
//! mapping and writes the resulting catalog file. Per-entry problems are
//! logged and the entry skipped; failing to read the source or write the
//! output aborts the run.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use fanmatch_domain::error::{Error, Result};
use fanmatch_domain::{Catalog, CatalogEntry};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::ports::providers::EmbeddingProvider;

/// Entry that was left out of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Name from the source mapping
    pub name: String,
    /// Why it was skipped
    pub reason: String,
}

/// Summary of one build run
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Where the catalog was written
    pub output_path: PathBuf,
    /// Number of entries written
    pub written: usize,
    /// Entries that were skipped, in source order
    pub skipped: Vec<SkippedEntry>,
    /// Dimensionality of the written embeddings
    pub dimensions: Option<usize>,
}

/// Builds reference catalogs with a given embedding provider
pub struct CatalogBuilder {
    provider: Arc<dyn EmbeddingProvider>,
}

impl CatalogBuilder {
    /// Create a builder that embeds with `provider`
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    /// Read `source_path`, embed every description and write `output_path`
    pub fn build(&self, source_path: &Path, output_path: &Path) -> Result<BuildReport> {
        let started = Instant::now();
        let source = read_source(source_path)?;
        info!(
            source = %source_path.display(),
            entries = source.len(),
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
            "Building reference catalog"
        );

        let (catalog, skipped) = self.build_entries(&source);
        write_catalog(&catalog, output_path)?;

        info!(
            output = %output_path.display(),
            written = catalog.len(),
            skipped = skipped.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "Reference catalog written"
        );

        Ok(BuildReport {
            output_path: output_path.to_path_buf(),
            written: catalog.len(),
            dimensions: catalog.dimensions(),
            skipped,
        })
    }

    /// Embed the entries of a source mapping, in mapping order
    pub fn build_entries(&self, source: &Map<String, Value>) -> (Catalog, Vec<SkippedEntry>) {
        let mut entries: Vec<CatalogEntry> = Vec::with_capacity(source.len());
        let mut skipped = Vec::new();
        let mut dimensions: Option<usize> = None;

        for (name, value) in source {
            let description = match value.as_str() {
                Some(text) if !text.is_empty() => text,
                _ => {
                    warn!(name = %name, "Skipping entry without a text description");
                    skipped.push(skip(name, "description is not a non-empty string"));
                    continue;
                }
            };

            let embedding = match self.provider.embed(description) {
                Ok(embedding) if !embedding.is_empty() => embedding,
                Ok(_) => {
                    warn!(name = %name, "Skipping entry: provider returned an empty vector");
                    skipped.push(skip(name, "empty embedding"));
                    continue;
                }
                Err(e) => {
                    warn!(name = %name, error = %e, "Skipping entry: embedding failed");
                    skipped.push(skip(name, &e.to_string()));
                    continue;
                }
            };

            let expected = *dimensions.get_or_insert(embedding.dimensions);
            if embedding.dimensions != expected {
                warn!(
                    name = %name,
                    expected,
                    found = embedding.dimensions,
                    "Skipping entry: embedding dimensionality differs from the catalog"
                );
                skipped.push(skip(name, "dimension mismatch"));
                continue;
            }

            debug!(name = %name, dimensions = expected, "Embedded catalog entry");
            entries.push(CatalogEntry::new(
                name.clone(),
                description,
                embedding.into_vector(),
            ));
        }

        (Catalog::new(entries), skipped)
    }
}

fn skip(name: &str, reason: &str) -> SkippedEntry {
    SkippedEntry {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

fn read_source(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path).map_err(|e| Error::Io {
        message: format!("Failed to read catalog source {}", path.display()),
        source: Some(Box::new(e)),
    })?;

    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::catalog(format!(
            "Catalog source {} must be a JSON object of name -> description, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

fn write_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::Io {
            message: format!("Failed to create directory {}", parent.display()),
            source: Some(Box::new(e)),
        })?;
    }

    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json).map_err(|e| Error::Io {
        message: format!("Failed to write catalog {}", path.display()),
        source: Some(Box::new(e)),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
