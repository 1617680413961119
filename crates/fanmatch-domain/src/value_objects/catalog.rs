//! Reference catalog value objects
//!
//! The serialized catalog is an array of `{name, text, embedding}` objects.
//! It carries no version field; a format change means regenerating the
//! whole file.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    AFFINITY_HIGH_THRESHOLD, AFFINITY_MEDIUM_THRESHOLD, DESCRIPTION_UNAVAILABLE,
};

/// One precomputed reference vector
///
/// Created once by the offline catalog builder and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Entity name, unique within a catalog
    pub name: String,
    /// Original description the embedding was computed from
    #[serde(rename = "text", default)]
    pub description: String,
    /// Embedding of the description; empty when the entry lacks one
    #[serde(default)]
    pub embedding: Vec<f32>,
}

impl CatalogEntry {
    /// Create a catalog entry
    pub fn new(name: impl Into<String>, description: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            embedding,
        }
    }

    /// Whether the entry carries an embedding
    pub fn has_embedding(&self) -> bool {
        !self.embedding.is_empty()
    }
}

/// Ordered, read-only collection of catalog entries
///
/// Serializes transparently as the bare array of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create a catalog from entries, keeping their order
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Names that occur more than once, each reported at its first repeat
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &self.entries {
            let name = entry.name.as_str();
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }

    /// Dimensionality of the first entry that has an embedding
    pub fn dimensions(&self) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.has_embedding())
            .map(|entry| entry.embedding.len())
    }

    /// Consume the catalog and return its entries
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Self::new(entries)
    }
}

/// Best catalog entry for a query vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Name of the matched entry
    pub name: String,
    /// Cosine similarity in [-1, 1]
    pub score: f64,
    /// Description of the matched entry
    #[serde(rename = "text")]
    pub description: String,
}

impl MatchResult {
    /// Build a result from the winning entry and its score
    pub fn from_entry(entry: &CatalogEntry, score: f64) -> Self {
        let description = if entry.description.trim().is_empty() {
            DESCRIPTION_UNAVAILABLE.to_string()
        } else {
            entry.description.clone()
        };
        Self {
            name: entry.name.clone(),
            score,
            description,
        }
    }

    /// Grade the score for display
    pub fn affinity(&self) -> Affinity {
        Affinity::from_score(self.score)
    }

    /// Score formatted as a percentage with two decimals (e.g. `99.39%`)
    pub fn percent(&self) -> String {
        format!("{:.2}%", self.score * 100.0)
    }
}

/// Coarse grading of a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affinity {
    /// Score above 0.6
    High,
    /// Score above 0.4
    Medium,
    /// Anything else
    Low,
}

impl Affinity {
    /// Grade a similarity score
    pub fn from_score(score: f64) -> Self {
        if score > AFFINITY_HIGH_THRESHOLD {
            Self::High
        } else if score > AFFINITY_MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Flame indicator used by the presentation layer
    pub fn flames(self) -> &'static str {
        match self {
            Self::High => "🔥🔥🔥",
            Self::Medium => "🔥🔥",
            Self::Low => "🔥",
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}
