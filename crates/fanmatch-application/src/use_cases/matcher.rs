//! Matcher
//!
//! Nearest catalog entry under cosine similarity. Pure and stateless, so it
//! is safe to call from any number of threads once the catalog is loaded.

use fanmatch_domain::{CatalogEntry, MatchResult};
use thiserror::Error;
use tracing::{error, warn};

/// Reasons a match cannot be computed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The query vector has no values
    #[error("query vector is empty")]
    EmptyQuery,
    /// No catalog entry carries an embedding
    #[error("catalog has no entries with embeddings")]
    EmptyCatalog,
    /// Catalog embeddings do not all share one length
    #[error("catalog embeddings are ragged: entry '{name}' has {found} dimensions, expected {expected}")]
    RaggedEmbeddings {
        /// First offending entry
        name: String,
        /// Dimensionality of the first entry with an embedding
        expected: usize,
        /// Dimensionality of the offending entry
        found: usize,
    },
    /// Query and catalog dimensionality differ
    #[error("query has {query} dimensions but catalog has {catalog}")]
    DimensionMismatch {
        /// Query dimensionality
        query: usize,
        /// Catalog dimensionality
        catalog: usize,
    },
}

/// Compute the norm (magnitude) of a vector
fn compute_norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|x| f64::from(*x) * f64::from(*x))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity of two equal-length vectors
///
/// Defined as 0 when either vector has zero magnitude. The result is clamped
/// to `[-1, 1]` so rounding never pushes it outside the range.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    let norm_a = compute_norm(a);
    let norm_b = compute_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let similarity = dot / (norm_a * norm_b);
    if similarity.is_nan() {
        return 0.0;
    }
    similarity.clamp(-1.0, 1.0)
}

/// Find the best match, reporting why none could be computed
///
/// Entries without an embedding are skipped. Every remaining embedding must
/// have the query's dimensionality. Ties keep the earliest entry.
pub fn try_find_best_match(
    query: &[f32],
    catalog: &[CatalogEntry],
) -> Result<MatchResult, MatchError> {
    if query.is_empty() {
        return Err(MatchError::EmptyQuery);
    }

    let rows: Vec<&CatalogEntry> = catalog.iter().filter(|e| e.has_embedding()).collect();
    let Some(first) = rows.first() else {
        return Err(MatchError::EmptyCatalog);
    };

    let dimensions = first.embedding.len();
    if let Some(ragged) = rows.iter().find(|e| e.embedding.len() != dimensions) {
        return Err(MatchError::RaggedEmbeddings {
            name: ragged.name.clone(),
            expected: dimensions,
            found: ragged.embedding.len(),
        });
    }
    if query.len() != dimensions {
        return Err(MatchError::DimensionMismatch {
            query: query.len(),
            catalog: dimensions,
        });
    }

    let mut best = first;
    let mut best_score = cosine_similarity(query, &first.embedding);
    for entry in &rows[1..] {
        let score = cosine_similarity(query, &entry.embedding);
        if score > best_score {
            best = entry;
            best_score = score;
        }
    }

    Ok(MatchResult::from_entry(best, best_score))
}

/// Find the catalog entry closest to `query`
///
/// Returns `None` when the catalog is empty, ragged or of a different
/// dimensionality than the query. Each case is logged distinctly.
pub fn find_best_match(query: &[f32], catalog: &[CatalogEntry]) -> Option<MatchResult> {
    match try_find_best_match(query, catalog) {
        Ok(result) => Some(result),
        Err(err @ (MatchError::EmptyQuery | MatchError::EmptyCatalog)) => {
            warn!(error = %err, entries = catalog.len(), "No match computed");
            None
        }
        Err(err) => {
            error!(error = %err, entries = catalog.len(), "Catalog data integrity violation");
            None
        }
    }
}
