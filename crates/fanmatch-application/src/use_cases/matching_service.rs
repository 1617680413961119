//! Matching Service Use Case
//!
//! Runs the compose -> encode -> match pipeline for one fan profile.
//! Every step degrades to a [`MatchOutcome`] variant instead of failing.

use std::path::PathBuf;
use std::sync::Arc;

use fanmatch_domain::{FanProfile, MatchResult};
use tracing::{info, warn};

use super::catalog_loader::CatalogLoader;
use super::composer::compose;
use super::embedding_model::{EmbeddingModelCache, encode};
use super::matcher::find_best_match;
use crate::ports::registry::EmbeddingProviderConfig;

/// Result of matching one profile
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Best catalog entry found
    Matched(MatchResult),
    /// The profile produced no text to embed
    InsufficientText,
    /// The embedding model could not be loaded or failed to encode
    ModelUnavailable,
    /// The catalog file is missing or unreadable
    CatalogUnavailable,
    /// The catalog was loaded but no match could be computed
    NoMatch,
}

impl MatchOutcome {
    /// The match, if one was found
    pub fn result(&self) -> Option<&MatchResult> {
        match self {
            Self::Matched(result) => Some(result),
            _ => None,
        }
    }

    /// Short explanation for the presentation layer
    pub fn describe(&self) -> String {
        match self {
            Self::Matched(result) => format!(
                "{} {} ({})",
                result.affinity().flames(),
                result.name,
                result.percent()
            ),
            Self::InsufficientText => "Not enough information to find a match".to_string(),
            Self::ModelUnavailable => "Matching unavailable: embedding model not loaded".to_string(),
            Self::CatalogUnavailable => "Matching unavailable: player catalog not found".to_string(),
            Self::NoMatch => "No match could be computed".to_string(),
        }
    }
}

/// Matches fan profiles against the reference catalog
#[derive(Debug)]
pub struct MatchingService {
    models: Arc<EmbeddingModelCache>,
    model_config: EmbeddingProviderConfig,
    catalogs: Arc<CatalogLoader>,
    catalog_path: PathBuf,
}

impl MatchingService {
    /// Create a matching service
    pub fn new(
        models: Arc<EmbeddingModelCache>,
        model_config: EmbeddingProviderConfig,
        catalogs: Arc<CatalogLoader>,
        catalog_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            models,
            model_config,
            catalogs,
            catalog_path: catalog_path.into(),
        }
    }

    /// Path of the catalog this service matches against
    pub fn catalog_path(&self) -> &std::path::Path {
        &self.catalog_path
    }

    /// Match a fan profile
    pub fn match_profile(&self, profile: &FanProfile) -> MatchOutcome {
        self.match_text(&compose(profile))
    }

    /// Match an already composed profile text
    pub fn match_text(&self, text: &str) -> MatchOutcome {
        if text.trim().is_empty() {
            return MatchOutcome::InsufficientText;
        }

        let model = match self.models.load_model(&self.model_config) {
            Ok(model) => model,
            Err(e) => {
                warn!(provider = %self.model_config.provider, error = %e, "Embedding model unavailable");
                return MatchOutcome::ModelUnavailable;
            }
        };

        let Some(query) = encode(text, Some(model.as_ref())) else {
            return MatchOutcome::ModelUnavailable;
        };

        let Some(catalog) = self.catalogs.load(&self.catalog_path) else {
            return MatchOutcome::CatalogUnavailable;
        };

        match find_best_match(&query.vector, catalog.entries()) {
            Some(result) => {
                info!(name = %result.name, score = result.score, "Profile matched");
                MatchOutcome::Matched(result)
            }
            None => MatchOutcome::NoMatch,
        }
    }
}
