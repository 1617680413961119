//! Application bootstrap
//!
//! Composition root turning an [`AppConfig`] into ready-to-use services.
//! Providers are resolved through the linkme registries that
//! `fanmatch-providers` fills when it is linked.
//!
//! ```text
//! AppConfig → registries → EmbeddingModelCache ─┐
//!                          CatalogLoader ───────┼→ MatchingService ─┐
//!                          TextExtractor → IdentityVerifier ────────┼→ OnboardingService
//!                          ProfileStore (on demand) ────────────────┘
//! ```
//!
//! The embedding model is not loaded here; the first match or catalog build
//! loads it through the shared cache.

use std::sync::Arc;

use fanmatch_application::ports::providers::{ProfileStore, TextExtractor};
use fanmatch_application::ports::registry::{
    EmbeddingProviderConfig, ProfileStoreConfig, resolve_profile_store, resolve_text_extractor,
};
use fanmatch_application::use_cases::{
    CatalogBuilder, CatalogLoader, EmbeddingModelCache, IdentityVerifier, MatchingService,
    OnboardingService,
};
use fanmatch_domain::error::{Error, Result};
use tracing::info;

use crate::config::AppConfig;

/// Store name used for dry runs
const DRY_RUN_STORE: &str = "memory";

/// Application context holding the wired services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    models: Arc<EmbeddingModelCache>,
    catalogs: Arc<CatalogLoader>,
    matching: Arc<MatchingService>,
    verifier: IdentityVerifier,
}

impl AppContext {
    /// Shared embedding model cache
    pub fn models(&self) -> Arc<EmbeddingModelCache> {
        Arc::clone(&self.models)
    }

    /// Shared catalog cache
    pub fn catalogs(&self) -> Arc<CatalogLoader> {
        Arc::clone(&self.catalogs)
    }

    /// Matching pipeline
    pub fn matching(&self) -> Arc<MatchingService> {
        Arc::clone(&self.matching)
    }

    /// Identity verifier
    pub fn verifier(&self) -> IdentityVerifier {
        self.verifier.clone()
    }

    /// Registry configuration of the embedding model
    pub fn embedding_config(&self) -> EmbeddingProviderConfig {
        self.config.embedding.to_provider_config()
    }

    /// Catalog builder backed by the configured model
    ///
    /// Loads the model, so this fails when it cannot be initialized.
    pub fn catalog_builder(&self) -> Result<CatalogBuilder> {
        let model = self.models.load_model(&self.embedding_config())?;
        Ok(CatalogBuilder::new(model))
    }

    /// Configured profile store
    pub fn profile_store(&self) -> Result<Arc<dyn ProfileStore>> {
        build_store(&self.config.storage.to_store_config())
    }

    /// Store that keeps records in memory, for dry runs
    pub fn dry_run_store(&self) -> Result<Arc<dyn ProfileStore>> {
        build_store(&ProfileStoreConfig::new(DRY_RUN_STORE))
    }

    /// Onboarding flow persisting into `store`
    pub fn onboarding(&self, store: Arc<dyn ProfileStore>) -> OnboardingService {
        OnboardingService::new(self.verifier(), self.matching(), store)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("embedding", &self.config.embedding.provider)
            .field("catalog", &self.config.catalog.path)
            .field("storage", &self.config.storage.provider)
            .field("verifier_available", &self.verifier.is_available())
            .finish_non_exhaustive()
    }
}

/// Initialize the application context with the process-wide model cache
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    init_app_with_models(config, EmbeddingModelCache::global())
}

/// Initialize the application context with an explicit model cache
pub fn init_app_with_models(
    config: AppConfig,
    models: Arc<EmbeddingModelCache>,
) -> Result<AppContext> {
    info!("Initializing application context");

    let config = Arc::new(config);
    let catalogs = Arc::new(CatalogLoader::new());
    let matching = Arc::new(MatchingService::new(
        Arc::clone(&models),
        config.embedding.to_provider_config(),
        Arc::clone(&catalogs),
        config.catalog.path.clone(),
    ));

    let extractor = build_extractor(&config)?;
    info!(
        "Resolved providers: embedding={}, extractor={}, storage={}",
        config.embedding.provider,
        extractor
            .as_ref()
            .map_or("none", |extractor| extractor.extractor_name()),
        config.storage.provider
    );
    let verifier = IdentityVerifier::new(extractor);

    Ok(AppContext {
        config,
        models,
        catalogs,
        matching,
        verifier,
    })
}

fn build_extractor(config: &AppConfig) -> Result<Option<Arc<dyn TextExtractor>>> {
    if !config.extraction.is_enabled() {
        return Ok(None);
    }
    resolve_text_extractor(&config.extraction.to_extractor_config())
        .map(Some)
        .map_err(|e| Error::config(format!("Extraction: {e}")))
}

fn build_store(config: &ProfileStoreConfig) -> Result<Arc<dyn ProfileStore>> {
    resolve_profile_store(config).map_err(|e| Error::config(format!("Storage: {e}")))
}
