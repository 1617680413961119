//! Profile Store Registry
//!
//! Persistence back-ends register here the same way embedding providers do.

use std::sync::Arc;

use crate::ports::providers::ProfileStore;

/// Configuration for profile store creation
#[derive(Debug, Clone, Default)]
pub struct ProfileStoreConfig {
    /// Store name (e.g., "firebase", "memory")
    pub provider: String,
    /// Base URL of the remote database
    pub database_url: Option<String>,
    /// Credential sent with every write
    pub auth_token: Option<String>,
    /// Collection (path) records are appended to
    pub collection: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ProfileStoreConfig {
    /// Create a new config with the given store name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            collection: "users".to_string(),
            timeout_secs: 30,
            ..Default::default()
        }
    }

    /// Set the database URL
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the auth token
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the collection
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Registry entry for profile stores
pub struct ProfileStoreEntry {
    /// Unique store name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create store instance
    pub factory: fn(&ProfileStoreConfig) -> Result<Arc<dyn ProfileStore>, String>,
}

#[linkme::distributed_slice]
pub static PROFILE_STORES: [ProfileStoreEntry] = [..];

/// Resolve profile store by name from registry
pub fn resolve_profile_store(config: &ProfileStoreConfig) -> Result<Arc<dyn ProfileStore>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = PROFILE_STORES.iter().find(|e| e.name == provider_name) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = PROFILE_STORES.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown profile store '{provider_name}'. Available stores: {available:?}"
    ))
}

/// List all registered profile stores
pub fn list_profile_stores() -> Vec<(&'static str, &'static str)> {
    PROFILE_STORES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
