//! Profile storage configuration types

use fanmatch_application::ports::registry::ProfileStoreConfig;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_STORAGE_COLLECTION, DEFAULT_STORAGE_PROVIDER, DEFAULT_STORAGE_TIMEOUT_SECS,
};

/// Profile store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Registered store name (`firebase`, `memory`)
    pub provider: String,

    /// Realtime Database base URL
    pub database_url: Option<String>,

    /// Database secret or ID token sent as the `auth` query parameter
    pub auth_token: Option<String>,

    /// Collection records are appended to
    pub collection: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORAGE_PROVIDER.to_string(),
            database_url: None,
            auth_token: None,
            collection: DEFAULT_STORAGE_COLLECTION.to_string(),
            timeout_secs: DEFAULT_STORAGE_TIMEOUT_SECS,
        }
    }
}

impl StorageConfig {
    /// Registry configuration for resolving the store
    pub fn to_store_config(&self) -> ProfileStoreConfig {
        let mut config = ProfileStoreConfig::new(&self.provider)
            .with_collection(&self.collection)
            .with_timeout_secs(self.timeout_secs);
        if let Some(url) = &self.database_url {
            config = config.with_database_url(url);
        }
        if let Some(token) = &self.auth_token {
            config = config.with_auth_token(token);
        }
        config
    }
}
