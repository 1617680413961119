//! Firebase Realtime Database profile store
//!
//! Appends each record with a REST `POST {database_url}/{collection}.json`.
//! The database answers with the generated push key as `{"name": "<key>"}`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use fanmatch_application::ports::registry::{
    PROFILE_STORES, ProfileStoreConfig, ProfileStoreEntry,
};
use fanmatch_domain::ProfileRecord;
use fanmatch_domain::error::{Error, Result};
use fanmatch_domain::ports::providers::ProfileStore;
use reqwest::{Client, Url};
use tracing::debug;

use crate::constants::{
    CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT, FIREBASE_AUTH_PARAM, FIREBASE_PUSH_KEY_FIELD,
};
use crate::utils::HttpResponseUtils;

/// Realtime Database profile store
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use fanmatch_providers::profile_store::FirebaseProfileStore;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let store = FirebaseProfileStore::new(
///         "https://my-project-default-rtdb.firebaseio.com",
///         "users",
///         None,
///         Duration::from_secs(30),
///         Client::new(),
///     )?;
///     Ok(())
/// }
/// ```
pub struct FirebaseProfileStore {
    endpoint: Url,
    auth_token: Option<String>,
    timeout: Duration,
    http_client: Client,
}

impl FirebaseProfileStore {
    /// Create a store appending to `collection` of the database at `database_url`
    pub fn new(
        database_url: &str,
        collection: &str,
        auth_token: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Result<Self> {
        let endpoint = collection_endpoint(database_url, collection)?;
        Ok(Self {
            endpoint,
            auth_token: auth_token.filter(|t| !t.trim().is_empty()),
            timeout,
            http_client,
        })
    }

    /// URL records are posted to, without credentials
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        if let Some(token) = &self.auth_token {
            url.query_pairs_mut()
                .append_pair(FIREBASE_AUTH_PARAM, token);
        }
        url
    }
}

/// Build `{database_url}/{collection}.json`
fn collection_endpoint(database_url: &str, collection: &str) -> Result<Url> {
    let base = database_url.trim().trim_end_matches('/');
    let collection = collection.trim().trim_matches('/');
    if base.is_empty() {
        return Err(Error::config("Firebase database_url is empty"));
    }
    if collection.is_empty() {
        return Err(Error::config("Firebase collection is empty"));
    }

    Url::parse(&format!("{base}/{collection}.json"))
        .map_err(|e| Error::config(format!("Invalid Firebase database_url '{base}': {e}")))
}

#[async_trait]
impl ProfileStore for FirebaseProfileStore {
    async fn save_profile(&self, record: &ProfileRecord) -> Result<String> {
        debug!(endpoint = %self.endpoint, "Posting profile record");

        let response = self
            .http_client
            .post(self.request_url())
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(record)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::network(format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout))
                } else {
                    Error::network_with_source("Firebase request failed", e.without_url())
                }
            })?;

        let body = HttpResponseUtils::check_and_parse(response, "Firebase").await?;
        body.get(FIREBASE_PUSH_KEY_FIELD)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| Error::storage("Firebase response is missing the generated key"))
    }

    fn provider_name(&self) -> &str {
        "firebase"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn firebase_factory(
    config: &ProfileStoreConfig,
) -> std::result::Result<Arc<dyn ProfileStore>, String> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| "Firebase store requires database_url".to_string())?;
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

    let store = FirebaseProfileStore::new(
        database_url,
        &config.collection,
        config.auth_token.clone(),
        timeout,
        client,
    )
    .map_err(|e| e.to_string())?;
    Ok(Arc::new(store))
}

#[linkme::distributed_slice(PROFILE_STORES)]
static FIREBASE_STORE: ProfileStoreEntry = ProfileStoreEntry {
    name: "firebase",
    description: "Firebase Realtime Database over REST (append-only push)",
    factory: firebase_factory,
};
