//! In-memory profile store
//!
//! Keeps records for the lifetime of the process. Data is lost on restart.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use fanmatch_application::ports::registry::{
    PROFILE_STORES, ProfileStoreConfig, ProfileStoreEntry,
};
use fanmatch_domain::ProfileRecord;
use fanmatch_domain::error::Result;
use fanmatch_domain::ports::providers::ProfileStore;

/// In-memory profile store
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    records: DashMap<String, ProfileRecord>,
    next_id: AtomicU64,
}

impl InMemoryProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored records ordered by key (insertion order)
    pub fn records(&self) -> Vec<(String, ProfileRecord)> {
        let mut records: Vec<(String, ProfileRecord)> = self
            .records
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        records.sort_by(|a, b| a.0.cmp(&b.0));
        records
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was stored yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn save_profile(&self, record: &ProfileRecord) -> Result<String> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let key = format!("mem-{id:08}");
        self.records.insert(key.clone(), record.clone());
        Ok(key)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

#[linkme::distributed_slice(PROFILE_STORES)]
static MEMORY_STORE: ProfileStoreEntry = ProfileStoreEntry {
    name: "memory",
    description: "In-memory store (tests and dry runs, not persisted)",
    factory: |_config: &ProfileStoreConfig| {
        let store: Arc<dyn ProfileStore> = Arc::new(InMemoryProfileStore::new());
        Ok(store)
    },
};
