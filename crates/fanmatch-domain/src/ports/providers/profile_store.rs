use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::ProfileRecord;

/// Profile Persistence Interface
///
/// Append-only storage of completed profile records. Records are never
/// updated or read back by this system.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Append a record and return the key the store assigned to it
    async fn save_profile(&self, record: &ProfileRecord) -> Result<String>;

    /// Identifier of the store implementation (e.g. "firebase", "memory")
    fn provider_name(&self) -> &str;
}
