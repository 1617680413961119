//! Profile Store Implementations
//!
//! | Store | Type | Notes |
//! |-------|------|-------|
//! | FirebaseProfileStore | Remote | Realtime Database REST, append-only |
//! | InMemoryProfileStore | Local | Tests and dry runs |

pub mod firebase;
pub mod memory;

pub use firebase::FirebaseProfileStore;
pub use memory::InMemoryProfileStore;
