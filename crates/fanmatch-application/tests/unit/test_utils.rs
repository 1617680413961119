//! Shared fixtures for application tests

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use fanmatch_application::ports::EmbeddingProvider;
use fanmatch_domain::error::{Error, Result};
use fanmatch_domain::{CatalogEntry, Embedding, FanProfile, FavoriteGame, PrimaryRole};

/// Embedding provider returning predefined vectors per text
pub struct FixedEmbeddingProvider {
    vectors: HashMap<String, Vec<f32>>,
    fallback: Option<Vec<f32>>,
    calls: AtomicUsize,
}

impl FixedEmbeddingProvider {
    pub fn new() -> Self {
        Self {
            vectors: HashMap::new(),
            fallback: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Return `vector` for exactly `text`
    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    /// Return `vector` for any text without its own entry
    pub fn with_fallback(mut self, vector: Vec<f32>) -> Self {
        self.fallback = Some(vector);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingProvider for FixedEmbeddingProvider {
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(text)
                    .or(self.fallback.as_ref())
                    .map(|v| Embedding::new(v.clone(), "fixed"))
                    .ok_or_else(|| Error::embedding(format!("no vector for '{text}'")))
            })
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.fallback
            .as_ref()
            .or_else(|| self.vectors.values().next())
            .map_or(0, Vec::len)
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }

    fn model_name(&self) -> &str {
        "fixed"
    }
}

/// The two-entry catalog used by the end-to-end scenarios
pub fn two_entry_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("A", "d1", vec![1.0, 0.0]),
        CatalogEntry::new("B", "d2", vec![0.0, 1.0]),
    ]
}

/// Write the two-entry catalog to `path`
pub fn write_two_entry_catalog(path: &Path) {
    let json = r#"[
        {"name": "A", "text": "d1", "embedding": [1.0, 0.0]},
        {"name": "B", "text": "d2", "embedding": [0.0, 1.0]}
    ]"#;
    std::fs::write(path, json).expect("write catalog");
}

/// A profile passing validation
pub fn complete_profile() -> FanProfile {
    FanProfile {
        first_name: "Ana".to_string(),
        last_name: "Souza".to_string(),
        city: "Recife".to_string(),
        favorite_game: FavoriteGame::CounterStrike,
        primary_role: PrimaryRole::EntryFragger,
        nickname: "anaxs".to_string(),
        playstyle: "Aggressive entry player".to_string(),
        watched_championships: Some(true),
        instagram_handle: None,
    }
}
