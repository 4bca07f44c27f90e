//! In-memory layout store — same contract as the Postgres adapter.
//!
//! Backs tests and embeddings without durable storage. Records live in a
//! `HashMap` behind an async `RwLock`; clearing removes the key, so the
//! absent/empty distinction matches the Postgres row semantics.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::layout::{self, LayoutEntry, StoredEntry};
use crate::store::{LayoutStore, StoreError};

#[derive(Clone, Default)]
pub struct MemoryLayoutStore {
    records: Arc<RwLock<HashMap<Uuid, Vec<StoredEntry>>>>,
}

impl MemoryLayoutStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw stored layout directly, bypassing `save`'s conversion.
    /// Lets tests stage stale data (retired ids, bad sizes) as storage
    /// would hand it back.
    pub async fn seed(&self, user_id: Uuid, entries: Vec<StoredEntry>) {
        self.records.write().await.insert(user_id, entries);
    }
}

#[async_trait]
impl LayoutStore for MemoryLayoutStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<Vec<StoredEntry>>, StoreError> {
        Ok(self.records.read().await.get(&user_id).cloned())
    }

    async fn save(&self, user_id: Uuid, layout: &[LayoutEntry]) -> Result<(), StoreError> {
        self.records.write().await.insert(user_id, layout::to_stored(layout));
        Ok(())
    }

    async fn clear(&self, user_id: Uuid) -> Result<(), StoreError> {
        self.records.write().await.remove(&user_id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
