//! Layout persistence boundary — load, save, and clear per user.
//!
//! DESIGN
//! ======
//! One record per user key, holding the raw ordered `{id, visible, size}`
//! list. Absent is a first-class load result, distinct from I/O failure:
//! it means "never customized, or explicitly reset" and reconciles to
//! catalog defaults. `clear` returns the record to absent; `save` with an
//! empty layout writes a concrete empty value. The two reconcile the same
//! way but stay distinct in storage — clearing means "inherit future
//! defaults", an empty save is just data.
//!
//! ERROR HANDLING
//! ==============
//! Adapters surface transport/storage failures as `StoreError` for the
//! caller to handle (retry, keep editing in memory, show a "couldn't
//! save" notice). No retries happen here. A stored value that no longer
//! decodes is a data anomaly, not an error: load reports it absent.

use async_trait::async_trait;
use uuid::Uuid;

use crate::layout::{LayoutEntry, StoredEntry};

pub mod memory;
pub mod postgres;

pub use memory::MemoryLayoutStore;
pub use postgres::PgLayoutStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable per-user layout storage. Implementations perform no
/// reconciliation — that is always the loader's job, run once on load.
#[async_trait]
pub trait LayoutStore: Send + Sync {
    /// Fetch the user's raw stored layout. `Ok(None)` means no record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on transport/storage failure.
    async fn load(&self, user_id: Uuid) -> Result<Option<Vec<StoredEntry>>, StoreError>;

    /// Persist the layout exactly as given, replacing any prior record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on transport/storage failure.
    async fn save(&self, user_id: Uuid, layout: &[LayoutEntry]) -> Result<(), StoreError>;

    /// Remove the user's record, returning their state to absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on transport/storage failure.
    async fn clear(&self, user_id: Uuid) -> Result<(), StoreError>;
}
