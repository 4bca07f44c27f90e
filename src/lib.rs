//! Dashboard tile layout engine.
//!
//! ARCHITECTURE
//! ============
//! The dashboard is rendered from an ordered list of tiles (visibility +
//! size per tile). Users customize that list; the product's tile set
//! changes across releases. This crate owns the piece in between:
//!
//! ```text
//! LayoutStore::load ──▶ reconcile::merge(catalog, persisted)
//!                              │
//!                              ▼
//!                        LayoutSession (working copy, edit ops)
//!                              │ commit
//!                              ▼
//!                       LayoutStore::save (raw working copy, no re-merge)
//! ```
//!
//! Reconciliation runs exactly once, on load. A stale save — missing new
//! tiles, referencing retired ones, carrying sizes from an older size
//! enumeration — is merged against the current catalog into a complete,
//! valid layout. Rendering, auth, and transport live in the embedding app.

pub mod catalog;
pub mod layout;
pub mod reconcile;
pub mod session;
pub mod store;

pub use catalog::{CatalogError, TileCatalog, TileDefinition, TileSize, default_catalog};
pub use layout::{Layout, LayoutEntry, StoredEntry};
pub use reconcile::merge;
pub use session::{LayoutSession, SessionError};
pub use store::{LayoutStore, MemoryLayoutStore, PgLayoutStore, StoreError};

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_tests;
