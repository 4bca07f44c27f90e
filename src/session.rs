//! Layout editing session — working copy and the user-facing edit ops.
//!
//! DESIGN
//! ======
//! One session per interactive edit: construct from the catalog and
//! whatever the store loaded (construction runs reconciliation, so an
//! uninitialized session cannot exist), mutate the working copy, then
//! `commit` and hand the result to the store — or `discard` and re-load.
//! Every op preserves the layout invariants; `commit` returns the working
//! copy unchanged because it is already valid by construction.
//!
//! ERROR HANDLING
//! ==============
//! Ops addressing a tile id not in the working copy are recoverable
//! no-ops returning `SessionError::UnknownTile`. A long-lived UI can race
//! a stale id against a newer catalog; that must never corrupt state or
//! crash the session.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::{TileCatalog, TileSize};
use crate::layout::{Layout, StoredEntry};
use crate::reconcile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no tile with id in working layout: {0}")]
    UnknownTile(String),
}

/// In-memory editing context for one user's layout between load and save.
/// Single-threaded by design: one interactive flow, no internal locking.
#[derive(Debug)]
pub struct LayoutSession {
    catalog: Arc<TileCatalog>,
    working: Layout,
    dirty: bool,
}

impl LayoutSession {
    /// Start an edit session by reconciling the persisted layout against
    /// the catalog. The working copy is valid from this point on.
    #[must_use]
    pub fn new(catalog: Arc<TileCatalog>, persisted: Option<&[StoredEntry]>) -> Self {
        let working = reconcile::merge(&catalog, persisted);
        Self { catalog, working, dirty: false }
    }

    /// The current working copy, in display order.
    #[must_use]
    pub fn working(&self) -> &Layout {
        &self.working
    }

    /// True if any op mutated the working copy since the last commit.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set a tile's visibility.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` if `id` is not in the working layout.
    pub fn set_visibility(&mut self, id: &str, visible: bool) -> Result<(), SessionError> {
        let index = self.position(id)?;
        self.working[index].visible = visible;
        self.dirty = true;
        Ok(())
    }

    /// Set a tile's size.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` if `id` is not in the working layout.
    pub fn set_size(&mut self, id: &str, size: TileSize) -> Result<(), SessionError> {
        let index = self.position(id)?;
        self.working[index].size = size;
        self.dirty = true;
        Ok(())
    }

    /// Move a tile to `new_index`, shifting the others. The index is
    /// clamped to the layout bounds; no entry is lost or duplicated.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` if `id` is not in the working layout.
    pub fn reorder(&mut self, id: &str, new_index: usize) -> Result<(), SessionError> {
        let from = self.position(id)?;
        let to = new_index.min(self.working.len() - 1);
        let entry = self.working.remove(from);
        self.working.insert(to, entry);
        self.dirty = true;
        Ok(())
    }

    /// Move a tile one slot toward the front. No-op at the top.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` if `id` is not in the working layout.
    pub fn move_up(&mut self, id: &str) -> Result<(), SessionError> {
        let from = self.position(id)?;
        if from == 0 {
            return Ok(());
        }
        self.reorder(id, from - 1)
    }

    /// Move a tile one slot toward the back. No-op at the bottom.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` if `id` is not in the working layout.
    pub fn move_down(&mut self, id: &str) -> Result<(), SessionError> {
        let from = self.position(id)?;
        if from + 1 == self.working.len() {
            return Ok(());
        }
        self.reorder(id, from + 1)
    }

    /// Recompute pure catalog defaults as the working copy and mark dirty.
    ///
    /// Preview only: clearing the stored record is a separate, explicit
    /// `LayoutStore::clear` the caller triggers alongside committing, so
    /// "preview defaults" and "forget my customization" stay distinct.
    pub fn reset(&mut self) {
        self.working = reconcile::merge(&self.catalog, None);
        self.dirty = true;
        debug!(tiles = self.working.len(), "session reset to catalog defaults");
    }

    /// Finish the edit: clears the dirty flag and returns the working copy
    /// for the caller to persist. No re-reconciliation happens here — the
    /// store saves exactly what the session holds.
    pub fn commit(&mut self) -> &Layout {
        self.dirty = false;
        &self.working
    }

    /// Abandon the edit. Consumes the session; resuming means loading from
    /// the store and constructing a fresh one.
    pub fn discard(self) {
        debug!(dirty = self.dirty, "session discarded");
    }

    fn position(&self, id: &str) -> Result<usize, SessionError> {
        self.working
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| SessionError::UnknownTile(id.to_string()))
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
