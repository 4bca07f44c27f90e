//! Layout data model — reconciled entries and the persisted wire shape.
//!
//! DESIGN
//! ======
//! Two shapes, one per side of the reconciler:
//!
//! - `LayoutEntry` is the validated, in-memory form. Its `size` is the
//!   closed `TileSize` enum, so an invalid size cannot exist past
//!   reconciliation. Position is the entry's index in the layout.
//! - `StoredEntry` is the raw persisted form — `{id, visible, size}` with
//!   `size` kept as a string, exactly as the record store hands it back.
//!   A save from three releases ago may carry a size the current build no
//!   longer recognizes; decoding must not reject the whole layout for it.
//!
//! `LayoutEntry` serializes `size` lowercase, so saving a layout produces
//! the same wire shape `StoredEntry` reads back.

use serde::{Deserialize, Serialize};

use crate::catalog::TileSize;

/// One tile's reconciled placement: the user's (or default) visibility and
/// size choice. Display position is the index within the `Layout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub id: String,
    pub visible: bool,
    pub size: TileSize,
}

/// A complete, valid layout: every catalog id exactly once, in display
/// order. Produced by reconciliation and maintained by the session ops.
pub type Layout = Vec<LayoutEntry>;

/// Raw persisted entry, exactly as stored. Unknown ids and unrecognized
/// size strings survive decoding; the reconciler degrades them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub id: String,
    pub visible: bool,
    pub size: String,
}

impl From<&LayoutEntry> for StoredEntry {
    fn from(entry: &LayoutEntry) -> Self {
        Self {
            id: entry.id.clone(),
            visible: entry.visible,
            size: entry.size.as_str().to_string(),
        }
    }
}

/// Convert a reconciled layout into its persisted form.
#[must_use]
pub fn to_stored(layout: &[LayoutEntry]) -> Vec<StoredEntry> {
    layout.iter().map(StoredEntry::from).collect()
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
