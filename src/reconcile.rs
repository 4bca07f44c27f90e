//! Layout reconciliation — merge a persisted layout against the catalog.
//!
//! DESIGN
//! ======
//! `merge` runs once per load and produces a layout satisfying all
//! invariants: every catalog id exactly once, total order, valid sizes.
//! Persisted order wins for surviving entries (customization is sticky);
//! tiles the user has never saved are appended in catalog order. The
//! output is what gets re-saved on the next commit, so the algorithm is
//! strictly deterministic — same inputs, same sequence — or users who
//! changed nothing would watch their tiles reshuffle.
//!
//! ERROR HANDLING
//! ==============
//! Never fails. Every anomaly a stale save can carry is an expected
//! consequence of the product evolving between saves, and degrades:
//! retired ids are dropped, unrecognized sizes fall back to the tile's
//! default, absent and empty both yield pure catalog defaults. Each
//! degradation is logged at warn and invisible to the user.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::catalog::{TileCatalog, TileSize};
use crate::layout::{Layout, LayoutEntry, StoredEntry};

/// Merge a persisted layout (possibly absent) against the current catalog
/// into a complete, valid layout.
///
/// `None` and `Some(&[])` both produce catalog defaults: an empty layout
/// would render nothing, and no product flow deliberately saves one.
#[must_use]
pub fn merge(catalog: &TileCatalog, persisted: Option<&[StoredEntry]>) -> Layout {
    let Some(entries) = persisted.filter(|entries| !entries.is_empty()) else {
        debug!(tiles = catalog.len(), "no persisted layout; using catalog defaults");
        return catalog_defaults(catalog);
    };

    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
    let mut merged = Vec::with_capacity(catalog.len());

    for entry in entries {
        let Some(def) = catalog.find(&entry.id) else {
            warn!(tile = %entry.id, "dropping layout entry for retired tile");
            continue;
        };
        if !seen.insert(def.id.as_str()) {
            warn!(tile = %entry.id, "dropping duplicate layout entry");
            continue;
        }
        let size = match TileSize::parse(&entry.size) {
            Some(size) => size,
            None => {
                warn!(tile = %entry.id, size = %entry.size, "unrecognized size; using tile default");
                def.default_size
            }
        };
        merged.push(LayoutEntry { id: def.id.clone(), visible: entry.visible, size });
    }

    // Tiles shipped since the user's last save: append in catalog order.
    for def in catalog.definitions() {
        if !seen.contains(def.id.as_str()) {
            merged.push(default_entry(def));
        }
    }

    debug!(
        persisted = entries.len(),
        merged = merged.len(),
        "reconciled persisted layout against catalog"
    );
    merged
}

fn catalog_defaults(catalog: &TileCatalog) -> Layout {
    catalog.definitions().iter().map(default_entry).collect()
}

fn default_entry(def: &crate::catalog::TileDefinition) -> LayoutEntry {
    LayoutEntry {
        id: def.id.clone(),
        visible: def.default_visible,
        size: def.default_size,
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
