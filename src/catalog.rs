//! Tile catalog — the set of widgets the current product build ships.
//!
//! DESIGN
//! ======
//! The catalog is static configuration compiled into the product, not
//! runtime state: an ordered list of tile definitions, unique by id.
//! Catalog order is the canonical default order — it decides both the
//! first-run layout and where newly shipped tiles land during
//! reconciliation. Ids are stable across releases and never reused for a
//! semantically different widget.
//!
//! ERROR HANDLING
//! ==============
//! A duplicate id or an empty definition list is a configuration error and
//! fails at construction. Nothing downstream can produce a valid layout
//! from a broken catalog, so this is the one place that refuses to start.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// TILE SIZE
// =============================================================================

/// Relative width class of a tile on the dashboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSize {
    Small,
    Medium,
    Large,
    Xlarge,
    Full,
}

impl TileSize {
    /// Parse a stored size string. Returns `None` for anything outside the
    /// enumeration — callers fall back to the tile's default size.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "xlarge" => Some(Self::Xlarge),
            "full" => Some(Self::Full),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Xlarge => "xlarge",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TILE DEFINITION
// =============================================================================

/// Product-defined description of one tile: identity plus the defaults a
/// user sees before customizing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDefinition {
    /// Stable identifier, unique within the catalog.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Whether the tile shows on an untouched dashboard.
    pub default_visible: bool,
    /// Grid size on an untouched dashboard.
    pub default_size: TileSize,
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no tile definitions")]
    Empty,
    #[error("duplicate tile id: {0}")]
    DuplicateId(String),
}

/// Ordered, id-unique collection of tile definitions. Read-only after
/// construction.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    definitions: Vec<TileDefinition>,
    by_id: HashMap<String, usize>,
}

impl TileCatalog {
    /// Build a catalog, validating id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty definition list and
    /// `CatalogError::DuplicateId` on the first repeated id.
    pub fn new(definitions: Vec<TileDefinition>) -> Result<Self, CatalogError> {
        if definitions.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut by_id = HashMap::with_capacity(definitions.len());
        for (index, def) in definitions.iter().enumerate() {
            if by_id.insert(def.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(def.id.clone()));
            }
        }
        Ok(Self { definitions, by_id })
    }

    /// All definitions in canonical default order.
    #[must_use]
    pub fn definitions(&self) -> &[TileDefinition] {
        &self.definitions
    }

    /// Look up a definition by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&TileDefinition> {
        self.by_id.get(id).map(|&index| &self.definitions[index])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Always false for a constructed catalog; present for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

// =============================================================================
// BUILT-IN PRODUCT CATALOG
// =============================================================================

fn tile(id: &str, name: &str, default_visible: bool, default_size: TileSize) -> TileDefinition {
    TileDefinition {
        id: id.to_string(),
        name: name.to_string(),
        default_visible,
        default_size,
    }
}

/// The tile set shipped with the current product build.
///
/// # Panics
///
/// Panics if the built-in definitions are invalid — a configuration error
/// that must fail at startup, not surface later as a broken dashboard.
#[must_use]
pub fn default_catalog() -> TileCatalog {
    TileCatalog::new(vec![
        tile("visa_status", "Visa status", true, TileSize::Large),
        tile("work_hours", "Work hours", true, TileSize::Medium),
        tile("budget", "Budget", true, TileSize::Medium),
        tile("deadlines", "Deadlines", true, TileSize::Small),
        tile("news_feed", "News feed", false, TileSize::Xlarge),
        tile("ai_assistant", "AI assistant", false, TileSize::Full),
        tile("subscription", "Subscription", false, TileSize::Small),
    ])
    .expect("built-in catalog must have unique tile ids")
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
