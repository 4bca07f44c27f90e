use super::*;

use crate::catalog::TileDefinition;
use crate::layout::StoredEntry;

fn abc_catalog() -> Arc<TileCatalog> {
    Arc::new(
        TileCatalog::new(vec![
            TileDefinition {
                id: "a".into(),
                name: "A".into(),
                default_visible: true,
                default_size: TileSize::Small,
            },
            TileDefinition {
                id: "b".into(),
                name: "B".into(),
                default_visible: true,
                default_size: TileSize::Medium,
            },
            TileDefinition {
                id: "c".into(),
                name: "C".into(),
                default_visible: false,
                default_size: TileSize::Large,
            },
        ])
        .unwrap(),
    )
}

fn ids(session: &LayoutSession) -> Vec<&str> {
    session.working().iter().map(|e| e.id.as_str()).collect()
}

// =============================================================================
// construction
// =============================================================================

#[test]
fn new_without_persisted_uses_defaults_and_is_clean() {
    let session = LayoutSession::new(abc_catalog(), None);
    assert_eq!(ids(&session), vec!["a", "b", "c"]);
    assert!(!session.is_dirty());
}

#[test]
fn new_reconciles_persisted_layout() {
    let persisted = vec![StoredEntry { id: "b".into(), visible: false, size: "full".into() }];
    let session = LayoutSession::new(abc_catalog(), Some(&persisted));
    assert_eq!(ids(&session), vec!["b", "a", "c"]);
    assert!(!session.working()[0].visible);
    assert_eq!(session.working()[0].size, TileSize::Full);
    assert!(!session.is_dirty());
}

// =============================================================================
// set_visibility / set_size
// =============================================================================

#[test]
fn set_visibility_updates_entry_and_marks_dirty() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.set_visibility("a", false).unwrap();
    assert!(!session.working()[0].visible);
    assert!(session.is_dirty());
}

#[test]
fn set_visibility_unknown_id_is_noop_error() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    let before = session.working().clone();
    let err = session.set_visibility("z", false).unwrap_err();
    assert_eq!(err, SessionError::UnknownTile("z".into()));
    assert_eq!(session.working(), &before);
    assert!(!session.is_dirty());
}

#[test]
fn set_size_updates_entry_and_marks_dirty() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.set_size("b", TileSize::Full).unwrap();
    assert_eq!(session.working()[1].size, TileSize::Full);
    assert!(session.is_dirty());
}

#[test]
fn set_size_unknown_id_is_noop_error() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    let err = session.set_size("z", TileSize::Small).unwrap_err();
    assert_eq!(err, SessionError::UnknownTile("z".into()));
    assert!(!session.is_dirty());
}

// =============================================================================
// reorder
// =============================================================================

#[test]
fn reorder_moves_entry_to_index() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.reorder("c", 0).unwrap();
    assert_eq!(ids(&session), vec!["c", "a", "b"]);
    assert!(session.is_dirty());
}

#[test]
fn reorder_clamps_out_of_range_index() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.reorder("a", 99).unwrap();
    assert_eq!(ids(&session), vec!["b", "c", "a"]);
}

#[test]
fn reorder_unknown_id_is_noop_error() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    let err = session.reorder("z", 0).unwrap_err();
    assert_eq!(err, SessionError::UnknownTile("z".into()));
    assert_eq!(ids(&session), vec!["a", "b", "c"]);
}

#[test]
fn reorder_sequence_never_loses_or_duplicates() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.reorder("c", 0).unwrap();
    session.reorder("a", 2).unwrap();
    session.reorder("b", 1).unwrap();
    session.reorder("c", 99).unwrap();
    let mut sorted = ids(&session);
    sorted.sort_unstable();
    assert_eq!(sorted, vec!["a", "b", "c"]);
}

#[test]
fn reorder_then_set_size_applies_both_in_sequence() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.reorder("b", 0).unwrap();
    session.set_size("b", TileSize::Xlarge).unwrap();
    assert_eq!(ids(&session), vec!["b", "a", "c"]);
    assert_eq!(session.working()[0].size, TileSize::Xlarge);
}

// =============================================================================
// move_up / move_down
// =============================================================================

#[test]
fn move_up_swaps_with_previous() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.move_up("b").unwrap();
    assert_eq!(ids(&session), vec!["b", "a", "c"]);
}

#[test]
fn move_up_at_top_is_noop() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.move_up("a").unwrap();
    assert_eq!(ids(&session), vec!["a", "b", "c"]);
    assert!(!session.is_dirty());
}

#[test]
fn move_down_swaps_with_next() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.move_down("b").unwrap();
    assert_eq!(ids(&session), vec!["a", "c", "b"]);
}

#[test]
fn move_down_at_bottom_is_noop() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.move_down("c").unwrap();
    assert_eq!(ids(&session), vec!["a", "b", "c"]);
    assert!(!session.is_dirty());
}

// =============================================================================
// commit / reset / discard
// =============================================================================

#[test]
fn commit_returns_working_copy_and_clears_dirty() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.set_visibility("c", true).unwrap();
    let committed = session.commit().clone();
    assert!(committed[2].visible);
    assert!(!session.is_dirty());
}

#[test]
fn reset_restores_catalog_defaults_and_marks_dirty() {
    let catalog = abc_catalog();
    let persisted = vec![
        StoredEntry { id: "b".into(), visible: true, size: "full".into() },
        StoredEntry { id: "d".into(), visible: true, size: "small".into() },
    ];
    let mut session = LayoutSession::new(Arc::clone(&catalog), Some(&persisted));
    assert_eq!(ids(&session), vec!["b", "a", "c"]);

    session.reset();
    assert_eq!(session.working(), &reconcile::merge(&catalog, None));
    assert_eq!(ids(&session), vec!["a", "b", "c"]);
    assert!(session.is_dirty());
}

#[test]
fn edits_after_reset_apply_to_defaults() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.reorder("c", 0).unwrap();
    session.reset();
    session.set_size("a", TileSize::Full).unwrap();
    assert_eq!(ids(&session), vec!["a", "b", "c"]);
    assert_eq!(session.working()[0].size, TileSize::Full);
}

#[test]
fn discard_consumes_session() {
    let mut session = LayoutSession::new(abc_catalog(), None);
    session.set_visibility("a", false).unwrap();
    session.discard();
    // Resuming requires constructing a fresh session from the store.
    let fresh = LayoutSession::new(abc_catalog(), None);
    assert!(fresh.working()[0].visible);
}
