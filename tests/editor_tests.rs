//! Editor tests - palette selection and the paint state machine.

use tui_tilepaint::core::MapEditor;
use tui_tilepaint::types::{EditorEvent, MapConfig, TileKind};

fn editor() -> MapEditor {
    MapEditor::new(MapConfig {
        width: 5,
        height: 3,
    })
}

#[test]
fn test_selection_exclusivity() {
    let mut ed = editor();
    ed.select_swatch(TileKind::Sand);

    // Exactly one catalog entry reports selected, and it is the one asked
    // for.
    let selected: Vec<_> = TileKind::CATALOG
        .iter()
        .filter(|k| **k == ed.selected())
        .collect();
    assert_eq!(selected, vec![&TileKind::Sand]);

    ed.select_swatch(TileKind::Tree);
    assert_eq!(ed.selected(), TileKind::Tree);
}

#[test]
fn test_hover_preview_does_not_commit() {
    let mut ed = editor();
    ed.select_swatch(TileKind::Water);

    ed.pointer_enter(2, 1);
    assert_eq!(ed.display_tile(2, 1), Some(TileKind::Water));
    assert_eq!(ed.tile(2, 1), Some(TileKind::Grass));
}

#[test]
fn test_preview_revert_on_leave() {
    let mut ed = editor();
    ed.select_swatch(TileKind::Rock);

    // Hover over a cell with stored type grass, then leave: the display
    // goes back to grass even though it transiently showed rock.
    ed.pointer_enter(0, 0);
    assert_eq!(ed.display_tile(0, 0), Some(TileKind::Rock));
    ed.pointer_leave(0, 0);
    assert_eq!(ed.display_tile(0, 0), Some(TileKind::Grass));
    assert_eq!(ed.tile(0, 0), Some(TileKind::Grass));
}

#[test]
fn test_down_enter_leave_round_trip_keeps_paint() {
    let mut ed = editor();
    ed.select_swatch(TileKind::Sand);

    // Paint was committed on down, so the same-cell enter/leave afterwards
    // must not undo it.
    ed.pointer_down(1, 1);
    ed.pointer_enter(1, 1);
    ed.pointer_leave(1, 1);

    assert_eq!(ed.tile(1, 1), Some(TileKind::Sand));
    assert_eq!(ed.display_tile(1, 1), Some(TileKind::Sand));
}

#[test]
fn test_drag_paints_entered_cells() {
    let mut ed = editor();
    ed.select_swatch(TileKind::Path);

    ed.pointer_down(0, 0);
    ed.pointer_enter(1, 0);
    ed.pointer_enter(2, 0);
    ed.pointer_up();

    assert_eq!(ed.tile(0, 0), Some(TileKind::Path));
    assert_eq!(ed.tile(1, 0), Some(TileKind::Path));
    assert_eq!(ed.tile(2, 0), Some(TileKind::Path));
    // Cells never entered stay untouched.
    assert_eq!(ed.tile(3, 0), Some(TileKind::Grass));
}

#[test]
fn test_enter_after_up_only_previews() {
    let mut ed = editor();
    ed.select_swatch(TileKind::Water);

    ed.pointer_down(0, 0);
    ed.pointer_up();

    ed.pointer_enter(1, 0);
    assert_eq!(ed.tile(1, 0), Some(TileKind::Grass));
    assert_eq!(ed.display_tile(1, 0), Some(TileKind::Water));
}

#[test]
fn test_pointer_up_idempotence() {
    let mut ed = editor();

    ed.pointer_down(0, 0);
    ed.pointer_up();
    let after_one = ed.drawing();
    ed.pointer_up();

    assert!(!after_one);
    assert!(!ed.drawing());
}

#[test]
fn test_event_stream_dispatch() {
    let mut ed = editor();

    ed.apply(EditorEvent::SwatchClick(TileKind::Water.palette_index()));
    assert_eq!(ed.selected(), TileKind::Water);

    ed.apply(EditorEvent::Down { x: 0, y: 0 });
    ed.apply(EditorEvent::Enter { x: 1, y: 0 });
    ed.apply(EditorEvent::Up);
    ed.apply(EditorEvent::Leave { x: 1, y: 0 });

    assert_eq!(ed.tile(0, 0), Some(TileKind::Water));
    assert_eq!(ed.tile(1, 0), Some(TileKind::Water));
    assert!(!ed.drawing());
}
