//! Editor module - palette selection and the paint state machine
//!
//! The editor owns the tile map and translates pointer gestures into cell
//! mutations. The committed map is the only source of truth; the hover
//! preview is a projection layered on top of it by [`MapEditor::display_tile`],
//! so "revert on leave" is just the projection falling back to committed
//! state rather than a cached pre-hover value.
//!
//! Paint semantics:
//!
//! - pointer-down over a cell starts a drag session and commits immediately
//! - pointer-enter previews the selected swatch always, commits only while
//!   a drag session is active
//! - pointer-leave drops the preview; committed paint is unaffected
//! - pointer-up ends the drag session unconditionally, wherever the pointer
//!   is (the release may happen outside the last-entered cell)

use tui_tilepaint_types::{EditorEvent, MapConfig, TileKind};

use crate::map::TileMap;

/// The map editor: grid contents plus transient paint state.
#[derive(Debug, Clone)]
pub struct MapEditor {
    map: TileMap,
    /// Currently selected palette swatch. A single field, so exactly one
    /// swatch is selected at all times.
    selected: TileKind,
    /// True between pointer-down over a cell and the next pointer-up.
    drawing: bool,
    /// Cell currently under the pointer, shown as a preview of `selected`.
    hover: Option<(i16, i16)>,
}

impl MapEditor {
    pub fn new(config: MapConfig) -> Self {
        Self {
            map: TileMap::new(config),
            selected: TileKind::DEFAULT,
            drawing: false,
            hover: None,
        }
    }

    /// Read-only view of the grid, for the player and the display.
    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn selected(&self) -> TileKind {
        self.selected
    }

    pub fn drawing(&self) -> bool {
        self.drawing
    }

    /// Committed tile at (x, y), ignoring any hover preview.
    pub fn tile(&self, x: i16, y: i16) -> Option<TileKind> {
        self.map.get(x, y)
    }

    /// Tile as the display should show it: the selected swatch while the
    /// cell is hovered, the committed tile otherwise.
    pub fn display_tile(&self, x: i16, y: i16) -> Option<TileKind> {
        if !self.map.in_bounds(x, y) {
            return None;
        }
        if self.hover == Some((x, y)) {
            return Some(self.selected);
        }
        self.map.get(x, y)
    }

    /// Select a palette swatch. Selecting a new one implicitly deselects
    /// the previous one.
    pub fn select_swatch(&mut self, kind: TileKind) {
        self.selected = kind;
    }

    /// Select a swatch by catalog index. Out-of-range indices are ignored.
    pub fn select_swatch_index(&mut self, index: usize) {
        if let Some(kind) = TileKind::CATALOG.get(index) {
            self.selected = *kind;
        }
    }

    /// Move the selection forward or backward through the catalog,
    /// wrapping at either end.
    pub fn cycle_swatch(&mut self, step: isize) {
        let len = TileKind::CATALOG.len() as isize;
        let current = self.selected.palette_index() as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.selected = TileKind::CATALOG[next];
    }

    /// Pointer entered a cell. Previews always; commits while drawing.
    pub fn pointer_enter(&mut self, x: i16, y: i16) {
        if !self.map.in_bounds(x, y) {
            return;
        }
        self.hover = Some((x, y));
        if self.drawing {
            self.map.set(x, y, self.selected);
        }
    }

    /// Pointer left a cell. Drops the preview; the display falls back to
    /// the committed tile.
    pub fn pointer_leave(&mut self, x: i16, y: i16) {
        if self.hover == Some((x, y)) {
            self.hover = None;
        }
    }

    /// Pointer pressed over a cell. Starts the drag session and commits
    /// immediately.
    pub fn pointer_down(&mut self, x: i16, y: i16) {
        if !self.map.in_bounds(x, y) {
            return;
        }
        self.drawing = true;
        self.hover = Some((x, y));
        self.map.set(x, y, self.selected);
    }

    /// Pointer released, anywhere. Ends the drag session unconditionally;
    /// idempotent when no session is active.
    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    /// Apply one input-source event.
    pub fn apply(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::Enter { x, y } => self.pointer_enter(x, y),
            EditorEvent::Leave { x, y } => self.pointer_leave(x, y),
            EditorEvent::Down { x, y } => self.pointer_down(x, y),
            EditorEvent::Up => self.pointer_up(),
            EditorEvent::SwatchClick(index) => self.select_swatch_index(index),
        }
    }
}

impl Default for MapEditor {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}
