//! Pointer tracker: terminal mouse stream to cell-scoped editor events.
//!
//! Terminals report absolute pointer positions (`Moved`, `Drag`, `Down`,
//! `Up` at a column/row), not per-cell enter/leave transitions. The tracker
//! remembers which cell the pointer was last over and synthesizes the
//! leave/enter pairs the editor's paint state machine consumes. Release is
//! forwarded as a global `Up` no matter where the pointer is, so a drag
//! that ends outside the map still ends.

use arrayvec::ArrayVec;
use crossterm::event::{MouseButton, MouseEventKind};

use crate::types::{EditorEvent, Target};

/// Maximum events one mouse event can expand into (leave + enter/down).
const MAX_EVENTS: usize = 3;

/// Stateful translator from the terminal mouse stream to [`EditorEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Cell the pointer was last seen over, if any.
    hovered: Option<(i16, i16)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<(i16, i16)> {
        self.hovered
    }

    /// Feed one terminal mouse event, already hit-tested against the view.
    ///
    /// `target` is what the pointer position resolves to: a map cell, a
    /// palette swatch, or nothing. Returns the editor events to apply, in
    /// order. Buttons other than the primary one are ignored.
    pub fn handle_mouse(
        &mut self,
        kind: MouseEventKind,
        target: Option<Target>,
    ) -> ArrayVec<EditorEvent, MAX_EVENTS> {
        let mut events = ArrayVec::new();

        match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.track_hover(target, &mut events);
            }
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(Target::Cell { x, y }) => {
                    self.leave_if_elsewhere((x, y), &mut events);
                    self.hovered = Some((x, y));
                    events.push(EditorEvent::Down { x, y });
                }
                Some(Target::Swatch(index)) => {
                    events.push(EditorEvent::SwatchClick(index));
                }
                None => {}
            },
            MouseEventKind::Up(MouseButton::Left) => {
                // Global: ends the drag session wherever the release lands.
                events.push(EditorEvent::Up);
                self.track_hover(target, &mut events);
            }
            _ => {}
        }

        events
    }

    fn track_hover(
        &mut self,
        target: Option<Target>,
        events: &mut ArrayVec<EditorEvent, MAX_EVENTS>,
    ) {
        match target {
            Some(Target::Cell { x, y }) => {
                if self.hovered == Some((x, y)) {
                    return;
                }
                self.leave_if_elsewhere((x, y), events);
                self.hovered = Some((x, y));
                events.push(EditorEvent::Enter { x, y });
            }
            // Off the map (or over the palette): just leave the old cell.
            Some(Target::Swatch(_)) | None => {
                if let Some((x, y)) = self.hovered.take() {
                    events.push(EditorEvent::Leave { x, y });
                }
            }
        }
    }

    fn leave_if_elsewhere(
        &mut self,
        cell: (i16, i16),
        events: &mut ArrayVec<EditorEvent, MAX_EVENTS>,
    ) {
        if let Some((x, y)) = self.hovered {
            if (x, y) != cell {
                events.push(EditorEvent::Leave { x, y });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: i16, y: i16) -> Option<Target> {
        Some(Target::Cell { x, y })
    }

    #[test]
    fn move_onto_cell_emits_enter() {
        let mut tracker = PointerTracker::new();
        let events = tracker.handle_mouse(MouseEventKind::Moved, cell(2, 1));
        assert_eq!(events.as_slice(), &[EditorEvent::Enter { x: 2, y: 1 }]);
        assert_eq!(tracker.hovered(), Some((2, 1)));
    }

    #[test]
    fn move_between_cells_emits_leave_then_enter() {
        let mut tracker = PointerTracker::new();
        tracker.handle_mouse(MouseEventKind::Moved, cell(0, 0));
        let events = tracker.handle_mouse(MouseEventKind::Moved, cell(1, 0));
        assert_eq!(
            events.as_slice(),
            &[
                EditorEvent::Leave { x: 0, y: 0 },
                EditorEvent::Enter { x: 1, y: 0 },
            ]
        );
    }

    #[test]
    fn move_within_cell_emits_nothing() {
        let mut tracker = PointerTracker::new();
        tracker.handle_mouse(MouseEventKind::Moved, cell(0, 0));
        let events = tracker.handle_mouse(MouseEventKind::Moved, cell(0, 0));
        assert!(events.is_empty());
    }

    #[test]
    fn move_off_map_emits_leave() {
        let mut tracker = PointerTracker::new();
        tracker.handle_mouse(MouseEventKind::Moved, cell(3, 2));
        let events = tracker.handle_mouse(MouseEventKind::Moved, None);
        assert_eq!(events.as_slice(), &[EditorEvent::Leave { x: 3, y: 2 }]);
        assert_eq!(tracker.hovered(), None);
    }

    #[test]
    fn press_over_cell_emits_down() {
        let mut tracker = PointerTracker::new();
        let events =
            tracker.handle_mouse(MouseEventKind::Down(MouseButton::Left), cell(1, 1));
        assert_eq!(events.as_slice(), &[EditorEvent::Down { x: 1, y: 1 }]);
    }

    #[test]
    fn drag_paints_through_cells() {
        let mut tracker = PointerTracker::new();
        tracker.handle_mouse(MouseEventKind::Down(MouseButton::Left), cell(0, 0));
        let events =
            tracker.handle_mouse(MouseEventKind::Drag(MouseButton::Left), cell(1, 0));
        assert_eq!(
            events.as_slice(),
            &[
                EditorEvent::Leave { x: 0, y: 0 },
                EditorEvent::Enter { x: 1, y: 0 },
            ]
        );
    }

    #[test]
    fn release_is_global() {
        let mut tracker = PointerTracker::new();
        tracker.handle_mouse(MouseEventKind::Down(MouseButton::Left), cell(0, 0));
        // Released outside the map entirely.
        let events = tracker.handle_mouse(MouseEventKind::Up(MouseButton::Left), None);
        assert_eq!(
            events.as_slice(),
            &[EditorEvent::Up, EditorEvent::Leave { x: 0, y: 0 }]
        );
    }

    #[test]
    fn press_over_palette_selects_swatch() {
        let mut tracker = PointerTracker::new();
        let events = tracker.handle_mouse(
            MouseEventKind::Down(MouseButton::Left),
            Some(Target::Swatch(4)),
        );
        assert_eq!(events.as_slice(), &[EditorEvent::SwatchClick(4)]);
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let mut tracker = PointerTracker::new();
        let events =
            tracker.handle_mouse(MouseEventKind::Down(MouseButton::Right), cell(0, 0));
        assert!(events.is_empty());
        let events = tracker.handle_mouse(MouseEventKind::ScrollUp, cell(0, 0));
        assert!(events.is_empty());
    }
}
