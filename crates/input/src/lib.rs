//! Terminal input module.
//!
//! Maps `crossterm` events into application actions and editor events. The
//! pointer tracker is the single global subscription to the terminal mouse
//! stream: it synthesizes per-cell enter/leave/down/up events so the editor
//! never registers anything per cell.

pub mod map;
pub mod pointer;

pub use tui_tilepaint_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::PointerTracker;
