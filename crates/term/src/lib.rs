//! Terminal rendering module.
//!
//! A small game-style rendering layer: the map view projects editor and
//! player state into a styled-character framebuffer (pure, unit-testable),
//! and the renderer flushes framebuffers to the real terminal with
//! diff-based redraws. The view also answers the inverse question, mapping
//! a terminal position back to the map cell or palette swatch under it,
//! which is what the mouse pipeline hit-tests against.

pub mod fb;
pub mod map_view;
pub mod renderer;

pub use tui_tilepaint_core as core;
pub use tui_tilepaint_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use map_view::{MapView, Viewport};
pub use renderer::TerminalRenderer;
