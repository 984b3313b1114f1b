//! Core logic module - pure, deterministic, and testable
//!
//! Everything the editor and the player sprite do lives here, with **zero
//! dependencies** on terminal I/O. The terminal view is a projection of
//! this state; it is never the source of truth.
//!
//! # Module structure
//!
//! - [`map`]: the tile grid, flat row-major storage with bounds-checked
//!   access and the walkability query
//! - [`editor`]: palette selection and the pointer-drag paint state machine
//! - [`player`]: discrete sprite movement with terrain collision
//!
//! # Example
//!
//! ```
//! use tui_tilepaint_core::{MapEditor, Player};
//! use tui_tilepaint_types::{Direction, EditorEvent, MapConfig, TileKind};
//!
//! let mut editor = MapEditor::new(MapConfig::default());
//! editor.select_swatch(TileKind::Sand);
//! editor.apply(EditorEvent::Down { x: 1, y: 0 });
//! editor.apply(EditorEvent::Up);
//! assert_eq!(editor.tile(1, 0), Some(TileKind::Sand));
//!
//! let mut player = Player::new(0, 0);
//! assert!(player.request_move(Direction::Right, editor.map()));
//! assert_eq!((player.x, player.y), (1, 0));
//! ```

pub mod editor;
pub mod map;
pub mod player;

pub use editor::MapEditor;
pub use map::TileMap;
pub use player::Player;

pub use tui_tilepaint_types as types;
