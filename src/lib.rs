//! tui-tilepaint (workspace facade crate).
//!
//! This package keeps a stable `tui_tilepaint::{core,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_tilepaint_core as core;
pub use tui_tilepaint_input as input;
pub use tui_tilepaint_term as term;
pub use tui_tilepaint_types as types;
