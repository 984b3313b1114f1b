//! Terminal tile-map painter (default binary).
//!
//! Paint terrain with the mouse (click or drag across the map, click a
//! palette swatch to change brush) and walk the sprite with the arrow keys.
//! Obstacle tiles block the sprite; painting over them opens the way again.
//!
//! The loop is fully event-driven: render, block on the next terminal
//! event, dispatch, repeat. There are no timers.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tilepaint::core::{MapEditor, Player};
use tui_tilepaint::input::{handle_key_event, should_quit, PointerTracker};
use tui_tilepaint::term::{MapView, TerminalRenderer, Viewport};
use tui_tilepaint::types::{AppAction, MapConfig};

fn main() -> Result<()> {
    let config = map_config_from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: MapConfig) -> Result<()> {
    let mut editor = MapEditor::new(config);
    // The default map is all grass, so (0, 0) is walkable.
    let mut player = Player::new(0, 0);
    let view = MapView::default();
    let mut tracker = PointerTracker::new();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let fb = view.render(&editor, &player, viewport);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    match action {
                        AppAction::Move(direction) => {
                            player.request_move(direction, editor.map());
                        }
                        AppAction::SelectSwatch(index) => editor.select_swatch_index(index),
                        AppAction::NextSwatch => editor.cycle_swatch(1),
                        AppAction::PrevSwatch => editor.cycle_swatch(-1),
                    }
                }
            }
            Event::Mouse(mouse) => {
                let target = view.hit_test(&editor, viewport, mouse.column, mouse.row);
                for ev in tracker.handle_mouse(mouse.kind, target) {
                    editor.apply(ev);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

/// Map dimensions, with optional environment overrides.
///
/// `TILEPAINT_WIDTH` / `TILEPAINT_HEIGHT` must parse as positive integers;
/// anything else falls back to the defaults.
fn map_config_from_env() -> MapConfig {
    let mut config = MapConfig::default();
    if let Some(width) = env_dimension("TILEPAINT_WIDTH") {
        config.width = width;
    }
    if let Some(height) = env_dimension("TILEPAINT_HEIGHT") {
        config.height = height;
    }
    config
}

fn env_dimension(name: &str) -> Option<i16> {
    std::env::var(name)
        .ok()?
        .trim()
        .parse::<i16>()
        .ok()
        .filter(|v| *v > 0)
}
