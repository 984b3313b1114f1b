//! MapView: projects editor and player state into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. It draws the palette
//! strip, the bordered map, the player sprite, and a status line, all from
//! the editor's *display* projection, so hover previews and mid-drag paints
//! show up without the view ever owning state.
//!
//! The view also owns the inverse mapping: [`MapView::hit_test`] resolves
//! a terminal position to the map cell or palette swatch under it, which is
//! what the pointer tracker consumes. Rendering and hit-testing share one
//! layout calculation so they cannot drift apart.

use crate::core::{MapEditor, Player};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, Target, TileKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the view's regions land inside a viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    palette_x: u16,
    palette_y: u16,
    /// Top-left of the map frame (border included).
    map_x: u16,
    map_y: u16,
    frame_w: u16,
    frame_h: u16,
    status_y: u16,
}

/// Terminal renderer for the map editor.
pub struct MapView {
    /// Map cell width in terminal columns.
    cell_w: u16,
    /// Map cell height in terminal rows.
    cell_h: u16,
}

impl Default for MapView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl MapView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn layout(&self, map_w: i16, map_h: i16, viewport: Viewport) -> Layout {
        let frame_w = (map_w as u16) * self.cell_w + 2;
        let frame_h = (map_h as u16) * self.cell_h + 2;
        // Palette row, gap, map frame, gap, status row.
        let total_h = frame_h + 4;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(total_h) / 2;

        Layout {
            palette_x: start_x,
            palette_y: start_y,
            map_x: start_x,
            map_y: start_y + 2,
            frame_w,
            frame_h,
            status_y: start_y + 2 + frame_h + 1,
        }
    }

    /// Columns from one palette swatch's start to the next.
    fn swatch_stride(&self) -> u16 {
        self.cell_w + 1
    }

    /// Render the current state into a framebuffer.
    pub fn render(&self, editor: &MapEditor, player: &Player, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let map = editor.map();
        let layout = self.layout(map.width(), map.height(), viewport);

        self.draw_palette(&mut fb, editor, layout);
        self.draw_map(&mut fb, editor, layout);
        self.draw_player(&mut fb, editor, player, layout);
        self.draw_status(&mut fb, editor, player, layout);

        fb
    }

    /// Resolve a terminal position to the map cell or palette swatch under
    /// it. Uses the same layout as [`MapView::render`].
    pub fn hit_test(
        &self,
        editor: &MapEditor,
        viewport: Viewport,
        col: u16,
        row: u16,
    ) -> Option<Target> {
        let map = editor.map();
        let layout = self.layout(map.width(), map.height(), viewport);

        if row == layout.palette_y {
            let rel = col.checked_sub(layout.palette_x)?;
            let index = (rel / self.swatch_stride()) as usize;
            let within = rel % self.swatch_stride() < self.cell_w;
            if within && index < TileKind::CATALOG.len() {
                return Some(Target::Swatch(index));
            }
            return None;
        }

        // Map interior, border excluded.
        let rel_x = col.checked_sub(layout.map_x + 1)?;
        let rel_y = row.checked_sub(layout.map_y + 1)?;
        let x = (rel_x / self.cell_w) as i16;
        let y = (rel_y / self.cell_h) as i16;
        if map.in_bounds(x, y) && rel_x < (map.width() as u16) * self.cell_w {
            return Some(Target::Cell { x, y });
        }

        None
    }

    fn draw_palette(&self, fb: &mut FrameBuffer, editor: &MapEditor, layout: Layout) {
        for (i, kind) in TileKind::CATALOG.iter().enumerate() {
            let sx = layout.palette_x + (i as u16) * self.swatch_stride();
            let (ch, mut style) = tile_appearance(*kind);
            let selected = *kind == editor.selected();
            if selected {
                style.bold = true;
            }
            fb.fill_rect(sx, layout.palette_y, self.cell_w, 1, ch, style);

            if selected {
                let marker = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
                if sx > 0 {
                    fb.put_char(sx - 1, layout.palette_y, '[', marker);
                }
                fb.put_char(sx + self.cell_w, layout.palette_y, ']', marker);
            }
        }
    }

    fn draw_map(&self, fb: &mut FrameBuffer, editor: &MapEditor, layout: Layout) {
        let map = editor.map();
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(
            fb,
            layout.map_x,
            layout.map_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for y in 0..map.height() {
            for x in 0..map.width() {
                // In-bounds coordinates always project to a tile.
                let kind = editor.display_tile(x, y).unwrap_or(TileKind::DEFAULT);
                let (ch, style) = tile_appearance(kind);
                self.fill_cell(fb, layout, x, y, ch, style);
            }
        }
    }

    fn draw_player(
        &self,
        fb: &mut FrameBuffer,
        editor: &MapEditor,
        player: &Player,
        layout: Layout,
    ) {
        if !editor.map().in_bounds(player.x, player.y) {
            return;
        }

        let (_, under) = tile_appearance(
            editor
                .display_tile(player.x, player.y)
                .unwrap_or(TileKind::DEFAULT),
        );
        let style = CellStyle::new(Rgb::new(255, 235, 80), under.bg).bold();

        self.fill_cell(fb, layout, player.x, player.y, ' ', style);
        let px = layout.map_x + 1 + (player.x as u16) * self.cell_w + (self.cell_w - 1) / 2;
        let py = layout.map_y + 1 + (player.y as u16) * self.cell_h + (self.cell_h - 1) / 2;
        fb.put_char(px, py, facing_glyph(player.facing), style);
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        editor: &MapEditor,
        player: &Player,
        layout: Layout,
    ) {
        let status = format!(
            "brush: {}{}  player: ({}, {}) facing {}",
            editor.selected().as_str(),
            if editor.drawing() { " (painting)" } else { "" },
            player.x,
            player.y,
            player.facing.as_str(),
        );
        fb.put_str(layout.map_x, layout.status_y, &status, CellStyle::default());
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        x: i16,
        y: i16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.map_x + 1 + (x as u16) * self.cell_w;
        let py = layout.map_y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

/// Glyph and style for one tile kind.
fn tile_appearance(kind: TileKind) -> (char, CellStyle) {
    let (ch, fg, bg) = match kind {
        TileKind::Grass => ('·', Rgb::new(110, 170, 80), Rgb::new(40, 80, 40)),
        TileKind::FlowersRed => ('*', Rgb::new(225, 95, 95), Rgb::new(40, 80, 40)),
        TileKind::FlowersBlue => ('*', Rgb::new(115, 135, 230), Rgb::new(40, 80, 40)),
        TileKind::Weeds => ('"', Rgb::new(140, 185, 85), Rgb::new(40, 80, 40)),
        TileKind::Field => ('=', Rgb::new(175, 145, 75), Rgb::new(95, 75, 40)),
        TileKind::Sand => ('░', Rgb::new(225, 205, 140), Rgb::new(165, 145, 95)),
        TileKind::Path => ('▒', Rgb::new(190, 180, 160), Rgb::new(120, 110, 90)),
        TileKind::Water => ('~', Rgb::new(120, 170, 230), Rgb::new(40, 70, 140)),
        TileKind::DeepWater => ('≈', Rgb::new(85, 125, 205), Rgb::new(20, 40, 100)),
        TileKind::Rock => ('▲', Rgb::new(155, 155, 155), Rgb::new(70, 70, 70)),
        TileKind::Tree => ('♠', Rgb::new(45, 125, 65), Rgb::new(30, 60, 35)),
    };
    (ch, CellStyle::new(fg, bg))
}

fn facing_glyph(facing: Direction) -> char {
    match facing {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
