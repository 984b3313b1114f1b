//! Map module - the tile grid
//!
//! The map is a `width x height` grid where every cell always holds a valid
//! [`TileKind`]. Uses a flat vector in row-major order (y * width + x).
//! Coordinates are signed; out-of-bounds reads return `None` and
//! out-of-bounds writes are rejected, so edge coordinates are ordinary
//! values rather than errors.

use tui_tilepaint_types::{MapConfig, TileKind};

/// The tile grid. Exclusively owned and mutated by the editor; the player
/// only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: i16,
    height: i16,
    /// Flat cell storage, row-major order (y * width + x).
    cells: Vec<TileKind>,
}

impl TileMap {
    /// Create a map of the given dimensions, filled with the default
    /// terrain.
    pub fn new(config: MapConfig) -> Self {
        let width = config.width.max(1);
        let height = config.height.max(1);
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![TileKind::DEFAULT; len],
        }
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Tile at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<TileKind> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the tile at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i16, y: i16, kind: TileKind) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// Whether the player may stand at (x, y).
    ///
    /// False outside the map; otherwise the tile's own classification.
    /// A missing cell is never walkable, it is not an error.
    pub fn is_walkable(&self, x: i16, y: i16) -> bool {
        self.get(x, y).map(TileKind::walkable).unwrap_or(false)
    }

    pub fn in_bounds(&self, x: i16, y: i16) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Build a map from rows of tiles, for tests.
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<TileKind>>) -> Self {
        let height = rows.len() as i16;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as i16;
        assert!(width > 0 && height > 0);
        assert!(rows.iter().all(|r| r.len() == width as usize));

        Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        }
    }
}
