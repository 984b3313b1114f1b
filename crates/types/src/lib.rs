//! Shared types module - data structures and constants
//!
//! Pure data types with no external dependencies, usable from the core
//! logic, the input layer, and the terminal view alike.
//!
//! # Map dimensions
//!
//! The default map is 30 columns by 15 rows. Cell coordinates are signed
//! (`i16`) throughout so that "one step past the edge" is an ordinary
//! representable coordinate that bounds checks reject, rather than an
//! unsigned wrap hazard.
//!
//! # Tile catalog
//!
//! [`TileKind`] is the fixed catalog of paintable tiles. Each kind carries a
//! static walkability classification: terrain kinds can be walked on by the
//! player, obstacle kinds block it. The classification is an exhaustive
//! `match`, so a kind without a classification cannot exist.

/// Default map dimensions (in tiles).
pub const DEFAULT_MAP_WIDTH: i16 = 30;
pub const DEFAULT_MAP_HEIGHT: i16 = 15;

/// Size of one tile in display pixels.
///
/// The display surface positions the player sprite at grid coordinate
/// multiplied by this size.
pub const TILE_SIZE_PX: i32 = 25;

/// Map dimensions, fixed for the lifetime of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapConfig {
    pub width: i16,
    pub height: i16,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
        }
    }
}

/// A paintable tile kind (a palette "swatch").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Grass,
    FlowersRed,
    FlowersBlue,
    Weeds,
    Field,
    Sand,
    Path,
    Water,
    DeepWater,
    Rock,
    Tree,
}

impl TileKind {
    /// Every kind, in palette order.
    pub const CATALOG: [TileKind; 11] = [
        TileKind::Grass,
        TileKind::FlowersRed,
        TileKind::FlowersBlue,
        TileKind::Weeds,
        TileKind::Field,
        TileKind::Sand,
        TileKind::Path,
        TileKind::Water,
        TileKind::DeepWater,
        TileKind::Rock,
        TileKind::Tree,
    ];

    /// The default terrain every map cell starts as.
    pub const DEFAULT: TileKind = TileKind::Grass;

    /// Whether the player may stand on this kind of tile.
    pub fn walkable(self) -> bool {
        match self {
            TileKind::Grass
            | TileKind::FlowersRed
            | TileKind::FlowersBlue
            | TileKind::Weeds
            | TileKind::Field
            | TileKind::Sand
            | TileKind::Path => true,
            TileKind::Water | TileKind::DeepWater | TileKind::Rock | TileKind::Tree => false,
        }
    }

    /// Position of this kind within [`TileKind::CATALOG`].
    pub fn palette_index(self) -> usize {
        // CATALOG covers every variant, so the lookup always succeeds.
        Self::CATALOG
            .iter()
            .position(|k| *k == self)
            .unwrap_or_default()
    }

    /// Parse a kind from its name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grass" => Some(TileKind::Grass),
            "flowers-red" => Some(TileKind::FlowersRed),
            "flowers-blue" => Some(TileKind::FlowersBlue),
            "weeds" => Some(TileKind::Weeds),
            "field" => Some(TileKind::Field),
            "sand" => Some(TileKind::Sand),
            "path" => Some(TileKind::Path),
            "water" => Some(TileKind::Water),
            "deep-water" => Some(TileKind::DeepWater),
            "rock" => Some(TileKind::Rock),
            "tree" => Some(TileKind::Tree),
            _ => None,
        }
    }

    /// Convert to the kind's name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Grass => "grass",
            TileKind::FlowersRed => "flowers-red",
            TileKind::FlowersBlue => "flowers-blue",
            TileKind::Weeds => "weeds",
            TileKind::Field => "field",
            TileKind::Sand => "sand",
            TileKind::Path => "path",
            TileKind::Water => "water",
            TileKind::DeepWater => "deep-water",
            TileKind::Rock => "rock",
            TileKind::Tree => "tree",
        }
    }
}

/// Facing / movement direction for the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this direction in grid coordinates.
    ///
    /// Y grows downward, matching row-major grid order.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// One event delivered to the editor by the input source.
///
/// Enter/leave/down carry the cell they happened over; `Up` is global
/// because the pointer may be released outside the last-entered cell, and
/// releasing anywhere must end the drag session. `SwatchClick` selects a
/// palette entry by its catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Enter { x: i16, y: i16 },
    Leave { x: i16, y: i16 },
    Down { x: i16, y: i16 },
    Up,
    SwatchClick(usize),
}

/// What a terminal position resolves to when hit-testing the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Cell { x: i16, y: i16 },
    Swatch(usize),
}

/// Application-level actions produced by the key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Move(Direction),
    SelectSwatch(usize),
    NextSwatch,
    PrevSwatch,
}
