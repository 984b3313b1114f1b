//! Tile map tests - grid storage and walkability.

use tui_tilepaint::core::TileMap;
use tui_tilepaint::types::{MapConfig, TileKind, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};

#[test]
fn test_new_map_dimensions_and_default_fill() {
    let map = TileMap::new(MapConfig::default());
    assert_eq!(map.width(), DEFAULT_MAP_WIDTH);
    assert_eq!(map.height(), DEFAULT_MAP_HEIGHT);

    // Every cell holds the default terrain.
    for y in 0..map.height() {
        for x in 0..map.width() {
            assert_eq!(map.get(x, y), Some(TileKind::Grass), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let map = TileMap::new(MapConfig::default());

    assert_eq!(map.get(-1, 0), None);
    assert_eq!(map.get(0, -1), None);
    assert_eq!(map.get(DEFAULT_MAP_WIDTH, 0), None);
    assert_eq!(map.get(0, DEFAULT_MAP_HEIGHT), None);
}

#[test]
fn test_set_and_get() {
    let mut map = TileMap::new(MapConfig::default());

    assert!(map.set(5, 10, TileKind::Water));
    assert_eq!(map.get(5, 10), Some(TileKind::Water));

    assert!(map.set(5, 10, TileKind::Sand));
    assert_eq!(map.get(5, 10), Some(TileKind::Sand));
}

#[test]
fn test_set_out_of_bounds_is_rejected() {
    let mut map = TileMap::new(MapConfig::default());

    assert!(!map.set(-1, 0, TileKind::Water));
    assert!(!map.set(0, -1, TileKind::Water));
    assert!(!map.set(DEFAULT_MAP_WIDTH, 0, TileKind::Water));
    assert!(!map.set(0, DEFAULT_MAP_HEIGHT, TileKind::Water));
}

#[test]
fn test_walkability() {
    let mut map = TileMap::new(MapConfig {
        width: 3,
        height: 3,
    });

    // Default terrain is walkable.
    assert!(map.is_walkable(1, 1));

    // Obstacles are not.
    map.set(1, 1, TileKind::Rock);
    assert!(!map.is_walkable(1, 1));
    map.set(1, 1, TileKind::DeepWater);
    assert!(!map.is_walkable(1, 1));

    // Painting terrain back restores walkability.
    map.set(1, 1, TileKind::Path);
    assert!(map.is_walkable(1, 1));

    // Out of bounds is never walkable, and never an error.
    assert!(!map.is_walkable(-1, 1));
    assert!(!map.is_walkable(3, 1));
    assert!(!map.is_walkable(1, 3));
}
