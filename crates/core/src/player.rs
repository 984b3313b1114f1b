//! Player module - discrete sprite movement with terrain collision
//!
//! The player occupies exactly one grid cell and faces one of four
//! directions. A move request always turns the sprite toward the requested
//! direction; the step itself only happens when the target cell is inside
//! the map and classified walkable. Blocked steps are silent bump-into-wall
//! behavior, not errors.

use tui_tilepaint_types::{Direction, TILE_SIZE_PX};

use crate::map::TileMap;

/// The player sprite's grid position and facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i16,
    pub y: i16,
    pub facing: Direction,
}

impl Player {
    /// Create a player at the given start cell.
    ///
    /// The caller is responsible for starting on walkable terrain; the
    /// start coordinate is not validated here.
    pub fn new(x: i16, y: i16) -> Self {
        Self {
            x,
            y,
            facing: Direction::Down,
        }
    }

    /// Request one step in `direction`.
    ///
    /// Facing changes even when the step is blocked: turning always
    /// succeeds, stepping does not. Returns whether the position changed.
    pub fn request_move(&mut self, direction: Direction, map: &TileMap) -> bool {
        self.facing = direction;
        let (dx, dy) = direction.delta();
        self.move_to(self.x + dx, self.y + dy, map)
    }

    /// Move to (x, y) if that cell is a valid destination; otherwise keep
    /// the current position. Returns whether the move was committed.
    pub fn move_to(&mut self, x: i16, y: i16, map: &TileMap) -> bool {
        if !self.is_valid_move(x, y, map) {
            return false;
        }
        self.x = x;
        self.y = y;
        true
    }

    /// Whether (x, y) is inside the map and walkable terrain.
    pub fn is_valid_move(&self, x: i16, y: i16, map: &TileMap) -> bool {
        map.is_walkable(x, y)
    }

    /// Display offset in pixels: grid coordinate times the tile size.
    pub fn pixel_offset(&self) -> (i32, i32) {
        (
            i32::from(self.x) * TILE_SIZE_PX,
            i32::from(self.y) * TILE_SIZE_PX,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_tilepaint_types::{MapConfig, TileKind};

    fn open_map() -> TileMap {
        TileMap::new(MapConfig {
            width: 5,
            height: 4,
        })
    }

    #[test]
    fn walkable_step_moves_and_turns() {
        let map = open_map();
        let mut player = Player::new(2, 2);

        assert!(player.request_move(Direction::Right, &map));
        assert_eq!((player.x, player.y), (3, 2));
        assert_eq!(player.facing, Direction::Right);
    }

    #[test]
    fn blocked_step_turns_but_stays() {
        let map = TileMap::from_rows(vec![vec![
            TileKind::Grass,
            TileKind::Water,
            TileKind::Grass,
        ]]);
        let mut player = Player::new(0, 0);

        assert!(!player.request_move(Direction::Right, &map));
        assert_eq!((player.x, player.y), (0, 0));
        assert_eq!(player.facing, Direction::Right);
    }

    #[test]
    fn edge_step_is_rejected_silently() {
        let map = open_map();
        let mut player = Player::new(0, 0);

        assert!(!player.request_move(Direction::Up, &map));
        assert_eq!((player.x, player.y), (0, 0));
        assert_eq!(player.facing, Direction::Up);

        assert!(!player.request_move(Direction::Left, &map));
        assert_eq!((player.x, player.y), (0, 0));
        assert_eq!(player.facing, Direction::Left);
    }

    #[test]
    fn pixel_offset_scales_by_tile_size() {
        let player = Player::new(3, 2);
        assert_eq!(player.pixel_offset(), (3 * TILE_SIZE_PX, 2 * TILE_SIZE_PX));
    }
}
