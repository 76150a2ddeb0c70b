use bevy::prelude::*;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::trace;

use crate::registry::TileRegistry;
use crate::tile::{Tile, TileRect};

/// Move directions, declared in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn is_requested_by(self, delta: Vec2) -> bool {
        match self {
            Self::Up => delta.y < 0.,
            Self::Down => delta.y > 0.,
            Self::Left => delta.x < 0.,
            Self::Right => delta.x > 0.,
        }
    }

    /// The single point, one pixel past the leading edge, that must be free for the move.
    pub fn probe(self, rect: &TileRect) -> Vec2 {
        let center = rect.center();
        match self {
            Self::Up => Vec2::new(center.x - 1., rect.origin.y - 1.),
            Self::Down => Vec2::new(center.x, rect.bottom() + 1.),
            Self::Left => Vec2::new(rect.origin.x - 1., center.y),
            Self::Right => Vec2::new(rect.right() + 1., center.y),
        }
    }

    fn step(self, delta: Vec2) -> Vec2 {
        match self {
            Self::Up | Self::Down => Vec2::new(0., delta.y),
            Self::Left | Self::Right => Vec2::new(delta.x, 0.),
        }
    }
}

/// The part of `delta` that `tile` may move by: one axis of the first requested direction
/// whose probe is free, or `None` when every requested direction is blocked.
pub fn permitted_step(tiles: &TileRegistry, tile: &Tile, delta: Vec2) -> Option<Vec2> {
    Direction::iter()
        .filter(|direction| direction.is_requested_by(delta))
        .find(|direction| {
            let blocked = tiles.is_occupied_by_other(direction.probe(&tile.rect), tile.id);
            if blocked {
                trace!(tile = %tile.id, %direction, "move blocked");
            }
            !blocked
        })
        .map(|direction| direction.step(delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileId;

    fn tile(id: u32, x: f32, y: f32) -> Tile {
        Tile {
            id: TileId(id),
            rect: TileRect::new(Vec2::new(x, y), Vec2::splat(100.)),
        }
    }

    fn registry(tiles: &[Tile]) -> TileRegistry {
        let mut registry = TileRegistry::default();
        for tile in tiles {
            registry.insert(*tile);
        }
        registry
    }

    #[test]
    fn probes_sit_one_pixel_outside() {
        let rect = TileRect::new(Vec2::new(100., 200.), Vec2::new(100., 50.));
        assert_eq!(Direction::Up.probe(&rect), Vec2::new(149., 199.), "up probe");
        assert_eq!(Direction::Down.probe(&rect), Vec2::new(150., 251.), "down probe");
        assert_eq!(Direction::Left.probe(&rect), Vec2::new(99., 225.), "left probe");
        assert_eq!(Direction::Right.probe(&rect), Vec2::new(201., 225.), "right probe");
    }

    #[test]
    fn free_tile_moves_along_one_axis_only() {
        let lone = tile(1, 100., 100.);
        let tiles = registry(&[lone]);
        assert_eq!(
            permitted_step(&tiles, &lone, Vec2::new(7., -3.)),
            Some(Vec2::new(0., -3.)),
            "vertical wins over horizontal"
        );
        assert_eq!(
            permitted_step(&tiles, &lone, Vec2::new(-4., 0.)),
            Some(Vec2::new(-4., 0.)),
            "pure horizontal drag"
        );
        assert_eq!(permitted_step(&tiles, &lone, Vec2::ZERO), None, "no delta, no move");
    }

    #[test]
    fn neighbour_blocks_the_move() {
        let left = tile(1, 0., 0.);
        let right = tile(2, 100., 0.);
        let tiles = registry(&[left, right]);
        assert_eq!(permitted_step(&tiles, &left, Vec2::new(10., 0.)), None, "right is taken");
        assert_eq!(permitted_step(&tiles, &right, Vec2::new(-10., 0.)), None, "left is taken");
    }

    #[test]
    fn blocked_vertical_falls_through_to_horizontal() {
        let above = tile(1, 100., 0.);
        let moving = tile(2, 100., 100.);
        let tiles = registry(&[above, moving]);
        assert_eq!(
            permitted_step(&tiles, &moving, Vec2::new(-5., -5.)),
            Some(Vec2::new(-5., 0.)),
            "up is blocked so left is tried"
        );
        assert_eq!(
            permitted_step(&tiles, &moving, Vec2::new(0., -5.)),
            None,
            "nothing else was requested"
        );
    }

    #[test]
    fn gap_smaller_than_a_pixel_still_blocks() {
        let below = tile(1, 0., 100.5);
        let moving = tile(2, 0., 0.);
        let tiles = registry(&[below, moving]);
        assert_eq!(permitted_step(&tiles, &moving, Vec2::new(0., 3.)), None, "probe lands in the tile below");
    }
}
