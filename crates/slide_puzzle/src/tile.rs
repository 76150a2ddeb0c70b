use core::fmt;

use bevy::prelude::*;

/// Tile identity, `1..=N*N-1`. Also names the tile's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axis-aligned rectangle in field coordinates: origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl TileRect {
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.
    }

    /// Half-open containment: the left and top edges belong to the rectangle, the right and bottom ones don't.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.right()
            && point.y < self.bottom()
    }

    #[must_use]
    pub fn translated(self, delta: Vec2) -> Self {
        Self::new(self.origin + delta, self.size)
    }

    #[must_use]
    pub const fn with_origin(self, origin: Vec2) -> Self {
        Self::new(origin, self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub rect: TileRect,
}
