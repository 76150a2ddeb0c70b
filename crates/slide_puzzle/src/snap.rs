use bevy::prelude::*;
use tracing::debug;

use crate::config::SnapTarget;
use crate::field::PlayField;
use crate::layout::GridLayout;
use crate::shuffle::AxisSequence;
use crate::tile::Tile;

/// The offset closest to `position`, scanning in sequence order.
///
/// Starts from a distance of one cell and only accepts strictly closer offsets, so ties keep
/// the earlier offset and a position a full cell away from everything resolves to `0`.
pub fn nearest_offset(offsets: impl IntoIterator<Item = f32>, position: f32, cell_extent: f32) -> f32 {
    let mut best = cell_extent;
    let mut nearest = 0.;
    for offset in offsets {
        let distance = (offset - position).abs();
        if distance < best {
            best = distance;
            nearest = offset;
        }
    }
    nearest
}

/// Where released tiles land.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapResolver {
    /// Draws new shuffled offsets for every release.
    Reshuffled,
    /// Uses the offsets the board was laid out with.
    FixedGrid { xs: AxisSequence, ys: AxisSequence },
}

impl SnapResolver {
    pub fn new(target: SnapTarget, layout: &GridLayout) -> Self {
        match target {
            SnapTarget::Reshuffled => Self::Reshuffled,
            SnapTarget::FixedGrid => Self::FixedGrid {
                xs: layout.xs().clone(),
                ys: layout.ys().clone(),
            },
        }
    }

    /// Grid-aligned top-left corner for a tile currently at `origin`, each axis resolved on its own.
    pub fn resolve(&self, origin: Vec2, field: &PlayField) -> Vec2 {
        let cell = field.cell_size();
        match self {
            Self::Reshuffled => Vec2::new(
                nearest_offset(AxisSequence::shuffled(field.dimension, field.size.x), origin.x, cell.x),
                nearest_offset(AxisSequence::shuffled(field.dimension, field.size.y), origin.y, cell.y),
            ),
            Self::FixedGrid { xs, ys } => Vec2::new(
                nearest_offset(xs.as_slice().iter().copied(), origin.x, cell.x),
                nearest_offset(ys.as_slice().iter().copied(), origin.y, cell.y),
            ),
        }
    }

    pub fn snap(&self, tile: &mut Tile, field: &PlayField) {
        let target = self.resolve(tile.rect.origin, field);
        debug!(tile = %tile.id, from = ?tile.rect.origin, to = ?target, "tile snapped");
        tile.rect = tile.rect.with_origin(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{TileId, TileRect};

    const FIELD: PlayField = PlayField::new(Vec2::new(500., 525.), 4);

    #[test]
    fn nearest_offset_minimises_distance() {
        assert_eq!(nearest_offset([250., 0., 375., 125.], 130., 125.), 125., "x axis");
        assert_eq!(nearest_offset([131.25, 393.75, 0., 262.5], 5., 131.25), 0., "y axis");
        assert_eq!(nearest_offset([0., 125., 250., 375.], 310., 125.), 250., "closer below");
    }

    #[test]
    fn ties_keep_the_first_offset_seen() {
        assert_eq!(nearest_offset([0., 10.], 5., 20.), 0., "0 comes first");
        assert_eq!(nearest_offset([10., 0.], 5., 20.), 10., "10 comes first");
    }

    #[test]
    fn nothing_within_a_cell_resolves_to_zero() {
        assert_eq!(nearest_offset([300.], 100., 125.), 0., "starting distance is one cell");
        assert_eq!(nearest_offset(std::iter::empty(), 42., 125.), 0., "no offsets");
    }

    #[test]
    fn reshuffled_snap_lands_on_the_nearest_cell() {
        let mut tile = Tile {
            id: TileId(1),
            rect: TileRect::new(Vec2::new(130., 5.), FIELD.cell_size()),
        };
        for _ in 0..16 {
            SnapResolver::Reshuffled.snap(&mut tile, &FIELD);
            assert_eq!(tile.rect.origin, Vec2::new(125., 0.), "order of offsets does not matter here");
            tile.rect.origin = Vec2::new(130., 5.);
        }
    }

    #[test]
    fn fixed_grid_uses_the_layout_offsets() {
        let layout = GridLayout::from_axes(
            FIELD,
            AxisSequence::ordered(4, 500.),
            AxisSequence::ordered(4, 525.),
        );
        let resolver = SnapResolver::new(SnapTarget::FixedGrid, &layout);
        assert_eq!(
            resolver.resolve(Vec2::new(320., 380.), &FIELD),
            Vec2::new(375., 393.75),
            "snaps to the far cell"
        );
        assert_eq!(
            SnapResolver::new(SnapTarget::Reshuffled, &layout),
            SnapResolver::Reshuffled,
            "reshuffling keeps no offsets"
        );
    }
}
