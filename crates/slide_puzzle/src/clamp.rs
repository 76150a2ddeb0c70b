use bevy::prelude::*;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::field::PlayField;
use crate::tile::TileRect;

/// Field edges, declared in the order overflow is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum FieldEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl FieldEdge {
    fn is_crossed_by(self, rect: &TileRect, field: &PlayField) -> bool {
        match self {
            Self::Left => rect.origin.x < 0.,
            Self::Right => rect.right() > field.size.x,
            Self::Top => rect.origin.y < 0.,
            Self::Bottom => rect.bottom() > field.size.y,
        }
    }

    fn pull_back(self, rect: TileRect, field: &PlayField) -> TileRect {
        let origin = match self {
            Self::Left => Vec2::new(0., rect.origin.y),
            Self::Right => Vec2::new(field.size.x - rect.size.x, rect.origin.y),
            Self::Top => Vec2::new(rect.origin.x, 0.),
            Self::Bottom => Vec2::new(rect.origin.x, field.size.y - rect.size.y),
        };
        rect.with_origin(origin)
    }
}

/// Pulls `rect` back across the first edge it overflows. At most one edge is corrected per call.
pub fn clamp_to_field(rect: TileRect, field: &PlayField) -> TileRect {
    FieldEdge::iter()
        .find(|edge| edge.is_crossed_by(&rect, field))
        .map_or(rect, |edge| edge.pull_back(rect, field))
}
