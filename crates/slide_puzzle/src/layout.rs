use std::fmt::{self, Display, Formatter};

use bevy::prelude::*;
use tracing::debug;

use crate::field::PlayField;
use crate::shuffle::AxisSequence;
use crate::tile::TileId;

/// Starting positions: one shuffled sequence per axis, combined row-major.
///
/// Pair `(xs[i], ys[j])` is enumerated with `i` outer and `j` inner and gets the next tile id.
/// The final pair `(xs[n-1], ys[n-1])` stays empty.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    field: PlayField,
    xs: AxisSequence,
    ys: AxisSequence,
}

impl GridLayout {
    pub fn generate(field: &PlayField) -> Self {
        Self::from_axes(
            *field,
            AxisSequence::shuffled(field.dimension, field.size.x),
            AxisSequence::shuffled(field.dimension, field.size.y),
        )
    }

    pub fn generate_with(rng: &mut fastrand::Rng, field: &PlayField) -> Self {
        Self::from_axes(
            *field,
            AxisSequence::shuffled_with(rng, field.dimension, field.size.x),
            AxisSequence::shuffled_with(rng, field.dimension, field.size.y),
        )
    }

    pub fn from_axes(field: PlayField, xs: AxisSequence, ys: AxisSequence) -> Self {
        debug!(xs = ?xs.as_slice(), ys = ?ys.as_slice(), "grid layout generated");
        Self { field, xs, ys }
    }

    pub const fn xs(&self) -> &AxisSequence {
        &self.xs
    }

    pub const fn ys(&self) -> &AxisSequence {
        &self.ys
    }

    /// Tile ids with the top-left corner each one starts at.
    pub fn placements(&self) -> impl Iterator<Item = (TileId, Vec2)> + '_ {
        let pairs = self.xs.len() * self.ys.len();
        self.xs
            .as_slice()
            .iter()
            .flat_map(|&x| self.ys.as_slice().iter().map(move |&y| Vec2::new(x, y)))
            .take(pairs.saturating_sub(1))
            .zip(1..)
            .map(|(origin, id)| (TileId(id), origin))
    }

    /// Top-left corner of the cell left empty.
    pub fn hole(&self) -> Option<Vec2> {
        Some(Vec2::new(
            *self.xs.as_slice().last()?,
            *self.ys.as_slice().last()?,
        ))
    }

    fn cell_index(&self, origin: Vec2) -> Option<usize> {
        let cell = (origin / self.field.cell_size()).round();
        let (column, row) = (cell.x as usize, cell.y as usize);
        (column < self.field.dimension && row < self.field.dimension)
            .then_some(column + row * self.field.dimension)
    }
}

impl Display for GridLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let dimension = self.field.dimension;
        let width = self.field.tile_count().max(1).to_string().len().max(2);
        let mut cells = vec![None; dimension * dimension];
        for (id, origin) in self.placements() {
            if let Some(cell) = self.cell_index(origin).and_then(|index| cells.get_mut(index)) {
                *cell = Some(id);
            }
        }
        for row in cells.chunks(dimension.max(1)) {
            for cell in row {
                match cell {
                    Some(id) => write!(f, "{:0width$} ", id.0)?,
                    None => write!(f, "{:width$} ", "")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
