use bevy::prelude::*;

/// The rectangle tiles live in, split into a `dimension` x `dimension` grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub size: Vec2,
    pub dimension: usize,
}

impl PlayField {
    pub const fn new(size: Vec2, dimension: usize) -> Self {
        Self { size, dimension }
    }

    pub fn cell_size(&self) -> Vec2 {
        self.size / self.dimension as f32
    }

    /// Number of tiles on the field: every cell but one.
    pub const fn tile_count(&self) -> usize {
        (self.dimension * self.dimension).saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_cells() {
        let field = PlayField::new(Vec2::new(500., 525.), 4);
        assert_eq!(field.cell_size(), Vec2::new(125., 131.25), "500x525 split in 4");
        assert_eq!(field.tile_count(), 15, "one cell stays empty");
    }

    #[test]
    fn single_cell_field_has_no_tiles() {
        let field = PlayField::new(Vec2::splat(100.), 1);
        assert_eq!(field.tile_count(), 0, "the only cell is the hole");
    }
}
