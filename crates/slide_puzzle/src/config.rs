use bevy::prelude::*;
use thiserror::Error;

use crate::field::PlayField;

/// Width and height of the application window in pixels.
pub const APPLICATION_WIDTH: f32 = 500.;
pub const APPLICATION_HEIGHT: f32 = 525.;

/// Cells per side of the play field.
pub const FIELD_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapTarget {
    /// A released tile snaps to freshly shuffled offsets.
    #[default]
    Reshuffled,
    /// A released tile snaps to the offsets of the starting layout.
    FixedGrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileArt {
    /// Colored blocks labelled with the tile number.
    #[default]
    Numbers,
    /// `assets/{n}.png` per tile.
    Images,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("field dimension must be at least 1")]
    EmptyField,

    #[error("play field must have a positive size, got {width}x{height}")]
    DegenerateField { width: f32, height: f32 },

    #[error("field dimension {0} leaves more tiles than can be numbered")]
    TooManyTiles(usize),
}

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PuzzleConfig {
    pub field_dimension: usize,
    pub field_size: Vec2,
    pub snap_target: SnapTarget,
    pub tile_art: TileArt,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            field_dimension: FIELD_DIMENSION,
            field_size: Vec2::new(APPLICATION_WIDTH, APPLICATION_HEIGHT),
            snap_target: SnapTarget::default(),
            tile_art: TileArt::default(),
        }
    }
}

impl PuzzleConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        let Vec2 {
            x: width,
            y: height,
        } = self.field_size;
        if self.field_dimension == 0 {
            return Err(ConfigError::EmptyField);
        }
        // Written so that NaN fails too.
        if !(width > 0. && height > 0.) || !self.field_size.is_finite() {
            return Err(ConfigError::DegenerateField { width, height });
        }
        let tiles = self
            .field_dimension
            .checked_mul(self.field_dimension)
            .map(|cells| cells - 1);
        if tiles.is_none_or(|tiles| u32::try_from(tiles).is_err()) {
            return Err(ConfigError::TooManyTiles(self.field_dimension));
        }
        Ok(self)
    }

    pub const fn play_field(&self) -> PlayField {
        PlayField::new(self.field_size, self.field_dimension)
    }
}
