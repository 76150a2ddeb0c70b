use bevy::prelude::*;

use crate::field::PlayField;
use crate::layout::GridLayout;
use crate::tile::{Tile, TileId, TileRect};

/// Every tile on the field, in insertion order. Later tiles are drawn above earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileRegistry {
    tiles: Vec<Tile>,
}

impl TileRegistry {
    pub fn from_layout(layout: &GridLayout, field: &PlayField) -> Self {
        let size = field.cell_size();
        let mut registry = Self::default();
        for (id, origin) in layout.placements() {
            registry.insert(Tile {
                id,
                rect: TileRect::new(origin, size),
            });
        }
        registry
    }

    pub fn insert(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Moves every tile to the position `layout` gives its id. Tiles without one stay put.
    pub fn relayout(&mut self, layout: &GridLayout) {
        for (id, origin) in layout.placements() {
            if let Some(tile) = self.get_mut(id) {
                tile.rect = tile.rect.with_origin(origin);
            }
        }
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|tile| tile.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The last-inserted tile containing `point`.
    pub fn topmost_tile_at(&self, point: Vec2) -> Option<&Tile> {
        self.tiles.iter().rev().find(|tile| tile.rect.contains(point))
    }

    /// Whether a tile other than `except` contains `point`.
    pub fn is_occupied_by_other(&self, point: Vec2, except: TileId) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.id != except && tile.rect.contains(point))
    }
}
