use bevy::prelude::*;
use tracing::debug;

use crate::clamp::clamp_to_field;
use crate::collision::permitted_step;
use crate::field::PlayField;
use crate::registry::TileRegistry;
use crate::snap::SnapResolver;
use crate::tile::TileId;

/// State held between a press and its release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// `None` when the press missed every tile.
    pub tile: Option<TileId>,
    pub last_position: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    pub const fn selected(&self) -> Option<TileId> {
        match self.state {
            DragState::Dragging(session) => session.tile,
            DragState::Idle => None,
        }
    }

    /// Starts a session on the topmost tile under `point`. A press during a session replaces it.
    pub fn press(&mut self, point: Vec2, tiles: &TileRegistry) {
        let tile = tiles.topmost_tile_at(point).map(|tile| tile.id);
        debug!(?point, ?tile, "drag started");
        self.state = DragState::Dragging(DragSession {
            tile,
            last_position: point,
        });
    }

    /// Moves the selected tile by the pointer delta, one axis at most, then keeps it on the field.
    pub fn drag(&mut self, point: Vec2, tiles: &mut TileRegistry, field: &PlayField) {
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };
        let Some(id) = session.tile else {
            return;
        };
        let delta = point - session.last_position;
        session.last_position = point;

        let Some(tile) = tiles.get(id).copied() else {
            return;
        };
        let rect = permitted_step(tiles, &tile, delta).map_or(tile.rect, |step| tile.rect.translated(step));
        if let Some(tile) = tiles.get_mut(id) {
            tile.rect = clamp_to_field(rect, field);
        }
    }

    /// Ends the session, snapping the selected tile to the grid.
    pub fn release(
        &mut self,
        point: Vec2,
        tiles: &mut TileRegistry,
        field: &PlayField,
        snap: &SnapResolver,
    ) {
        let state = core::mem::take(&mut self.state);
        let DragState::Dragging(DragSession { tile: Some(id), .. }) = state else {
            return;
        };
        debug!(?point, tile = %id, "drag released");
        if let Some(tile) = tiles.get_mut(id) {
            snap.snap(tile, field);
        }
    }
}
