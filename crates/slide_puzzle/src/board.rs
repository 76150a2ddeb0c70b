use bevy::prelude::*;
use puzzle_helpers::input::PointerEvent;
use puzzle_helpers::restart::Restartable;

use crate::config::{PuzzleConfig, SnapTarget};
use crate::drag::DragController;
use crate::field::PlayField;
use crate::layout::GridLayout;
use crate::registry::TileRegistry;
use crate::snap::SnapResolver;

/// Everything the puzzle mutates in response to pointer events.
#[derive(Resource, Debug, Clone)]
pub struct Board {
    field: PlayField,
    snap_target: SnapTarget,
    layout: GridLayout,
    snap: SnapResolver,
    tiles: TileRegistry,
    drag: DragController,
}

impl Board {
    pub fn new(config: &PuzzleConfig) -> Self {
        Self::with_layout(config, GridLayout::generate(&config.play_field()))
    }

    pub fn with_layout(config: &PuzzleConfig, layout: GridLayout) -> Self {
        let field = config.play_field();
        Self {
            field,
            snap_target: config.snap_target,
            snap: SnapResolver::new(config.snap_target, &layout),
            tiles: TileRegistry::from_layout(&layout, &field),
            layout,
            drag: DragController::default(),
        }
    }

    pub const fn field(&self) -> &PlayField {
        &self.field
    }

    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub const fn tiles(&self) -> &TileRegistry {
        &self.tiles
    }

    pub const fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed(point) => self.drag.press(point, &self.tiles),
            PointerEvent::Dragged(point) => self.drag.drag(point, &mut self.tiles, &self.field),
            PointerEvent::Released(point) => {
                self.drag
                    .release(point, &mut self.tiles, &self.field, &self.snap);
            }
        }
    }

    fn relayout(&mut self, layout: GridLayout) {
        self.tiles.relayout(&layout);
        self.snap = SnapResolver::new(self.snap_target, &layout);
        self.layout = layout;
        self.drag = DragController::default();
    }
}

impl FromWorld for Board {
    fn from_world(world: &mut World) -> Self {
        let config = world.get_resource::<PuzzleConfig>().copied().unwrap_or_else(|| {
            warn!("No PuzzleConfig inserted, using defaults");
            PuzzleConfig::default()
        });
        let config = config
            .validate()
            .expect("PuzzleConfig must be valid before the board is laid out");
        Self::new(&config)
    }
}

impl Restartable for Board {
    fn reset(&mut self) {
        let layout = GridLayout::generate(&self.field);
        info!("New layout\n{layout}");
        self.relayout(layout);
    }
}
