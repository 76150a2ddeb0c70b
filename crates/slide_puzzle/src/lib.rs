use anyhow::ensure;
use bevy::prelude::*;
use bevy::transform::TransformSystem;
use puzzle_helpers::input::PointerEvent;
use puzzle_helpers::restart::handle_restart;
use puzzle_helpers::WindowSize;

pub mod board;
pub mod clamp;
pub mod collision;
pub mod config;
pub mod drag;
pub mod field;
pub mod layout;
pub mod registry;
pub mod shuffle;
pub mod snap;
pub mod tile;
mod visuals;

pub use board::Board;
pub use config::{ConfigError, PuzzleConfig, SnapTarget, TileArt};

/// Board state and pointer handling, without anything that needs a window.
///
/// Insert [`PuzzleConfig`] before adding the plugin; the board is laid out when it is added,
/// and an invalid config panics there.
pub struct PuzzleLogicPlugin;

impl Plugin for PuzzleLogicPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerEvent>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Board>()
            .add_systems(
                Update,
                (handle_restart::<Board>, apply_pointer_events).chain(),
            );
    }
}

/// [`PuzzleLogicPlugin`] plus camera and tile sprites.
pub struct PuzzlePlugin;

impl Plugin for PuzzlePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PuzzleLogicPlugin)
            .add_systems(Startup, visuals::spawn_play_field)
            .add_systems(
                PostUpdate,
                visuals::sync_tile_transforms
                    .run_if(resource_changed::<Board>)
                    .before(TransformSystem::TransformPropagate),
            );
    }
}

fn apply_pointer_events(mut events: EventReader<PointerEvent>, mut board: ResMut<Board>) {
    for event in events.read() {
        board.handle(*event);
    }
}

pub fn run(config: PuzzleConfig) -> anyhow::Result<()> {
    let config = config.validate()?;
    let size = WindowSize::new(config.field_size.x, config.field_size.y);

    let exit = puzzle_helpers::get_default_app(env!("CARGO_PKG_NAME"), size)
        .insert_resource(config)
        .add_plugins(PuzzlePlugin)
        .run();
    ensure!(exit.is_success(), "puzzle exited with {exit:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileId;

    fn headless_app(config: PuzzleConfig) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(config)
            .add_plugins(PuzzleLogicPlugin);
        app
    }

    #[test]
    fn board_is_laid_out_from_config() {
        let app = headless_app(PuzzleConfig {
            field_dimension: 3,
            ..default()
        });
        let board = app.world().resource::<Board>();
        assert_eq!(board.tiles().len(), 8, "3x3 field holds eight tiles");
        assert_eq!(board.field().cell_size(), Vec2::new(500. / 3., 175.), "cells follow the config");
    }

    #[test]
    #[should_panic(expected = "PuzzleConfig must be valid")]
    fn invalid_config_stops_the_plugin() {
        headless_app(PuzzleConfig {
            field_dimension: 0,
            ..default()
        });
    }

    #[test]
    fn pointer_events_drive_the_board() {
        let mut app = headless_app(PuzzleConfig::default());
        let tile = app
            .world()
            .resource::<Board>()
            .tiles()
            .iter()
            .next()
            .copied()
            .expect("a 4x4 board has tiles");
        let grab = tile.rect.center();

        app.world_mut().send_event(PointerEvent::Pressed(grab));
        app.update();
        let selected = app.world().resource::<Board>().drag().selected();
        assert_eq!(selected, Some(tile.id), "press selects the tile under the pointer");

        app.world_mut().send_event(PointerEvent::Released(grab));
        app.update();
        let board = app.world().resource::<Board>();
        assert_eq!(board.drag().selected(), None, "release ends the drag");
        assert_eq!(
            board.tiles().get(tile.id).map(|t| t.rect.origin),
            Some(tile.rect.origin),
            "an unmoved tile is already on a grid line"
        );
    }

    #[test]
    fn restart_key_relays_the_board() {
        let mut app = headless_app(PuzzleConfig::default());
        app.world_mut().send_event(PointerEvent::Pressed(Vec2::new(1., 1.)));
        app.update();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(puzzle_helpers::restart::RESTART_KEY);
        app.update();

        let board = app.world().resource::<Board>();
        assert_eq!(board.drag().selected(), None, "restart drops the session");
        assert!(board.tiles().get(TileId(15)).is_some(), "tiles survive a restart");
    }
}
