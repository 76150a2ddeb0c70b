use bevy::prelude::*;

use crate::board::Board;
use crate::config::{PuzzleConfig, TileArt};
use crate::field::PlayField;
use crate::tile::{Tile, TileRect};

const TILE_GAP: f32 = 4.;
// Keeps later tiles drawn above earlier ones, matching hit-testing.
const Z_STEP: f32 = 0.01;

#[derive(Component)]
struct MainCamera;

#[derive(Component)]
pub struct TileVisual {
    tile: Tile,
}

/// Sprite center in world space (origin at the field center, y up) for a field-space rectangle.
pub fn world_translation(rect: &TileRect, field: &PlayField) -> Vec2 {
    let center = rect.center();
    Vec2::new(center.x - field.size.x / 2., field.size.y / 2. - center.y)
}

fn tile_color(tile: &Tile, count: usize) -> Color {
    let hue = 360. * tile.id.0 as f32 / count.max(1) as f32;
    Color::hsl(hue, 0.55, 0.7)
}

pub fn spawn_play_field(
    mut commands: Commands,
    board: Res<Board>,
    config: Res<PuzzleConfig>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn(Camera2d).insert(MainCamera);

    let field = board.field();
    let count = board.tiles().len();
    for (z, tile) in board.tiles().iter().enumerate() {
        let translation = world_translation(&tile.rect, field).extend(z as f32 * Z_STEP);
        let sprite = match config.tile_art {
            TileArt::Images => Sprite {
                custom_size: Some(tile.rect.size),
                ..Sprite::from_image(asset_server.load(format!("{}.png", tile.id)))
            },
            TileArt::Numbers => {
                Sprite::from_color(tile_color(tile, count), tile.rect.size - TILE_GAP)
            }
        };
        let mut entity = commands.spawn((
            sprite,
            TileVisual { tile: *tile },
            Transform::from_translation(translation),
        ));
        if config.tile_art == TileArt::Numbers {
            entity.with_child((
                Text2d::new(tile.id.to_string()),
                TextFont {
                    font_size: tile.rect.size.min_element() * 0.45,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(0., 0., Z_STEP / 2.),
            ));
        }
    }
    info!("Spawned {count} tiles\n{}", board.layout());
}

pub fn sync_tile_transforms(
    board: Res<Board>,
    mut visuals: Query<(&mut TileVisual, &mut Transform)>,
) {
    for (mut visual, mut transform) in &mut visuals {
        let Some(tile) = board.tiles().get(visual.tile.id) else {
            continue;
        };
        if tile.rect == visual.tile.rect {
            continue;
        }
        visual.tile = *tile;
        let translation = world_translation(&tile.rect, board.field());
        transform.translation = translation.extend(transform.translation.z);
    }
}
