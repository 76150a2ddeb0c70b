use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::{WindowMode, WindowResolution};

use crate::input::PointerInputPlugin;

/// Root directory the `AssetServer` resolves relative paths against.
pub const ASSETS_ROOT: &str = "assets";

/// Size in logical pixels of the primary window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl WindowSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// Creates a Bevy app with the window, asset and input setup every puzzle shares.
// The window is not resizable: pointer coordinates are used as play-field coordinates.
pub fn get_default_app(title: &str, size: WindowSize) -> App {
    let mut app = App::new();

    let asset_plugin = bevy::asset::AssetPlugin {
        mode: bevy::asset::AssetMode::Unprocessed,
        file_path: ASSETS_ROOT.to_string(),
        processed_file_path: "imported_assets/Default".to_string(),
        watch_for_changes_override: None,
        meta_check: AssetMetaCheck::Never,
    };

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: title.to_string(),
            present_mode: bevy::window::PresentMode::Fifo,
            resolution: WindowResolution::new(size.width, size.height),
            resizable: false,
            mode: WindowMode::Windowed,
            ..default()
        }),
        ..default()
    };

    app.add_plugins(DefaultPlugins.set(asset_plugin).set(window_plugin));

    // Keeps the event loop from spinning while nothing is being dragged.
    // https://github.com/aevyrie/bevy_framepace
    app.add_plugins(bevy_framepace::FramepacePlugin);

    app.insert_resource(ClearColor(Color::BLACK));
    app.add_plugins(PointerInputPlugin);

    app
}
