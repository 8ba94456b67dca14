use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use snake_mania::control::{ActiveGame, ControlPlugin};
use snake_mania::game::{BACKGROUND_COLOR, ConfigError, Game, GameConfig};
use snake_mania::rendering::{RenderingPlugin, window_size};
use snake_mania::ui::UiPlugin;

fn main() -> Result<(), ConfigError> {
    let config = GameConfig::default();
    let side = window_size(config.grid_size);
    let game = Game::new(config)?;

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(side, side),
                    title: "Snake Mania".to_string(),
                    resizable: false,
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
            ControlPlugin,
            RenderingPlugin,
            UiPlugin,
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(ActiveGame(game))
        .run();

    Ok(())
}
