use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

use food_dash::config::{self, LevelConfig};
use food_dash::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use food_dash::graphics;
use food_dash::level::{data, LevelPlugin};
use food_dash::menu::MenuPlugin;

/// Configure Rapier physics: platformer gravity from the level config.
fn setup_physics_config(
    mut rapier: Query<&mut RapierConfiguration>,
    config: Res<LevelConfig>,
) {
    for mut cfg in rapier.iter_mut() {
        cfg.gravity = Vec2::new(0.0, config.gravity);
    }
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Food Dash".into(),
            resolution: WindowResolution::new(VIEWPORT_WIDTH as u32, VIEWPORT_HEIGHT as u32),
            resizable: false,
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    // Compiled defaults; load_level_config overwrites them from
    // assets/level.toml (if present) in the Startup schedule.
    .insert_resource(LevelConfig::default())
    // pixels_per_meter(1.0) keeps world units equal to map pixels × scale,
    // so velocities and gravity in the config are plain pixels per second.
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
    // MenuPlugin registers GameState and must come before LevelPlugin.
    .add_plugins(MenuPlugin)
    .add_plugins(LevelPlugin)
    .add_systems(
        Startup,
        (
            // Load config first so every other startup system sees the final values.
            config::load_level_config,
            data::load_level_data.after(config::load_level_config),
            setup_physics_config.after(config::load_level_config),
            graphics::setup_camera,
        ),
    );

    app.run();
}
