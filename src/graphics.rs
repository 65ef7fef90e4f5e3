use bevy::prelude::*;

use crate::config::LevelConfig;
use crate::hero::Hero;
use crate::level::bounds::LevelBounds;

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    eprintln!("[SETUP] Camera spawned");
}

/// Keep the camera on the hero without showing anything outside the level.
pub fn camera_follow_system(
    bounds: Res<LevelBounds>,
    config: Res<LevelConfig>,
    q_hero: Query<&Transform, With<Hero>>,
    mut q_camera: Query<&mut Transform, (With<Camera>, Without<Hero>)>,
) {
    let Ok(hero_transform) = q_hero.single() else {
        return;
    };
    let Ok(mut cam) = q_camera.single_mut() else {
        return;
    };

    let view = Vec2::new(config.viewport_width, config.viewport_height);
    let target = bounds.clamp_camera(hero_transform.translation.truncate(), view);
    cam.translation.x = target.x;
    cam.translation.y = target.y;
}
