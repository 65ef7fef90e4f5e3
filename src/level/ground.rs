//! Static level geometry: backdrop, background tiles, platform colliders and
//! the walls enclosing the world.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::bounds::LevelBounds;
use super::data::{LevelData, TileLayer};
use super::LevelEntity;
use crate::config::LevelConfig;
use crate::constants::EMPTY_TILE;
use crate::layers::ground_groups;

/// Tags every static ground collider (platform runs and bounds walls).
#[derive(Component)]
pub struct Ground;

fn backdrop_color() -> Color {
    Color::srgb(0.87, 0.32, 0.50)
}
fn background_tile_color() -> Color {
    Color::srgba(0.20, 0.20, 0.20, 0.5)
}
fn platform_color() -> Color {
    Color::srgb(0.36, 0.25, 0.20)
}

/// Centre and size (world units) of a horizontal tile run.
pub fn run_rect(
    row: u32,
    start_col: u32,
    len: u32,
    level: &LevelData,
    bounds: &LevelBounds,
) -> (Vec2, Vec2) {
    let tile = Vec2::new(level.tile_width as f32, level.tile_height as f32);
    let top_left = Vec2::new(start_col as f32 * tile.x, row as f32 * tile.y);
    let size_raw = Vec2::new(len as f32 * tile.x, tile.y);
    let center = bounds.map_to_world(top_left + size_raw * 0.5);
    (center, size_raw * bounds.scale)
}

/// Spawn the backdrop, the background tiles, the platform colliders and the
/// bounds walls.  Returns the number of platform colliders.
pub fn spawn_ground(
    commands: &mut Commands,
    level: &LevelData,
    bounds: &LevelBounds,
    config: &LevelConfig,
) -> usize {
    commands.spawn((
        Sprite::from_color(backdrop_color(), bounds.size),
        Transform::from_translation(bounds.center().extend(-10.0)),
        LevelEntity,
    ));

    if let Some(background) = level.tile_layer(&config.background_layer) {
        spawn_background_tiles(commands, background, level, bounds);
    }

    let platform_count = match level.tile_layer(&config.platform_layer) {
        Some(platform) => spawn_platform(commands, platform, level, bounds),
        None => {
            warn!(
                "level has no '{}' layer; nothing to stand on",
                config.platform_layer
            );
            0
        }
    };

    spawn_bounds_walls(commands, bounds, config.bounds_wall_thickness);
    platform_count
}

/// Background tiles are decoration only; they get no collider.
fn spawn_background_tiles(
    commands: &mut Commands,
    layer: &TileLayer,
    level: &LevelData,
    bounds: &LevelBounds,
) {
    for row in 0..layer.height {
        for col in 0..layer.width {
            if layer.tile(col, row) == EMPTY_TILE {
                continue;
            }
            let (center, size) = run_rect(row, col, 1, level, bounds);
            commands.spawn((
                Sprite::from_color(background_tile_color(), size),
                Transform::from_translation(center.extend(-5.0)),
                LevelEntity,
            ));
        }
    }
}

/// One fixed collider per horizontal run of solid tiles.
fn spawn_platform(
    commands: &mut Commands,
    layer: &TileLayer,
    level: &LevelData,
    bounds: &LevelBounds,
) -> usize {
    let runs = layer.solid_runs();
    for run in &runs {
        let (center, size) = run_rect(run.row, run.start_col, run.len, level, bounds);
        commands.spawn((
            Ground,
            LevelEntity,
            Sprite::from_color(platform_color(), size),
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(size.x * 0.5, size.y * 0.5),
            ground_groups(),
        ));
    }
    debug!(
        "platform: {} solid tiles merged into {} colliders",
        layer.solid_count(),
        runs.len()
    );
    runs.len()
}

/// Invisible walls just outside the four edges of the world.
fn spawn_bounds_walls(commands: &mut Commands, bounds: &LevelBounds, thickness: f32) {
    let half_t = thickness * 0.5;
    let size = bounds.size;
    let center = bounds.center();
    let walls = [
        // left, right
        (Vec2::new(-half_t, center.y), Vec2::new(half_t, size.y * 0.5 + thickness)),
        (Vec2::new(size.x + half_t, center.y), Vec2::new(half_t, size.y * 0.5 + thickness)),
        // top, bottom
        (Vec2::new(center.x, half_t), Vec2::new(size.x * 0.5 + thickness, half_t)),
        (Vec2::new(center.x, -size.y - half_t), Vec2::new(size.x * 0.5 + thickness, half_t)),
    ];
    for (position, half_extents) in walls {
        commands.spawn((
            Ground,
            LevelEntity,
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            ground_groups(),
        ));
    }
}
