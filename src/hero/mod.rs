//! Hero module: the player-controlled character.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | `Hero` marker, `HeroGrounded` and the `HeroIntent` resource |
//! | [`control`] | Input → intent → velocity pipeline, run once per frame |
//!
//! The level creates the hero with [`spawn_hero`] and ticks it every frame
//! through the control pipeline; nothing else in the level drives it.

pub mod control;
pub mod state;

pub use control::{
    apply_hero_intent_system, hero_ground_contact_system, hero_intent_clear_system,
    keyboard_to_intent_system,
};
pub use state::{Hero, HeroGrounded, HeroIntent};

use crate::config::LevelConfig;
use crate::layers::hero_groups;
use crate::level::bounds::LevelBounds;
use crate::level::LevelEntity;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn hero_color() -> Color {
    Color::srgb(0.30, 0.70, 0.95)
}

/// Spawn the hero at the configured spawn point.
///
/// The hero is a rotation-locked dynamic box driven through `Velocity`.
/// Zero friction keeps it from sticking to walls while running into them.
pub fn spawn_hero(commands: &mut Commands, config: &LevelConfig, bounds: &LevelBounds) -> Entity {
    let half = Vec2::new(config.hero_half_width, config.hero_half_height);
    let position =
        bounds.screen_to_world(Vec2::new(config.hero_spawn_x, config.hero_spawn_y));

    let entity = commands
        .spawn((
            Hero,
            HeroGrounded::default(),
            LevelEntity,
            Sprite::from_color(hero_color(), half * 2.0),
            Transform::from_translation(position.extend(1.0)),
            RigidBody::Dynamic,
            Collider::cuboid(half.x, half.y),
            Velocity::zero(),
            LockedAxes::ROTATION_LOCKED,
            Friction::coefficient(0.0),
            hero_groups(),
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id();

    info!("hero spawned at {position}");
    entity
}
