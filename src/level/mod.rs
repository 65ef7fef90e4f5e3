//! Level controller: builds the level on entering `Playing`, ticks it every
//! frame, and tears it down on leaving.
//!
//! ## Setup (`OnEnter(GameState::Playing)`, chained in this order)
//!
//! | System                  | Purpose                                             |
//! |-------------------------|-----------------------------------------------------|
//! | `reset_level_state`     | Fresh tracker, coordinator and countdown            |
//! | `build_ground_system`   | World bounds, ground colliders, background          |
//! | `spawn_hero_system`     | Create the hero                                     |
//! | `spawn_collectables_system` | Spawn "Food" placements, set the win threshold |
//! | `start_countdown_system`| Create and start the countdown + its HUD text       |
//!
//! ## Per frame (`Playing` only)
//!
//! The hero control pipeline is the only thing the controller drives.  The
//! countdown ticks itself; collection and level end are message-driven.
//!
//! ## Teardown (`OnExit(GameState::Playing)`)
//!
//! Every [`LevelEntity`] is despawned and the per-level resources are reset,
//! which also drops any pending win deferral.

pub mod bounds;
pub mod data;
pub mod ground;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::collectable::spawner::spawn_collectables;
use crate::collectable::tracker::{collection_system, CollectionTracker};
use crate::config::LevelConfig;
use crate::countdown::{countdown_tick_system, LevelCountdown, TimerExpired};
use crate::graphics::camera_follow_system;
use crate::hero::{
    apply_hero_intent_system, hero_ground_contact_system, hero_intent_clear_system,
    keyboard_to_intent_system, spawn_hero, HeroIntent,
};
use crate::hud::{countdown_hud_system, spawn_countdown_text};
use crate::level_end::{level_end_system, win_delay_system, LevelEndCoordinator, LevelWon};
use crate::menu::GameState;
use bounds::LevelBounds;
use data::LevelData;

/// Tags everything that belongs to one level instance.
#[derive(Component)]
pub struct LevelEntity;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LevelWon>()
            .add_message::<TimerExpired>()
            // Registered by Rapier too; repeated registration is a no-op.
            .add_message::<CollisionEvent>()
            .init_resource::<LevelData>()
            .init_resource::<LevelBounds>()
            .init_resource::<HeroIntent>()
            .init_resource::<CollectionTracker>()
            .init_resource::<LevelEndCoordinator>()
            .init_resource::<LevelCountdown>()
            .add_systems(
                OnEnter(GameState::Playing),
                (
                    reset_level_state,
                    build_ground_system,
                    spawn_hero_system,
                    spawn_collectables_system,
                    start_countdown_system,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (
                        hero_intent_clear_system,
                        keyboard_to_intent_system,
                        hero_ground_contact_system,
                        apply_hero_intent_system,
                    )
                        .chain(),
                    (
                        countdown_tick_system,
                        level_end_system,
                        win_delay_system,
                        countdown_hud_system,
                    )
                        .chain(),
                    camera_follow_system,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                // Rapier writes CollisionEvents during PostUpdate; handle
                // them in the same frame.
                PostUpdate,
                collection_system
                    .after(PhysicsSet::Writeback)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), teardown_level);
    }
}

// ── OnEnter(Playing) ──────────────────────────────────────────────────────────

fn reset_level_state(
    mut tracker: ResMut<CollectionTracker>,
    mut coordinator: ResMut<LevelEndCoordinator>,
    mut countdown: ResMut<LevelCountdown>,
    mut intent: ResMut<HeroIntent>,
) {
    *tracker = CollectionTracker::default();
    *coordinator = LevelEndCoordinator::default();
    *countdown = LevelCountdown::default();
    *intent = HeroIntent::default();
}

/// Compute the world bounds and spawn the static geometry.
pub fn build_ground_system(
    mut commands: Commands,
    level: Res<LevelData>,
    config: Res<LevelConfig>,
    mut bounds: ResMut<LevelBounds>,
) {
    *bounds = LevelBounds::from_level(&level, config.world_scale);
    let platforms = ground::spawn_ground(&mut commands, &level, &bounds, &config);
    info!(
        "level bounds {}×{}, {} platform collider(s)",
        bounds.size.x, bounds.size.y, platforms
    );
}

pub fn spawn_hero_system(
    mut commands: Commands,
    config: Res<LevelConfig>,
    bounds: Res<LevelBounds>,
) {
    spawn_hero(&mut commands, &config, &bounds);
}

/// Spawn every "Food" placement and size the win threshold to match.
///
/// A level without food is already complete, so it is won on the spot.
pub fn spawn_collectables_system(
    mut commands: Commands,
    level: Res<LevelData>,
    config: Res<LevelConfig>,
    bounds: Res<LevelBounds>,
    mut tracker: ResMut<CollectionTracker>,
    mut won: MessageWriter<LevelWon>,
) {
    let records = level.placements(&config.food_layer);
    let count = spawn_collectables(&mut commands, records, &bounds, &config);
    *tracker = CollectionTracker::new(count);
    info!("{count} collectable(s) to find");

    if tracker.is_complete() {
        warn!(
            "level has no '{}' placements; it is won immediately",
            config.food_layer
        );
        won.write(LevelWon);
    }
}

pub fn start_countdown_system(
    mut commands: Commands,
    config: Res<LevelConfig>,
    mut countdown: ResMut<LevelCountdown>,
) {
    *countdown = LevelCountdown::new(
        config.viewport_width * 0.5,
        config.countdown_anchor_y,
        config.countdown_start_secs,
    );
    countdown.start();
    spawn_countdown_text(&mut commands, &countdown, &config);
}

// ── OnExit(Playing) ───────────────────────────────────────────────────────────

/// Despawn the level and reset its resources so nothing from this instance
/// (a pending menu return in particular) outlives it.
pub fn teardown_level(
    mut commands: Commands,
    q_level: Query<Entity, With<LevelEntity>>,
    mut tracker: ResMut<CollectionTracker>,
    mut coordinator: ResMut<LevelEndCoordinator>,
    mut countdown: ResMut<LevelCountdown>,
) {
    for entity in q_level.iter() {
        commands.entity(entity).despawn();
    }
    *tracker = CollectionTracker::default();
    *coordinator = LevelEndCoordinator::default();
    *countdown = LevelCountdown::default();
}
