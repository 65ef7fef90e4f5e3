//! Headless tests that run the real Rapier pipeline.
//!
//! Unlike `level_flow.rs`, overlaps here come from Rapier's narrow phase, so
//! these tests cover the collision and solver groups the level sets up.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;
use bevy_rapier2d::prelude::*;

use food_dash::collectable::{Collectable, CollectionTracker};
use food_dash::config::LevelConfig;
use food_dash::hero::{Hero, HeroGrounded};
use food_dash::level::data::LevelData;
use food_dash::level::LevelPlugin;
use food_dash::menu::GameState;

const STEP: Duration = Duration::from_micros(16_667);

/// 20×10 tiles of 16 px with a solid bottom row.  The hero spawns at world
/// (200, -60); `food` is in raw map pixels (world = raw × 2, y flipped).
fn level(food: Option<(f32, f32)>) -> LevelData {
    let tiles: Vec<&str> = (0..200)
        .map(|i| if i >= 180 { "1" } else { "0" })
        .collect();
    let objects = food
        .map(|(x, y)| format!(r#"{{ "name": "cheese", "x": {x}, "y": {y} }}"#))
        .unwrap_or_default();
    let json = format!(
        r#"{{ "width": 20, "height": 10, "tilewidth": 16, "tileheight": 16,
            "layers": [
                {{ "type": "tilelayer", "name": "Platform", "data": [{}] }},
                {{ "type": "objectgroup", "name": "Food", "objects": [{objects}] }}
            ] }}"#,
        tiles.join(",")
    );
    LevelData::from_tiled_json(&json).expect("test level parses")
}

#[derive(Resource, Clone, Copy)]
struct TestGravity(f32);

fn apply_test_gravity(gravity: Res<TestGravity>, mut rapier: Query<&mut RapierConfiguration>) {
    for mut cfg in rapier.iter_mut() {
        cfg.gravity = Vec2::new(0.0, gravity.0);
    }
}

fn physics_app(level: LevelData, gravity: f32) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(LevelConfig::default());
    app.insert_resource(TestGravity(gravity));
    app.insert_state(GameState::Playing);
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0));
    app.add_plugins(LevelPlugin);
    app.insert_resource(level);
    app.add_systems(
        PostUpdate,
        apply_test_gravity.before(PhysicsSet::SyncBackend),
    );
    app
}

fn hero_state(app: &mut App) -> (Vec2, Vec2, bool) {
    let mut query = app
        .world_mut()
        .query_filtered::<(&Transform, &Velocity, &HeroGrounded), With<Hero>>();
    let (transform, velocity, grounded) = query.single(app.world()).expect("exactly one hero");
    (transform.translation.truncate(), velocity.linvel, grounded.0)
}

fn collectables_left(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&Collectable>();
    query.iter(app.world()).count()
}

#[test]
fn overlapping_food_is_collected_without_pushing_the_hero() {
    // Food centre at world (208, -60): overlaps the hero, offset along x so
    // any contact impulse would shove the hero sideways.
    let mut app = physics_app(level(Some((104.0, 30.0))), 0.0);

    // The overlap Rapier reports while stepping is handled in the same frame.
    app.update();
    assert_eq!(app.world().resource::<CollectionTracker>().len(), 1);

    for _ in 0..5 {
        app.update();
        let (position, velocity, _) = hero_state(&mut app);
        assert!(
            velocity.length() < 1e-3,
            "hero velocity changed by the overlap: {velocity}"
        );
        assert!(
            (position - Vec2::new(200.0, -60.0)).length() < 1e-3,
            "hero moved to {position}"
        );
    }

    let tracker = app.world().resource::<CollectionTracker>();
    assert_eq!(tracker.len(), 1);
    assert_eq!(tracker.collected(), ["cheese"]);
    assert_eq!(collectables_left(&mut app), 0);
}

#[test]
fn food_away_from_the_hero_stays_put() {
    let mut app = physics_app(level(Some((250.0, 30.0))), 0.0);
    for _ in 0..5 {
        app.update();
    }
    assert!(app.world().resource::<CollectionTracker>().is_empty());
    assert_eq!(collectables_left(&mut app), 1);
}

#[test]
fn hero_lands_on_the_platform_and_only_jumps_from_it() {
    let gravity = LevelConfig::default().gravity;
    let mut app = physics_app(level(None), gravity);

    app.update();
    assert!(!hero_state(&mut app).2, "hero spawns in the air");

    for _ in 0..120 {
        app.update();
    }
    let (position, velocity, grounded) = hero_state(&mut app);
    assert!(grounded, "hero at {position} should rest on the floor");
    assert!(velocity.y.abs() < 1.0);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    app.update();
    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::Space);
        keys.clear();
    }
    let (_, velocity, _) = hero_state(&mut app);
    assert!(velocity.y > 0.0, "jump from the floor");

    // Rise to roughly the apex, then ask for a second jump in mid-air.
    for _ in 0..30 {
        app.update();
    }
    let (_, before, grounded) = hero_state(&mut app);
    assert!(!grounded);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    app.update();
    let (_, after, _) = hero_state(&mut app);
    assert!(
        after.y < before.y,
        "mid-air jump must not relaunch the hero ({} -> {})",
        before.y,
        after.y
    );
}
