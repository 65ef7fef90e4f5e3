//! Turns "Food" placements into live collectable entities.
//!
//! Every collectable gets:
//! - a category from [`super::catalog::category_of`] (visual only),
//! - a position scaled by `world_scale` to line up with the scaled tile map,
//! - the same fixed collision footprint regardless of category,
//! - a dynamic body that rests on the ground and reports hero overlaps
//!   (see [`crate::layers`]).

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::catalog::{category_color, category_of};
use crate::config::LevelConfig;
use crate::layers::collectable_groups;
use crate::level::bounds::LevelBounds;
use crate::level::data::PlacementRecord;
use crate::level::LevelEntity;

/// A live, collectable item.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Collectable {
    /// Copied from the placement's `name`.
    pub identifier: String,
    /// Visual variant from the catalog.
    pub category: usize,
    /// Cleared the moment the item is collected; an inactive collectable
    /// never counts again, even if its entity has not been despawned yet.
    pub active: bool,
}

impl Collectable {
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let category = category_of(&identifier);
        Self {
            identifier,
            category,
            active: true,
        }
    }

    /// Deactivate the collectable.  Returns `true` only on the first call.
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}

/// Collision footprint (full width and height) shared by all collectables.
pub fn collectable_footprint(config: &LevelConfig) -> Vec2 {
    Vec2::new(
        config.collectable_footprint_width,
        config.collectable_footprint_height,
    )
}

/// Spawn one collectable per record.  Returns how many were spawned.
pub fn spawn_collectables(
    commands: &mut Commands,
    records: &[PlacementRecord],
    bounds: &LevelBounds,
    config: &LevelConfig,
) -> usize {
    let footprint = collectable_footprint(config);
    let sprite_size = Vec2::splat(config.collectable_frame_size * config.collectable_sprite_scale);
    let (collision_groups, solver_groups) = collectable_groups();

    for record in records {
        let collectable = Collectable::new(record.name.as_str());
        let position = bounds.map_to_world(record.position);
        debug!(
            "spawning '{}' (category {}) at {position}",
            collectable.identifier, collectable.category
        );

        commands.spawn((
            Sprite::from_color(category_color(collectable.category), sprite_size),
            // Sprite scale lives in `custom_size`, not in the transform, so
            // Rapier never scales the footprint.
            Transform::from_translation(position.extend(0.5)),
            collectable,
            LevelEntity,
            RigidBody::Dynamic,
            Collider::cuboid(footprint.x * 0.5, footprint.y * 0.5),
            LockedAxes::ROTATION_LOCKED,
            collision_groups,
            solver_groups,
            ActiveEvents::COLLISION_EVENTS,
        ));
    }

    records.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_rapier2d::rapier::geometry::InteractionGroups;

    fn record(name: &str, x: f32, y: f32) -> PlacementRecord {
        PlacementRecord {
            name: name.to_string(),
            position: Vec2::new(x, y),
            payload: serde_json::Value::Null,
        }
    }

    fn spawn_into_world(records: Vec<PlacementRecord>) -> (World, usize) {
        let mut world = World::new();
        let config = LevelConfig::default();
        let bounds = LevelBounds {
            size: Vec2::new(1000.0, 1000.0),
            scale: config.world_scale,
        };
        let mut schedule = Schedule::default();
        schedule.add_systems(move |mut commands: Commands| {
            let count = spawn_collectables(&mut commands, &records, &bounds, &config);
            assert_eq!(count, records.len());
        });
        schedule.run(&mut world);
        let spawned = world.query::<&Collectable>().iter(&world).count();
        (world, spawned)
    }

    #[test]
    fn one_collectable_per_record() {
        let (_, spawned) = spawn_into_world(vec![
            record("lettuce", 10.0, 10.0),
            record("shells", 20.0, 10.0),
            record("lettuce", 30.0, 10.0),
        ]);
        assert_eq!(spawned, 3);
    }

    #[test]
    fn no_records_spawns_nothing() {
        let (_, spawned) = spawn_into_world(Vec::new());
        assert_eq!(spawned, 0);
    }

    #[test]
    fn position_is_scaled_and_category_assigned() {
        let (mut world, _) = spawn_into_world(vec![record("tomato", 15.0, 40.0)]);
        let mut query = world.query::<(&Collectable, &Transform)>();
        let (item, transform) = query
            .single(&world)
            .expect("one collectable");
        assert_eq!(item.identifier, "tomato");
        assert_eq!(item.category, 1);
        assert!(item.active);
        assert_eq!(transform.translation.truncate(), Vec2::new(30.0, -80.0));
        assert_eq!(transform.scale, Vec3::ONE);
    }

    #[test]
    fn unknown_identifier_still_spawns_with_default_category() {
        let (mut world, _) = spawn_into_world(vec![record("mystery", 0.0, 0.0)]);
        let mut query = world.query::<&Collectable>();
        let item = query
            .single(&world)
            .expect("one collectable");
        assert_eq!(item.identifier, "mystery");
        assert_eq!(item.category, 0);
    }

    #[test]
    fn every_collectable_reports_collisions_against_ground_and_hero() {
        let (mut world, _) = spawn_into_world(vec![record("steak", 0.0, 0.0)]);
        let mut query = world
            .query_filtered::<(&CollisionGroups, &SolverGroups, &ActiveEvents), With<Collectable>>();
        let (groups, solver, events) = query
            .single(&world)
            .expect("one collectable");
        assert_eq!(groups.memberships, crate::layers::COLLECTABLE);
        assert!(groups.filters.contains(crate::layers::HERO));
        assert!(groups.filters.contains(crate::layers::GROUND));
        assert!(events.contains(ActiveEvents::COLLISION_EVENTS));

        let (_, hero_solver) = crate::layers::hero_groups();
        assert!(!InteractionGroups::from(*solver).test(hero_solver.into()));
    }

    #[test]
    fn take_succeeds_only_once() {
        let mut item = Collectable::new("pork");
        assert!(item.take());
        assert!(!item.take());
        assert!(!item.active);
    }
}
