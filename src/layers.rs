//! Rapier collision groups shared by every level entity.
//!
//! | Layer        | Group     | Detects                 | Solves contacts with |
//! |--------------|-----------|-------------------------|----------------------|
//! | Ground       | `GROUP_1` | everything              | everything           |
//! | Hero         | `GROUP_2` | ground, collectables    | ground               |
//! | Collectable  | `GROUP_3` | ground, hero            | ground only          |
//!
//! Hero and collectables detect each other (so overlaps produce
//! `CollisionEvent`s) but neither lists the other in its `SolverGroups`.
//! Rapier only computes contact impulses when both sides' solver groups
//! accept each other, so the hero walks through food without pushing it.

use bevy_rapier2d::geometry::Group;
use bevy_rapier2d::prelude::*;

pub const GROUND: Group = Group::GROUP_1;
pub const HERO: Group = Group::GROUP_2;
pub const COLLECTABLE: Group = Group::GROUP_3;

/// Static level geometry: tiles and bounds walls.
pub fn ground_groups() -> CollisionGroups {
    CollisionGroups::new(GROUND, Group::ALL)
}

/// Detection against ground and collectables, contact response against
/// ground only.
pub fn hero_groups() -> (CollisionGroups, SolverGroups) {
    (
        CollisionGroups::new(HERO, GROUND | COLLECTABLE),
        SolverGroups::new(HERO, GROUND),
    )
}

/// Detection against ground and hero, contact response against ground only.
pub fn collectable_groups() -> (CollisionGroups, SolverGroups) {
    (
        CollisionGroups::new(COLLECTABLE, GROUND | HERO),
        SolverGroups::new(COLLECTABLE, GROUND),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_rapier2d::rapier::geometry::InteractionGroups;

    #[test]
    fn hero_and_collectables_detect_each_other() {
        let (hero, _) = hero_groups();
        let (item, _) = collectable_groups();
        assert!(InteractionGroups::from(hero).test(item.into()));
    }

    #[test]
    fn hero_and_collectables_never_exchange_impulses() {
        let (_, hero) = hero_groups();
        let (_, item) = collectable_groups();
        assert!(!InteractionGroups::from(hero).test(item.into()));
    }

    #[test]
    fn hero_and_collectables_stand_on_the_ground() {
        let ground = InteractionGroups::from(ground_groups());
        let (hero, hero_solver) = hero_groups();
        let (item, item_solver) = collectable_groups();
        assert!(ground.test(hero.into()));
        assert!(ground.test(item.into()));
        // Ground carries no SolverGroups, so Rapier gives it `all()`.
        assert!(InteractionGroups::all().test(hero_solver.into()));
        assert!(InteractionGroups::all().test(item_solver.into()));
    }
}
