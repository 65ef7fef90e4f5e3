//! Collection bookkeeping and the win condition.
//!
//! ## Flow
//!
//! 1. Rapier reports a `CollisionEvent::Started` between the hero and a
//!    [`Collectable`].
//! 2. [`collection_system`] deactivates the collectable (first event only),
//!    despawns it, and calls [`CollectionTracker::on_collected`].
//! 3. When that call reports the win condition, a single [`LevelWon`]
//!    message is written for [`crate::level_end`] to act on.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::spawner::Collectable;
use crate::hero::Hero;
use crate::level_end::LevelWon;

/// Ordered record of every collection event in the current level.
///
/// Duplicates are kept: two placements sharing a name produce two entries.
/// The sequence only ever grows.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionTracker {
    collected: Vec<String>,
    win_threshold: usize,
}

impl CollectionTracker {
    /// Start tracking a level that requires `win_threshold` collections.
    pub fn new(win_threshold: usize) -> Self {
        Self {
            collected: Vec::with_capacity(win_threshold),
            win_threshold,
        }
    }

    #[inline]
    pub fn win_threshold(&self) -> usize {
        self.win_threshold
    }

    /// Identifiers in collection order.
    #[inline]
    pub fn collected(&self) -> &[String] {
        &self.collected
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.collected.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }

    /// Exact-count win condition.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.collected.len() == self.win_threshold
    }

    /// Record one collection.  Returns `true` iff this event reached the
    /// win threshold.
    pub fn on_collected(&mut self, identifier: impl Into<String>) -> bool {
        self.collected.push(identifier.into());
        self.is_complete()
    }
}

/// Collect a collectable when the hero overlaps it.
///
/// The `active` flag is cleared in the same step that queues the despawn, so
/// a second overlap reported before the despawn is applied is ignored.
pub fn collection_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    mut q_collectables: Query<&mut Collectable>,
    q_hero: Query<Entity, With<Hero>>,
    mut tracker: ResMut<CollectionTracker>,
    mut won: MessageWriter<LevelWon>,
) {
    let Ok(hero_entity) = q_hero.single() else {
        return;
    };

    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        let item_entity = if e2 == hero_entity && q_collectables.contains(e1) {
            e1
        } else if e1 == hero_entity && q_collectables.contains(e2) {
            e2
        } else {
            continue;
        };

        let Ok(mut item) = q_collectables.get_mut(item_entity) else {
            continue;
        };
        if !item.take() {
            continue;
        }

        commands.entity(item_entity).despawn();
        info!("You collected {}", item.identifier);

        if tracker.on_collected(item.identifier.clone()) {
            info!(
                "all {} collectables gathered",
                tracker.win_threshold()
            );
            won.write(LevelWon);
        }
    }
}
