//! Hero components and resources.
//!
//! Systems that mutate this state live in [`super::control`].

use bevy::prelude::*;

/// Marker component for the player-controlled hero entity.
#[derive(Component)]
pub struct Hero;

/// Aggregated hero intent for the current frame, derived from all input sources.
///
/// [`super::control::keyboard_to_intent_system`] writes it after it is
/// cleared; [`super::control::apply_hero_intent_system`] turns it into
/// velocity.  Tests can populate this directly to drive the hero without a
/// real input device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct HeroIntent {
    /// Horizontal run direction in `[-1, 1]`; `0.0` stands still.
    pub run: f32,
    /// Jump requested this frame.  Ignored while airborne.
    pub jump: bool,
}

/// Whether the hero is standing on ground, refreshed every frame from
/// Rapier's contact pairs by [`super::control::hero_ground_contact_system`].
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroGrounded(pub bool);
