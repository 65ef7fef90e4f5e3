//! Hero input and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`hero_intent_clear_system`] — resets `HeroIntent`.
//! 2. [`keyboard_to_intent_system`] — arrows / WASD / Space into `HeroIntent`.
//! 3. [`hero_ground_contact_system`] — refreshes `HeroGrounded` from contacts.
//! 4. [`apply_hero_intent_system`] — converts `HeroIntent` into `Velocity`.

use super::state::{Hero, HeroGrounded, HeroIntent};
use crate::config::LevelConfig;
use crate::level::ground::Ground;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Reset `HeroIntent` at the start of every frame.
pub fn hero_intent_clear_system(mut intent: ResMut<HeroIntent>) {
    *intent = HeroIntent::default();
}

/// Translate keys into [`HeroIntent`].
///
/// - **←/A** and **→/D** → `run = ∓1.0` (both held cancel out)
/// - **Space/↑/W** (just pressed) → `jump = true`
pub fn keyboard_to_intent_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<HeroIntent>) {
    let mut run = 0.0;
    if keys.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
        run -= 1.0;
    }
    if keys.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
        run += 1.0;
    }
    intent.run = run;
    if keys.any_just_pressed([KeyCode::Space, KeyCode::ArrowUp, KeyCode::KeyW]) {
        intent.jump = true;
    }
}

/// A contact supports the hero when its normal, oriented from the ground
/// into the hero, points far enough upwards.
#[inline]
pub fn is_supporting_normal(ground_to_hero: Vec2, min_y: f32) -> bool {
    ground_to_hero.y >= min_y
}

/// Mark the hero grounded while it rests on a [`Ground`] collider.
///
/// Rapier's manifold normal points from `collider1` to `collider2`, so it is
/// flipped when the hero is the first collider.  Without a physics context
/// (headless tests) the flag is left as it is.
pub fn hero_ground_contact_system(
    rapier: ReadRapierContext,
    config: Res<LevelConfig>,
    q_ground: Query<(), With<Ground>>,
    mut q_hero: Query<(Entity, &mut HeroGrounded), With<Hero>>,
) {
    let Ok(context) = rapier.single() else {
        return;
    };
    let Ok((hero, mut grounded)) = q_hero.single_mut() else {
        return;
    };

    let mut supported = false;
    for pair in context.contact_pairs_with(hero) {
        if !pair.has_any_active_contact() {
            continue;
        }
        let (other, sign): (Entity, f32) = match (pair.collider1(), pair.collider2()) {
            (Some(a), Some(b)) if a == hero => (b, -1.0),
            (Some(a), Some(_)) => (a, 1.0),
            _ => continue,
        };
        if !q_ground.contains(other) {
            continue;
        }
        supported |= pair.manifolds().any(|manifold| {
            manifold.num_points() > 0
                && is_supporting_normal(manifold.normal() * sign, config.hero_ground_normal_min_y)
        });
    }

    if grounded.0 != supported {
        grounded.0 = supported;
    }
}

/// Apply [`HeroIntent`] to the hero's velocity.
///
/// Horizontal speed is set directly (no acceleration curve).  A jump replaces
/// the vertical speed, but only while [`HeroGrounded`] is set.
pub fn apply_hero_intent_system(
    intent: Res<HeroIntent>,
    config: Res<LevelConfig>,
    mut q_hero: Query<(&mut Velocity, &mut HeroGrounded), With<Hero>>,
) {
    let Ok((mut velocity, mut grounded)) = q_hero.single_mut() else {
        return;
    };

    velocity.linvel.x = intent.run.clamp(-1.0, 1.0) * config.hero_run_speed;

    if intent.jump && grounded.0 {
        velocity.linvel.y = config.hero_jump_speed;
        // Airborne until the next contact refresh says otherwise.
        grounded.0 = false;
    }
}
