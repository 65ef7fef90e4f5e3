//! Level end: the one-shot `Active → Ended` transition.
//!
//! Two independent sources can end a level:
//!
//! | Message          | Source                          | Result                                    |
//! |------------------|---------------------------------|-------------------------------------------|
//! | [`LevelWon`]     | [`crate::collectable::tracker`] | win banner now, main menu after the delay |
//! | [`TimerExpired`] | [`crate::countdown`]            | credits immediately                       |
//!
//! Whichever arrives first ends the level; everything after it is ignored.
//! When both arrive in the same frame, the win is processed first.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::LevelConfig;
use crate::constants::WIN_DELAY_SECS;
use crate::countdown::TimerExpired;
use crate::hud::spawn_win_banner;
use crate::menu::GameState;

/// Written once when the collected count reaches the win threshold.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelWon;

/// How a level ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEndReason {
    Won,
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelPhase {
    #[default]
    Active,
    /// Terminal for this level instance.
    Ended(LevelEndReason),
}

/// One-shot guard plus the pending return-to-menu deferral.
///
/// The deferral is a single-shot timer that is taken out of the coordinator
/// when it fires, so it can trigger the scene change at most once.  Level
/// teardown resets the coordinator, which drops any deferral still pending.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelEndCoordinator {
    phase: LevelPhase,
    menu_deferral: Option<Timer>,
}

impl LevelEndCoordinator {
    #[inline]
    pub fn phase(&self) -> LevelPhase {
        self.phase
    }

    #[inline]
    pub fn has_ended(&self) -> bool {
        self.phase != LevelPhase::Active
    }

    /// End the level as won and schedule the menu return after `delay`.
    ///
    /// Returns `false` (and changes nothing) if the level already ended.
    pub fn on_level_won(&mut self, delay: Duration) -> bool {
        if self.has_ended() {
            return false;
        }
        self.phase = LevelPhase::Ended(LevelEndReason::Won);
        self.menu_deferral = Some(Timer::new(delay, TimerMode::Once));
        true
    }

    /// End the level as timed out.
    ///
    /// Returns `false` (and changes nothing) if the level already ended.
    pub fn on_timer_expired(&mut self) -> bool {
        if self.has_ended() {
            return false;
        }
        self.phase = LevelPhase::Ended(LevelEndReason::TimedOut);
        true
    }

    #[inline]
    pub fn has_pending_menu_return(&self) -> bool {
        self.menu_deferral.is_some()
    }

    /// Advance the menu deferral.  Returns `true` exactly once, on the tick
    /// the delay elapses.
    pub fn tick_deferral(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.menu_deferral.as_mut() else {
            return false;
        };
        timer.tick(delta);
        if timer.just_finished() {
            self.menu_deferral = None;
            return true;
        }
        false
    }
}

/// The configured win delay.  Negative values mean "no delay"; values a
/// `Duration` cannot hold fall back to the default.
pub fn win_delay(config: &LevelConfig) -> Duration {
    Duration::try_from_secs_f32(config.win_delay_secs.max(0.0)).unwrap_or_else(|e| {
        warn!(
            "win_delay_secs = {} is unusable ({e}); using {WIN_DELAY_SECS}s",
            config.win_delay_secs
        );
        Duration::from_secs_f32(WIN_DELAY_SECS)
    })
}

/// React to the first end-of-level message.
pub fn level_end_system(
    mut commands: Commands,
    mut won: MessageReader<LevelWon>,
    mut expired: MessageReader<TimerExpired>,
    mut coordinator: ResMut<LevelEndCoordinator>,
    mut next_state: ResMut<NextState<GameState>>,
    config: Res<LevelConfig>,
) {
    for _ in won.read() {
        if coordinator.on_level_won(win_delay(&config)) {
            info!(
                "level won; returning to {} in {:.1}s",
                GameState::MainMenu.scene_name(),
                config.win_delay_secs
            );
            spawn_win_banner(&mut commands, &config);
        }
    }

    for _ in expired.read() {
        if coordinator.on_timer_expired() {
            info!(
                "time is up; switching to {}",
                GameState::Credits.scene_name()
            );
            next_state.set(GameState::Credits);
        } else {
            debug!("countdown expired after the level ended; ignored");
        }
    }
}

/// Fire the deferred menu return once its delay has elapsed.
pub fn win_delay_system(
    time: Res<Time>,
    mut coordinator: ResMut<LevelEndCoordinator>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if coordinator.tick_deferral(time.delta()) {
        info!("switching to {}", GameState::MainMenu.scene_name());
        next_state.set(GameState::MainMenu);
    }
}
