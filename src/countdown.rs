//! Level countdown: a single-shot timer that ends the level at zero.
//!
//! The countdown is constructed with its on-screen anchor and start value,
//! started explicitly, and publishes its expiry as one [`TimerExpired`]
//! message.  It knows nothing about collectables or the win condition.

use std::time::Duration;

use bevy::prelude::*;

use crate::constants::{COUNTDOWN_ANCHOR_Y, COUNTDOWN_START_SECS};

/// Written once when the countdown reaches zero.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerExpired;

#[derive(Resource, Debug, Clone)]
pub struct LevelCountdown {
    timer: Timer,
    start_secs: u32,
    /// Screen-space anchor of the countdown text (pixels, y down).
    anchor: Vec2,
    running: bool,
    expired: bool,
}

impl Default for LevelCountdown {
    fn default() -> Self {
        Self::new(0.0, COUNTDOWN_ANCHOR_Y, COUNTDOWN_START_SECS)
    }
}

impl LevelCountdown {
    /// A stopped countdown of `start_secs` seconds drawn at (`anchor_x`, `anchor_y`).
    pub fn new(anchor_x: f32, anchor_y: f32, start_secs: u32) -> Self {
        Self {
            timer: Timer::new(Duration::from_secs(start_secs as u64), TimerMode::Once),
            start_secs,
            anchor: Vec2::new(anchor_x, anchor_y),
            running: false,
            expired: false,
        }
    }

    /// Begin counting down.  No effect once expired.
    pub fn start(&mut self) {
        if !self.expired {
            self.running = true;
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn has_expired(&self) -> bool {
        self.expired
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    #[inline]
    pub fn start_secs(&self) -> u32 {
        self.start_secs
    }

    /// Whole seconds left, rounded up (shows `1` until the very end).
    pub fn remaining_secs(&self) -> u32 {
        self.timer.remaining_secs().ceil() as u32
    }

    /// Advance by `delta`.  Returns `true` exactly once, when zero is reached.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.running || self.expired {
            return false;
        }
        self.timer.tick(delta);
        if self.timer.just_finished() {
            self.running = false;
            self.expired = true;
            return true;
        }
        false
    }
}

/// Tick the countdown and publish its expiry.
pub fn countdown_tick_system(
    time: Res<Time>,
    mut countdown: ResMut<LevelCountdown>,
    mut expired: MessageWriter<TimerExpired>,
) {
    if countdown.tick(time.delta()) {
        info!("countdown reached zero");
        expired.write(TimerExpired);
    }
}
