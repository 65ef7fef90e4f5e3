//! Runtime level configuration loaded from `assets/level.toml`.
//!
//! [`LevelConfig`] is a Bevy [`Resource`] that mirrors the constants in
//! [`crate::constants`].  At startup, [`load_level_config`] reads
//! `assets/level.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<LevelConfig>` to any system parameter list and read values
//! with `config.world_scale`, `config.win_delay_secs`, etc.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Path of the optional override file.
pub const LEVEL_CONFIG_PATH: &str = "assets/level.toml";

/// Runtime-tunable level configuration.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    // ── World ────────────────────────────────────────────────────────────────
    pub world_scale: f32,
    pub bounds_wall_thickness: f32,
    pub gravity: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,

    // ── Level data ───────────────────────────────────────────────────────────
    pub level_path: String,
    pub food_layer: String,
    pub platform_layer: String,
    pub background_layer: String,

    // ── Collectables ─────────────────────────────────────────────────────────
    pub collectable_footprint_width: f32,
    pub collectable_footprint_height: f32,
    pub collectable_frame_size: f32,
    pub collectable_sprite_scale: f32,

    // ── Level end ────────────────────────────────────────────────────────────
    pub win_delay_secs: f32,
    pub win_banner_font_size: f32,

    // ── Countdown ────────────────────────────────────────────────────────────
    pub countdown_start_secs: u32,
    pub countdown_anchor_y: f32,
    pub countdown_font_size: f32,

    // ── Hero ─────────────────────────────────────────────────────────────────
    pub hero_spawn_x: f32,
    pub hero_spawn_y: f32,
    pub hero_half_width: f32,
    pub hero_half_height: f32,
    pub hero_run_speed: f32,
    pub hero_jump_speed: f32,
    pub hero_ground_normal_min_y: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            // World
            world_scale: WORLD_SCALE,
            bounds_wall_thickness: BOUNDS_WALL_THICKNESS,
            gravity: GRAVITY,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            // Level data
            level_path: LEVEL_PATH.to_string(),
            food_layer: FOOD_LAYER.to_string(),
            platform_layer: PLATFORM_LAYER.to_string(),
            background_layer: BACKGROUND_LAYER.to_string(),
            // Collectables
            collectable_footprint_width: COLLECTABLE_FOOTPRINT_WIDTH,
            collectable_footprint_height: COLLECTABLE_FOOTPRINT_HEIGHT,
            collectable_frame_size: COLLECTABLE_FRAME_SIZE,
            collectable_sprite_scale: COLLECTABLE_SPRITE_SCALE,
            // Level end
            win_delay_secs: WIN_DELAY_SECS,
            win_banner_font_size: WIN_BANNER_FONT_SIZE,
            // Countdown
            countdown_start_secs: COUNTDOWN_START_SECS,
            countdown_anchor_y: COUNTDOWN_ANCHOR_Y,
            countdown_font_size: COUNTDOWN_FONT_SIZE,
            // Hero
            hero_spawn_x: HERO_SPAWN_X,
            hero_spawn_y: HERO_SPAWN_Y,
            hero_half_width: HERO_HALF_WIDTH,
            hero_half_height: HERO_HALF_HEIGHT,
            hero_run_speed: HERO_RUN_SPEED,
            hero_jump_speed: HERO_JUMP_SPEED,
            hero_ground_normal_min_y: HERO_GROUND_NORMAL_MIN_Y,
        }
    }
}

impl LevelConfig {
    /// Parse a TOML override.  Keys absent from `contents` keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<LevelConfig>(contents)
    }
}

/// Startup system: attempt to load `assets/level.toml` and overwrite the
/// `LevelConfig` resource with any values present in the file.
///
/// TOML parse errors are printed to stderr but do not abort the game.  A
/// missing file is silently ignored (defaults are already in place).
pub fn load_level_config(mut config: ResMut<LevelConfig>) {
    let path = LEVEL_CONFIG_PATH;
    match std::fs::read_to_string(path) {
        Ok(contents) => match LevelConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded level config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}
