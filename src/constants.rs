//! Centralised level and gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place.  [`crate::config::LevelConfig`] mirrors them and can
//! override any subset from `assets/level.toml` at startup.

// ── World ─────────────────────────────────────────────────────────────────────

/// Uniform scale applied to the tile map and to every placement coordinate.
///
/// Map art is authored at 1× and rendered at 2×; raw object positions from the
/// level file must be multiplied by the same factor to line up with the tiles.
pub const WORLD_SCALE: f32 = 2.0;

/// Thickness of the invisible walls enclosing the scaled map (world units).
pub const BOUNDS_WALL_THICKNESS: f32 = 32.0;

/// Downward acceleration applied by Rapier (world units / s²).
pub const GRAVITY: f32 = -900.0;

/// Logical canvas size; the camera view is clamped to the level bounds with it.
pub const VIEWPORT_WIDTH: f32 = 1280.0;
pub const VIEWPORT_HEIGHT: f32 = 720.0;

// ── Level data ────────────────────────────────────────────────────────────────

/// Level file read at startup.  When missing or malformed, the embedded
/// reference level is used instead.
pub const LEVEL_PATH: &str = "assets/levels/level.json";

/// Object layer holding collectable placements.
pub const FOOD_LAYER: &str = "Food";

/// Tile layer whose non-empty tiles are solid ground.
pub const PLATFORM_LAYER: &str = "Platform";

/// Tile layer drawn behind everything; never collides.
pub const BACKGROUND_LAYER: &str = "Background";

/// Tile index meaning "no tile / no collision".
pub const EMPTY_TILE: i32 = -1;

// ── Collectables ──────────────────────────────────────────────────────────────

/// Collision footprint of every collectable, independent of its category.
pub const COLLECTABLE_FOOTPRINT_WIDTH: f32 = 18.0;
pub const COLLECTABLE_FOOTPRINT_HEIGHT: f32 = 12.0;

/// Edge length of one cell in the food sprite sheet (pixels).
pub const COLLECTABLE_FRAME_SIZE: f32 = 24.0;

/// Visual scale of collectable sprites.  Does not affect the footprint.
pub const COLLECTABLE_SPRITE_SCALE: f32 = 1.5;

// ── Level end ─────────────────────────────────────────────────────────────────

/// Delay between showing the win banner and returning to the main menu (seconds).
pub const WIN_DELAY_SECS: f32 = 5.0;

/// Text of the win banner.
pub const WIN_BANNER_TEXT: &str = "You Win!";

/// Font size of the win banner.
pub const WIN_BANNER_FONT_SIZE: f32 = 100.0;

// ── Countdown ─────────────────────────────────────────────────────────────────

/// Countdown start value (seconds).  Reaching zero ends the level.
pub const COUNTDOWN_START_SECS: u32 = 99;

/// Vertical offset of the countdown text from the top of the canvas (pixels).
/// Horizontally it is centred on the canvas.
pub const COUNTDOWN_ANCHOR_Y: f32 = 20.0;

/// Font size of the countdown text.
pub const COUNTDOWN_FONT_SIZE: f32 = 32.0;

// ── Hero ──────────────────────────────────────────────────────────────────────

/// Hero spawn point in screen units (x right, y down from the map top-left).
pub const HERO_SPAWN_X: f32 = 200.0;
pub const HERO_SPAWN_Y: f32 = 60.0;

/// Half-extents of the hero's box collider.
pub const HERO_HALF_WIDTH: f32 = 12.0;
pub const HERO_HALF_HEIGHT: f32 = 20.0;

/// Horizontal run speed (world units / s).
pub const HERO_RUN_SPEED: f32 = 260.0;

/// Vertical launch speed of a jump (world units / s).
pub const HERO_JUMP_SPEED: f32 = 520.0;

/// A ground contact supports the hero when the contact normal (pointing from
/// the ground into the hero) has at least this much upward component.
/// `0.7` accepts slopes up to about 45°; side walls never qualify.
pub const HERO_GROUND_NORMAL_MIN_Y: f32 = 0.7;
