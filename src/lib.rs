//! Food Dash: a single-level 2D platformer.
//!
//! The hero has to collect every piece of food in the level before the
//! countdown runs out.  Collecting the last one shows a win banner and
//! returns to the main menu after a short delay; running out of time goes
//! straight to the credits.

pub mod collectable;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod graphics;
pub mod hero;
pub mod hud;
pub mod layers;
pub mod level;
pub mod level_end;
pub mod menu;
