//! Scenes: `GameState` definition and `MenuPlugin`.
//!
//! ## States
//!
//! | State      | Scene name     | Description                          |
//! |------------|----------------|--------------------------------------|
//! | `MainMenu` | `main-menu`    | Initial state; title screen shown    |
//! | `Playing`  | `game-scene`   | The level; see [`crate::level`]      |
//! | `Credits`  | `credits`      | Shown when the countdown runs out    |
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                    | Schedule               | Purpose                      |
//! |---------------------------|------------------------|------------------------------|
//! | `setup_main_menu`         | `OnEnter(MainMenu)`    | Spawn title screen UI        |
//! | `cleanup_main_menu`       | `OnExit(MainMenu)`     | Despawn title screen UI      |
//! | `main_menu_button_system` | `Update / in MainMenu` | Handle Start / Quit          |
//! | `setup_credits`           | `OnEnter(Credits)`     | Spawn credits UI             |
//! | `cleanup_credits`         | `OnExit(Credits)`      | Despawn credits UI           |
//! | `credits_button_system`   | `Update / in Credits`  | Handle Main Menu             |

use bevy::prelude::*;

mod common;
mod credits;
mod main_menu;

pub use credits::{cleanup_credits, credits_button_system, setup_credits};
pub use main_menu::{cleanup_main_menu, main_menu_button_system, setup_main_menu};

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level scene state machine.
///
/// Switching scenes is `NextState::set`; every level system runs under
/// `.run_if(in_state(GameState::Playing))`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title screen; shown on startup and after a win.
    #[default]
    MainMenu,
    /// The level.
    Playing,
    /// Shown after the countdown runs out.
    Credits,
}

impl GameState {
    /// Scene name used in logs.
    pub fn scene_name(self) -> &'static str {
        match self {
            GameState::MainMenu => "main-menu",
            GameState::Playing => "game-scene",
            GameState::Credits => "credits",
        }
    }
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the main-menu UI; entire tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags the "Start" button.
#[derive(Component)]
pub struct MenuStartButton;

/// Tags the "Quit" button.
#[derive(Component)]
pub struct MenuQuitButton;

/// Root node of the credits UI; despawned on `OnExit(Credits)`.
#[derive(Component)]
pub struct CreditsRoot;

/// Tags the "Main Menu" button on the credits screen.
#[derive(Component)]
pub struct CreditsMenuButton;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `GameState`, both menu scenes and their button handlers.
///
/// This plugin must be added to the app **before** any plugin that calls
/// `.run_if(in_state(GameState::Playing))`, so the state is always registered
/// first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                main_menu_button_system.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnEnter(GameState::Credits), setup_credits)
            .add_systems(OnExit(GameState::Credits), cleanup_credits)
            .add_systems(
                Update,
                credits_button_system.run_if(in_state(GameState::Credits)),
            );
    }
}
