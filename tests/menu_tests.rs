//! Headless unit tests for the [`GameState`] scene machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no physics —
//! so they run fast and deterministically in CI.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use food_dash::menu::GameState;

fn app_with_default_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

fn current(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn request(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

#[test]
fn default_state_is_main_menu() {
    let mut app = app_with_default_state();
    app.update();
    assert_eq!(current(&app), GameState::MainMenu);
}

#[test]
fn main_menu_to_playing() {
    let mut app = app_with_default_state();
    app.update();
    request(&mut app, GameState::Playing);
    assert_eq!(current(&app), GameState::Playing);
}

#[test]
fn playing_state_persists_across_frames() {
    let mut app = app_with_default_state();
    app.update();
    request(&mut app, GameState::Playing);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(current(&app), GameState::Playing);
}

#[test]
fn credits_returns_to_main_menu() {
    let mut app = app_with_default_state();
    app.update();
    request(&mut app, GameState::Playing);
    request(&mut app, GameState::Credits);
    assert_eq!(current(&app), GameState::Credits);
    request(&mut app, GameState::MainMenu);
    assert_eq!(current(&app), GameState::MainMenu);
}

#[test]
fn scene_names() {
    assert_eq!(GameState::MainMenu.scene_name(), "main-menu");
    assert_eq!(GameState::Playing.scene_name(), "game-scene");
    assert_eq!(GameState::Credits.scene_name(), "credits");
}
