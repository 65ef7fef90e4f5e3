use super::common::*;
use super::{GameState, MainMenuRoot, MenuQuitButton, MenuStartButton};
use bevy::prelude::*;

/// Spawn the full-screen title screen.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │                FOOD DASH                    │
/// │   Grab all the food before time runs out    │
/// │                                             │
/// │                [ START ]                    │
/// │                [ QUIT ]                     │
/// │                                             │
/// │        ←/→ run · Space jump · Enter         │
/// └─────────────────────────────────────────────┘
/// ```
pub fn setup_main_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(screen_bg()),
            MainMenuRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("FOOD DASH"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 10.0);

            root.spawn((
                Text::new("Grab all the food before time runs out"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));

            spacer(root, 52.0);

            spawn_button(
                root,
                "START",
                (start_bg(), start_border(), start_text()),
                MenuStartButton,
            );

            spacer(root, 14.0);

            spawn_button(
                root,
                "QUIT",
                (quit_bg(), quit_border(), quit_text()),
                MenuQuitButton,
            );

            spacer(root, 52.0);

            root.spawn((
                Text::new("←/→ run  ·  Space jump  ·  Enter to start"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Recursively despawn all main-menu entities.
pub fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle Start and Quit.
///
/// - **Start** (or Enter) → [`GameState::Playing`], which builds the level.
/// - **Quit** → sends [`AppExit`] to gracefully shut down.
#[allow(clippy::type_complexity)]
pub fn main_menu_button_system(
    start_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuStartButton>)>,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuQuitButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    let wants_start = keys.just_pressed(KeyCode::Enter)
        || start_query.iter().any(|(i, _)| *i == Interaction::Pressed);
    if wants_start {
        next_state.set(GameState::Playing);
        return;
    }

    for (interaction, children) in start_query.iter() {
        tint_label(interaction, children, &mut btn_text, start_text());
    }

    for (interaction, children) in quit_query.iter() {
        if *interaction == Interaction::Pressed {
            exit.write(AppExit::Success);
        }
        tint_label(interaction, children, &mut btn_text, quit_text());
    }
}
