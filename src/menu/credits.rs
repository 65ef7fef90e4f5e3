use super::common::*;
use super::{CreditsMenuButton, CreditsRoot, GameState};
use bevy::prelude::*;

/// Spawn the credits screen shown after the countdown runs out.
pub fn setup_credits(mut commands: Commands) {
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
            CreditsRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("TIME'S UP"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 24.0);

            for line in ["Design & code: the Food Dash team", "Built with Bevy and Rapier"] {
                root.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(subtitle_color()),
                ));
                spacer(root, 6.0);
            }

            spacer(root, 40.0);

            spawn_button(
                root,
                "MAIN MENU",
                (start_bg(), start_border(), start_text()),
                CreditsMenuButton,
            );

            spacer(root, 24.0);

            root.spawn((
                Text::new("Press Enter to return"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Recursively despawn all credits entities.
pub fn cleanup_credits(mut commands: Commands, query: Query<Entity, With<CreditsRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Return to the main menu on button press or Enter.
#[allow(clippy::type_complexity)]
pub fn credits_button_system(
    menu_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<CreditsMenuButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    let wants_menu = keys.just_pressed(KeyCode::Enter)
        || menu_query.iter().any(|(i, _)| *i == Interaction::Pressed);
    if wants_menu {
        next_state.set(GameState::MainMenu);
        return;
    }

    for (interaction, children) in menu_query.iter() {
        tint_label(interaction, children, &mut btn_text, start_text());
    }
}
