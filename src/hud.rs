//! Screen-space level HUD: countdown text and the win banner.
//!
//! Both are UI nodes, so they stay fixed on screen while the camera follows
//! the hero.  Both carry [`LevelEntity`] and disappear with the level.

use bevy::prelude::*;

use crate::config::LevelConfig;
use crate::constants::WIN_BANNER_TEXT;
use crate::countdown::LevelCountdown;
use crate::level::LevelEntity;

/// Width of the box the countdown text is centred in (pixels).
const COUNTDOWN_BOX_WIDTH: f32 = 160.0;

/// Tags the countdown text node.
#[derive(Component)]
pub struct CountdownText;

/// Root of the win banner.
#[derive(Component)]
pub struct WinBanner;

fn countdown_color() -> Color {
    Color::srgb(1.0, 0.95, 0.85)
}
fn banner_color() -> Color {
    Color::srgb(0.99, 0.78, 0.25)
}

/// Spawn the countdown text centred horizontally on its anchor.
pub fn spawn_countdown_text(commands: &mut Commands, countdown: &LevelCountdown, config: &LevelConfig) {
    let anchor = countdown.anchor();
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(anchor.x - COUNTDOWN_BOX_WIDTH * 0.5),
            top: Val::Px(anchor.y),
            width: Val::Px(COUNTDOWN_BOX_WIDTH),
            justify_content: JustifyContent::Center,
            ..default()
        },
        Text::new(countdown.remaining_secs().to_string()),
        TextFont {
            font_size: config.countdown_font_size,
            ..default()
        },
        TextColor(countdown_color()),
        CountdownText,
        LevelEntity,
    ));
}

/// Keep the countdown text in sync with the remaining time.
pub fn countdown_hud_system(
    countdown: Res<LevelCountdown>,
    mut q_text: Query<&mut Text, With<CountdownText>>,
) {
    if !countdown.is_changed() {
        return;
    }
    let label = countdown.remaining_secs().to_string();
    for mut text in q_text.iter_mut() {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}

/// Spawn the "You Win!" banner centred on screen.  It takes no input.
pub fn spawn_win_banner(commands: &mut Commands, config: &LevelConfig) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            ZIndex(200),
            WinBanner,
            LevelEntity,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new(WIN_BANNER_TEXT),
                TextFont {
                    font_size: config.win_banner_font_size,
                    ..default()
                },
                TextColor(banner_color()),
            ));
        });
}
