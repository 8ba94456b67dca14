//! UI plugin - camera, title, score and lives display, bonus countdown, and game over screen.

use bevy::prelude::*;

use crate::control::{ActiveGame, SimulationSet};
use crate::game::{
    BOARD_MARGIN, BONUS_TIMER_COLOR, CELL_SIZE, GAME_OVER_COLOR, TITLE_COLOR, Z_EFFECT,
};
use crate::rendering::cell_to_world;

/// Plugin for UI and game flow display.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (
                update_hud_text,
                update_bonus_timer,
                spawn_game_over_screen_system,
                despawn_game_over_screen_system,
            )
                .chain()
                .after(SimulationSet),
        );
    }
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the lives display UI element.
#[derive(Component)]
pub struct LivesText;

/// Component to mark the countdown above the bonus.
#[derive(Component)]
pub struct BonusTimerText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

fn hud_font(font_size: f32) -> TextFont {
    TextFont {
        font_size,
        ..default()
    }
}

/// Initial setup system - camera, title, score and lives text, bonus countdown.
fn setup_system(mut commands: Commands) {
    commands.spawn(Camera2d);

    // Title centred along the top edge
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            top: Val::Px(10.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((Text::new("Snake Mania"), hud_font(40.0), TextColor(TITLE_COLOR)));
        });

    commands.spawn((
        Text::new("Score: 0"),
        hud_font(20.0),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            left: Val::Px(BOARD_MARGIN + 10.0),
            ..default()
        },
        ScoreText,
    ));

    commands.spawn((
        Text::new("Lives: 0"),
        hud_font(20.0),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            right: Val::Px(10.0),
            ..default()
        },
        LivesText,
    ));

    commands.spawn((
        Text2d::new(""),
        hud_font(20.0),
        TextColor(BONUS_TIMER_COLOR),
        Transform::from_xyz(0.0, 0.0, Z_EFFECT),
        Visibility::Hidden,
        BonusTimerText,
    ));
}

/// System to keep the score and lives display in sync with the game.
fn update_hud_text(
    game: Res<ActiveGame>,
    mut score_text: Query<&mut Text, (With<ScoreText>, Without<LivesText>)>,
    mut lives_text: Query<&mut Text, (With<LivesText>, Without<ScoreText>)>,
) {
    if let Ok(mut text) = score_text.single_mut() {
        *text = Text::new(format!("Score: {}", game.score()));
    }
    if let Ok(mut text) = lives_text.single_mut() {
        *text = Text::new(format!("Lives: {}", game.lives()));
    }
}

/// System to show the remaining bonus lifetime just above the bonus.
fn update_bonus_timer(
    game: Res<ActiveGame>,
    mut timer_text: Query<(&mut Text2d, &mut Transform, &mut Visibility), With<BonusTimerText>>,
) {
    let Ok((mut text, mut transform, mut visibility)) = timer_text.single_mut() else {
        return;
    };

    match game.snapshot().bonus {
        Some(bonus) if !bonus.remaining.is_zero() => {
            let at = cell_to_world(bonus.cell, game.config().grid_size);
            transform.translation = (at + Vec2::new(0.0, CELL_SIZE)).extend(Z_EFFECT);
            *text = Text2d::new(format!("{:.1}", bonus.remaining.as_secs_f32()));
            *visibility = Visibility::Visible;
        },
        _ => *visibility = Visibility::Hidden,
    }
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, score: u32) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            GameOverUI,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::all(Val::Px(20.0)),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(Color::BLACK),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Game Over! Press R to Restart"),
                        hud_font(40.0),
                        TextColor(GAME_OVER_COLOR),
                    ));
                    panel.spawn((
                        Text::new(format!("Final Score: {score}")),
                        hud_font(24.0),
                        TextColor(Color::WHITE),
                        Node {
                            margin: UiRect::top(Val::Px(10.0)),
                            ..default()
                        },
                    ));
                });
        });
}

/// System to spawn game over screen when game ends.
fn spawn_game_over_screen_system(
    mut commands: Commands,
    game: Res<ActiveGame>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if !game.is_running() && game_over_ui.is_empty() {
        spawn_game_over_screen(&mut commands, game.score());
    }
}

/// System to remove the game over screen once a new run starts.
fn despawn_game_over_screen_system(
    mut commands: Commands,
    game: Res<ActiveGame>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game.is_running() {
        for entity in game_over_ui.iter() {
            commands.entity(entity).despawn();
        }
    }
}
