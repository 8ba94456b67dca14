//! Control plugin - feeds the clock and keyboard intents into the game each frame.

use bevy::prelude::*;

use crate::game::{Direction, Game, GameEvent, Intent};

/// Plugin that drives the simulation.
pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<GameEventMessage>().add_systems(
            Update,
            (advance_game, capture_input).chain().in_set(SimulationSet),
        );
    }
}

/// Systems that mutate the game. Anything drawing the game runs after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// The running game, owned by the app.
#[derive(Resource, Deref, DerefMut)]
pub struct ActiveGame(pub Game);

/// Message re-emitting a domain event for visual effects.
#[derive(Message, Clone, Copy, Debug)]
pub struct GameEventMessage(pub GameEvent);

/// Reads edge-triggered key presses as intents, in a fixed order.
pub fn intents_from_input(keyboard_input: &ButtonInput<KeyCode>) -> Vec<Intent> {
    let bindings = [
        ([KeyCode::ArrowUp, KeyCode::KeyW], Intent::Turn(Direction::Up)),
        ([KeyCode::ArrowDown, KeyCode::KeyS], Intent::Turn(Direction::Down)),
        ([KeyCode::ArrowLeft, KeyCode::KeyA], Intent::Turn(Direction::Left)),
        ([KeyCode::ArrowRight, KeyCode::KeyD], Intent::Turn(Direction::Right)),
    ];

    let mut intents: Vec<Intent> = bindings
        .into_iter()
        .filter(|(keys, _)| keyboard_input.any_just_pressed(keys.iter().copied()))
        .map(|(_, intent)| intent)
        .collect();
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        intents.push(Intent::Restart);
    }
    intents
}

/// System that samples the clock once and runs at most one tick.
fn advance_game(
    time: Res<Time>,
    mut game: ResMut<ActiveGame>,
    mut event_writer: MessageWriter<GameEventMessage>,
) {
    for event in game.advance(time.elapsed()) {
        event_writer.write(GameEventMessage(event));
    }
}

/// System that hands this frame's key presses to the game.
fn capture_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut game: ResMut<ActiveGame>) {
    for intent in intents_from_input(&keyboard_input) {
        if game.handle_intent(intent) {
            debug!(?intent, "Intent accepted");
        }
    }
}
