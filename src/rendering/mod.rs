//! Rendering plugin - paints the game snapshot with immediate-mode shapes every frame.

use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::control::{ActiveGame, GameEventMessage, SimulationSet};
use crate::game::{
    BOARD_COLOR, BOARD_MARGIN, BONUS_COLOR, BORDER_COLOR, BORDER_THICKNESS, CELL_SIZE,
    CORNER_RADIUS, Cell, Direction, EYE_COLOR, FOOD_COLOR, GameEvent, OBSTACLE_COLOR, PULSE_COLOR,
    SNAKE_PALETTE, Snapshot, Z_BOARD, Z_BORDER, Z_EFFECT, Z_EYES, Z_FOOD, Z_OBSTACLE, Z_SNAKE,
};

/// Plugin for drawing the board and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Pulses>().add_systems(
            Update,
            (spawn_eat_pulses, draw_game, draw_pulses)
                .chain()
                .after(SimulationSet),
        );
    }
}

const PULSE_SECONDS: f32 = 0.3;
const PULSE_END_SCALE: f32 = 2.5;

/// A short expanding flash where something was eaten.
struct Pulse {
    at: Vec2,
    timer: Timer,
}

#[derive(Resource, Default)]
struct Pulses(Vec<Pulse>);

/// Window side length in pixels for a board of `grid_size` cells.
pub fn window_size(grid_size: i32) -> u32 {
    (grid_size as f32 * CELL_SIZE + 2.0 * BOARD_MARGIN) as u32
}

/// Centre of `cell` in world space. The board is centred on the origin and grid `y` grows
/// downwards while world `y` grows upwards.
pub fn cell_to_world(cell: Cell, grid_size: i32) -> Vec2 {
    let half = grid_size as f32 / 2.0;
    Vec2::new(
        (cell.x as f32 - half + 0.5) * CELL_SIZE,
        (half - cell.y as f32 - 0.5) * CELL_SIZE,
    )
}

/// Offsets of the two eyes from the head centre, placed towards `heading`.
pub fn eye_offsets(heading: Direction) -> [Vec2; 2] {
    let (dx, dy) = heading.delta();
    // Grid y points down, world y points up
    let forward = Vec2::new(dx as f32, -dy as f32);
    let side = forward.perp();
    let ahead = forward * CELL_SIZE * 0.15;
    [ahead + side * CELL_SIZE * 0.15, ahead - side * CELL_SIZE * 0.15]
}

/// Palette colour for the snake, wrapping out-of-range indices.
pub fn snake_color(palette_index: usize) -> Color {
    SNAKE_PALETTE[palette_index % SNAKE_PALETTE.len()]
}

/// System that turns eat events into pulse effects.
fn spawn_eat_pulses(
    mut event_reader: MessageReader<GameEventMessage>,
    game: Res<ActiveGame>,
    mut pulses: ResMut<Pulses>,
) {
    let grid_size = game.config().grid_size;
    for GameEventMessage(event) in event_reader.read() {
        if let GameEvent::FoodEaten { cell } | GameEvent::BonusEaten { cell } = event {
            pulses.0.push(Pulse {
                at: cell_to_world(*cell, grid_size),
                timer: Timer::from_seconds(PULSE_SECONDS, TimerMode::Once),
            });
        }
    }
}

/// System that draws the board, obstacles, food, bonus, and snake.
fn draw_game(mut painter: ShapePainter, game: Res<ActiveGame>) {
    let snapshot = game.snapshot();
    let board_side = snapshot.grid_size as f32 * CELL_SIZE;

    painter.reset();
    painter.set_translation(Vec3::new(0.0, 0.0, Z_BOARD));
    painter.color = BOARD_COLOR;
    painter.rect(Vec2::splat(board_side));

    painter.hollow = true;
    painter.thickness = BORDER_THICKNESS;
    painter.color = BORDER_COLOR;
    painter.set_translation(Vec3::new(0.0, 0.0, Z_BORDER));
    painter.rect(Vec2::splat(board_side + 2.0 * BORDER_THICKNESS));
    painter.hollow = false;

    draw_cells(&mut painter, &snapshot, &snapshot.obstacles, OBSTACLE_COLOR, Z_OBSTACLE, 0.0);

    painter.color = FOOD_COLOR;
    for food in &snapshot.foods {
        let at = cell_to_world(*food, snapshot.grid_size);
        painter.set_translation(at.extend(Z_FOOD));
        painter.circle(CELL_SIZE / 3.0);
    }

    if let Some(bonus) = snapshot.bonus {
        let at = cell_to_world(bonus.cell, snapshot.grid_size);
        painter.color = BONUS_COLOR;
        painter.transform = Transform::from_translation(at.extend(Z_FOOD))
            .with_rotation(Quat::from_rotation_z(FRAC_PI_4));
        painter.rect(Vec2::splat(CELL_SIZE * FRAC_PI_4.sin()));
        painter.transform.rotation = Quat::IDENTITY;
    }

    draw_cells(
        &mut painter,
        &snapshot,
        &snapshot.snake,
        snake_color(snapshot.palette_index),
        Z_SNAKE,
        CORNER_RADIUS,
    );

    if let Some(head) = snapshot.snake.first() {
        let at = cell_to_world(*head, snapshot.grid_size);
        painter.color = EYE_COLOR;
        for offset in eye_offsets(snapshot.heading) {
            painter.set_translation((at + offset).extend(Z_EYES));
            painter.circle(CELL_SIZE * 0.08);
        }
    }
}

/// Draws one square per cell with the given colour and corner rounding.
fn draw_cells(
    painter: &mut ShapePainter,
    snapshot: &Snapshot,
    cells: &[Cell],
    color: Color,
    z: f32,
    corner_radius: f32,
) {
    painter.color = color;
    painter.corner_radii = Vec4::splat(corner_radius);
    for cell in cells {
        painter.set_translation(cell_to_world(*cell, snapshot.grid_size).extend(z));
        painter.rect(Vec2::splat(CELL_SIZE));
    }
    painter.corner_radii = Vec4::ZERO;
}

/// System that ages and draws pulse effects.
fn draw_pulses(mut painter: ShapePainter, time: Res<Time>, mut pulses: ResMut<Pulses>) {
    pulses.0.retain_mut(|pulse| {
        pulse.timer.tick(time.delta());
        !pulse.timer.is_finished()
    });

    painter.reset();
    for pulse in &pulses.0 {
        let progress = pulse.timer.fraction();
        let scale = 1.0 + (PULSE_END_SCALE - 1.0) * progress;
        painter.color = PULSE_COLOR.with_alpha(0.8 * (1.0 - progress));
        painter.set_translation(pulse.at.extend(Z_EFFECT));
        painter.circle(CELL_SIZE / 2.0 * scale);
    }
}
