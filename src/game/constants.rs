//! Game constants for grid size, timing, scoring, and presentation.

use std::time::Duration;

use super::{Cell, Direction};

// Grid
pub const GRID_SIZE: i32 = 25;
/// Largest accepted board side.
pub const MAX_GRID_SIZE: i32 = 1024;

// Timing
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);
pub const BONUS_COOLDOWN: Duration = Duration::from_secs(10);
pub const BONUS_LIFETIME: Duration = Duration::from_secs(3);

// Population
pub const STARTING_LIVES: u32 = 3;
pub const FOOD_COUNT: usize = 3;
pub const OBSTACLE_COUNT: usize = 10;

// Scoring
pub const FOOD_POINTS: u32 = 1;
pub const BONUS_POINTS: u32 = 4;
pub const MILESTONE_STEP: u32 = 10;
pub const PALETTE_SIZE: usize = 8;

// Initial snake, head first
pub const INITIAL_SNAKE_BODY: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];
pub const INITIAL_DIRECTION: Direction = Direction::Right;

// Placement
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1024;
pub const OCCUPANCY_WARN_FRACTION: f32 = 0.5;

#[cfg(feature = "app")]
pub use visuals::*;

#[cfg(feature = "app")]
mod visuals {
    use bevy::prelude::*;

    // Layout
    pub const CELL_SIZE: f32 = 30.0;
    pub const BOARD_MARGIN: f32 = 75.0;
    pub const BORDER_THICKNESS: f32 = 5.0;
    pub const CORNER_RADIUS: f32 = 0.5;

    // Colors
    pub const BACKGROUND_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
    pub const BOARD_COLOR: Color = Color::srgb(0.545, 0.271, 0.075);
    pub const BORDER_COLOR: Color = Color::srgb(1.0, 0.647, 0.0);
    pub const FOOD_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
    pub const BONUS_COLOR: Color = Color::srgb(0.0, 0.749, 1.0);
    pub const OBSTACLE_COLOR: Color = Color::srgb(1.0, 0.078, 0.576);
    pub const TITLE_COLOR: Color = Color::srgb(0.529, 0.808, 0.922);
    pub const GAME_OVER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
    pub const BONUS_TIMER_COLOR: Color = Color::srgb(0.992, 0.976, 0.0);
    pub const PULSE_COLOR: Color = Color::srgba(1.0, 1.0, 0.3, 0.8);
    pub const EYE_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);

    /// Snake colors, cycled through on every score milestone.
    pub const SNAKE_PALETTE: [Color; super::PALETTE_SIZE] = [
        Color::srgb(0.0, 1.0, 0.0),
        Color::srgb(1.0, 0.0, 0.0),
        Color::srgb(0.0, 0.0, 1.0),
        Color::srgb(0.0, 1.0, 1.0),
        Color::srgb(1.0, 0.0, 1.0),
        Color::srgb(1.0, 0.647, 0.0),
        Color::srgb(0.0, 0.502, 0.502),
        Color::srgb(0.502, 0.0, 0.502),
    ];

    // Z-index constants for rendering layers
    pub const Z_BOARD: f32 = 0.0;
    pub const Z_OBSTACLE: f32 = 1.0;
    pub const Z_FOOD: f32 = 1.5;
    pub const Z_SNAKE: f32 = 2.0;
    pub const Z_EYES: f32 = 2.1;
    pub const Z_BORDER: f32 = 3.0;
    pub const Z_EFFECT: f32 = 4.0;
}
