//! Domain events reported by a simulation tick.

use super::Cell;

/// What killed the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Boundary,
    Obstacle,
    SelfBite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten { cell: Cell },
    BonusSpawned { cell: Cell },
    BonusExpired,
    BonusEaten { cell: Cell },
    LifeLost { cause: Collision, lives_left: u32 },
    GameOver { score: u32 },
    PaletteAdvanced { index: usize },
}
