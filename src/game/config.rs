//! Explicit game configuration, passed to [`crate::game::Game::new`].

use std::fmt;
use std::time::Duration;

use super::constants::*;
use super::{Cell, Direction, Grid};

/// Every tunable the simulation reads. Defaults reproduce the classic rules.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Side length of the square board, in cells.
    pub grid_size: i32,
    /// Minimum wall-clock time between two simulation ticks.
    pub tick_interval: Duration,
    pub starting_lives: u32,
    /// Regular food items kept on the board at all times.
    pub food_count: usize,
    /// Obstacles generated once when the game is created.
    pub obstacle_count: usize,
    /// Time between bonus spawn attempts.
    pub bonus_cooldown: Duration,
    /// How long a bonus stays on the board if nobody eats it.
    pub bonus_lifetime: Duration,
    pub food_points: u32,
    pub bonus_points: u32,
    /// The palette advances every time the score passes a multiple of this.
    pub milestone_step: u32,
    pub palette_size: usize,
    /// Starting body, head first.
    pub initial_body: Vec<Cell>,
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_interval: TICK_INTERVAL,
            starting_lives: STARTING_LIVES,
            food_count: FOOD_COUNT,
            obstacle_count: OBSTACLE_COUNT,
            bonus_cooldown: BONUS_COOLDOWN,
            bonus_lifetime: BONUS_LIFETIME,
            food_points: FOOD_POINTS,
            bonus_points: BONUS_POINTS,
            milestone_step: MILESTONE_STEP,
            palette_size: PALETTE_SIZE,
            initial_body: INITIAL_SNAKE_BODY.to_vec(),
            initial_direction: INITIAL_DIRECTION,
        }
    }
}

impl GameConfig {
    /// The board described by `grid_size`.
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 1 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.milestone_step == 0 || self.palette_size == 0 {
            return Err(ConfigError::ZeroProgression);
        }

        let grid = self.grid();
        let Some(head) = self.initial_body.first() else {
            return Err(ConfigError::EmptySnake);
        };
        if let Some(cell) = self.initial_body.iter().find(|c| !grid.contains(**c)) {
            return Err(ConfigError::SnakeOutOfBounds(*cell));
        }
        let contiguous = self
            .initial_body
            .windows(2)
            .all(|pair| (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs() == 1);
        if !contiguous {
            return Err(ConfigError::SnakeNotContiguous);
        }
        if self.initial_body.get(1) == Some(&head.step(self.initial_direction)) {
            return Err(ConfigError::HeadingIntoBody);
        }
        Ok(())
    }
}

/// Why a [`GameConfig`] cannot be used to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyGrid,
    /// Board side above [`MAX_GRID_SIZE`].
    GridTooLarge(i32),
    ZeroTickInterval,
    NoLives,
    ZeroProgression,
    EmptySnake,
    SnakeOutOfBounds(Cell),
    SnakeNotContiguous,
    HeadingIntoBody,
    NoRoomForFood,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::GridTooLarge(size) => {
                write!(f, "grid size {size} exceeds the maximum of {MAX_GRID_SIZE}")
            },
            Self::ZeroTickInterval => write!(f, "tick interval must be non-zero"),
            Self::NoLives => write!(f, "game must start with at least one life"),
            Self::ZeroProgression => write!(f, "milestone step and palette size must be non-zero"),
            Self::EmptySnake => write!(f, "initial snake body is empty"),
            Self::SnakeOutOfBounds(cell) => {
                write!(f, "initial snake cell ({}, {}) is outside the grid", cell.x, cell.y)
            },
            Self::SnakeNotContiguous => write!(f, "initial snake body is not contiguous"),
            Self::HeadingIntoBody => write!(f, "initial heading points into the snake's own neck"),
            Self::NoRoomForFood => write!(f, "no free cell left for the starting food"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_config_matches_classic_rules() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 25);
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.food_count, 3);
        assert_eq!(config.bonus_points, 4);
        assert_eq!(config.palette_size, 8);
        assert_eq!(
            config.initial_body,
            vec![Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)]
        );
        assert_eq!(config.initial_direction, Direction::Right);
    }

    #[test]
    fn rejects_snake_outside_grid() {
        let config = GameConfig {
            grid_size: 5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SnakeOutOfBounds(Cell::new(6, 9)))
        );
    }

    #[test]
    fn rejects_heading_into_neck() {
        let config = GameConfig {
            initial_direction: Direction::Left,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::HeadingIntoBody));
    }

    #[test]
    fn rejects_broken_body() {
        let config = GameConfig {
            initial_body: vec![Cell::new(6, 9), Cell::new(4, 9)],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SnakeNotContiguous));
    }

    #[test]
    fn rejects_oversized_grid() {
        let config = GameConfig {
            grid_size: 46_341,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::GridTooLarge(46_341)));
        assert!(matches!(
            crate::game::Game::with_seed(config, 1),
            Err(ConfigError::GridTooLarge(_))
        ));

        let largest = GameConfig {
            grid_size: MAX_GRID_SIZE,
            ..Default::default()
        };
        assert_eq!(largest.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_tick() {
        let config = GameConfig {
            tick_interval: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }
}
