//! The game aggregate: owns every entity and runs the fixed tick pipeline.

use std::collections::HashSet;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    BonusSpawner, BonusView, Cell, Collision, ConfigError, GameConfig, GameEvent, Grid, Intent,
    ObstacleSet, Scoreboard, Snapshot, TurnGate,
};
use crate::food::{Food, PlacementError};
use crate::snake::Snake;

/// A whole run of the game: board, snake, food, obstacles, bonus, score and lives.
///
/// The game never reads a clock itself. The driver hands it monotonic time through
/// [`Game::advance`] and intents through [`Game::handle_intent`], and reads back a [`Snapshot`].
pub struct Game {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
    snake: Snake,
    foods: Vec<Food>,
    obstacles: ObstacleSet,
    bonus: BonusSpawner,
    scoreboard: Scoreboard,
    lives: u32,
    running: bool,
    turn_gate: TurnGate,
    /// Clock value of the last tick.
    last_tick: Duration,
    /// Most recent clock value handed to `advance`.
    now: Duration,
}

impl Game {
    /// Creates a game seeded from the operating system.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a reproducible game.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid();
        let snake = Snake::new(&config.initial_body, config.initial_direction);

        let occupied: HashSet<Cell> = snake.body().iter().copied().collect();
        let foods = (0..config.food_count)
            .map(|_| Food::spawn(grid, &mut rng, &occupied))
            .collect::<Result<Vec<_>, PlacementError>>()
            .map_err(|_| ConfigError::NoRoomForFood)?;
        let obstacles = ObstacleSet::generate(grid, &mut rng, config.obstacle_count);

        Ok(Game {
            grid,
            rng,
            snake,
            foods,
            obstacles,
            bonus: BonusSpawner::new(Duration::ZERO, config.bonus_cooldown, config.bonus_lifetime),
            scoreboard: Scoreboard::new(
                config.food_points,
                config.bonus_points,
                config.milestone_step,
                config.palette_size,
            ),
            lives: config.starting_lives,
            running: true,
            turn_gate: TurnGate::default(),
            last_tick: Duration::ZERO,
            now: Duration::ZERO,
            config,
        })
    }

    /// Replaces the generated obstacles. They stay fixed from here on.
    pub fn with_obstacles(mut self, obstacles: ObstacleSet) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Places the regular food items at fixed cells, replacing the random ones.
    pub fn with_foods(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.foods = cells.into_iter().map(Food::at).collect();
        self
    }

    /// The validated configuration this game was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn bonus(&self) -> &BonusSpawner {
        &self.bonus
    }

    /// Points earned in the current run.
    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn palette_index(&self) -> usize {
        self.scoreboard.palette_index()
    }

    /// Remaining lives. Zero exactly when the game is over.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Routes an input intent. Turns count only while running, restart only once the game is
    /// over. Returns whether the intent was honored.
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Turn(direction) => {
                self.running && self.turn_gate.offer(direction, self.snake.direction())
            },
            Intent::Restart => self.restart(),
        }
    }

    /// Feeds the monotonic clock. Runs at most one tick when a full tick interval has passed
    /// since the previous one and returns the events it produced.
    pub fn advance(&mut self, now: Duration) -> Vec<GameEvent> {
        self.now = now;
        if now.saturating_sub(self.last_tick) < self.config.tick_interval {
            return Vec::new();
        }
        self.last_tick = now;
        let events = self.tick();
        self.turn_gate.clear();
        events
    }

    /// One pass of the update pipeline at the current clock value.
    fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        if let Some(direction) = self.turn_gate.take() {
            self.snake.turn(direction);
        }
        self.snake.advance();

        self.eat_food(&mut events);

        if let Some(cause) = self.detect_collision() {
            self.on_fatal_collision(cause, &mut events);
            if !self.running {
                return events;
            }
        }

        self.update_bonus(&mut events);

        if let Some(index) = self.scoreboard.check_palette_advance() {
            tracing::debug!(index, score = self.score(), "Palette advanced");
            events.push(GameEvent::PaletteAdvanced { index });
        }

        events
    }

    /// Starts a new run after game over. Obstacles are kept.
    pub fn restart(&mut self) -> bool {
        if self.running {
            return false;
        }

        self.lives = self.config.starting_lives;
        self.scoreboard.reset();
        self.running = true;
        self.snake.reset();
        self.relocate_foods();
        self.bonus.reset(self.now);
        self.turn_gate.clear();

        tracing::info!("Game restarted");
        true
    }

    /// Owned copy of everything the presentation layer needs for one frame.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.grid.size(),
            snake: self.snake.body().iter().copied().collect(),
            heading: self.snake.direction(),
            foods: self.foods.iter().map(Food::position).collect(),
            obstacles: self.obstacles.cells().to_vec(),
            bonus: self.bonus.active_cell().zip(self.bonus.remaining(self.now)).map(
                |(cell, remaining)| BonusView { cell, remaining },
            ),
            score: self.score(),
            lives: self.lives,
            running: self.running,
            palette_index: self.palette_index(),
        }
    }

    fn snake_cells(&self) -> HashSet<Cell> {
        self.snake.body().iter().copied().collect()
    }

    fn eat_food(&mut self, events: &mut Vec<GameEvent>) {
        let head = self.snake.head();
        let occupied = self.snake_cells();

        for food in self.foods.iter_mut().filter(|f| f.position() == head) {
            if let Err(e) = food.relocate(self.grid, &mut self.rng, &occupied) {
                tracing::warn!(error = %e, "Food could not be relocated");
            }
            self.snake.grow();
            self.scoreboard.on_food_eaten();
            tracing::debug!(x = head.x, y = head.y, score = self.scoreboard.score(), "Food eaten");
            events.push(GameEvent::FoodEaten { cell: head });
        }
    }

    fn detect_collision(&self) -> Option<Collision> {
        let head = self.snake.head();
        if !self.grid.contains(head) {
            Some(Collision::Boundary)
        } else if self.obstacles.contains(head) {
            Some(Collision::Obstacle)
        } else if self.snake.bites_itself() {
            Some(Collision::SelfBite)
        } else {
            None
        }
    }

    fn on_fatal_collision(&mut self, cause: Collision, events: &mut Vec<GameEvent>) {
        self.lives = self.lives.saturating_sub(1);

        if self.lives == 0 {
            self.running = false;
            self.turn_gate.clear();
            self.bonus.clear();
            tracing::info!(?cause, score = self.score(), "Game over");
            events.push(GameEvent::LifeLost {
                cause,
                lives_left: 0,
            });
            events.push(GameEvent::GameOver { score: self.score() });
            return;
        }

        tracing::info!(?cause, lives_left = self.lives, "Life lost");
        self.snake.reset();
        self.relocate_foods();
        self.bonus.clear();
        events.push(GameEvent::LifeLost {
            cause,
            lives_left: self.lives,
        });
    }

    fn relocate_foods(&mut self) {
        let occupied = self.snake_cells();
        for food in &mut self.foods {
            if let Err(e) = food.relocate(self.grid, &mut self.rng, &occupied) {
                tracing::warn!(error = %e, "Food could not be relocated");
            }
        }
    }

    fn update_bonus(&mut self, events: &mut Vec<GameEvent>) {
        let mut blocked = self.snake_cells();
        blocked.extend(self.obstacles.cells().iter().copied());

        match self.bonus.try_spawn(self.now, self.grid, &mut self.rng, &blocked) {
            Ok(Some(cell)) => {
                tracing::debug!(x = cell.x, y = cell.y, "Bonus spawned");
                events.push(GameEvent::BonusSpawned { cell });
            },
            Ok(None) => {},
            Err(e) => tracing::warn!(error = %e, "Bonus could not be placed"),
        }

        if self.bonus.expire(self.now) {
            tracing::debug!("Bonus expired");
            events.push(GameEvent::BonusExpired);
        }

        let head = self.snake.head();
        if self.bonus.consume(head) {
            self.scoreboard.on_bonus_eaten();
            tracing::debug!(x = head.x, y = head.y, score = self.score(), "Bonus eaten");
            events.push(GameEvent::BonusEaten { cell: head });
        }
    }
}
