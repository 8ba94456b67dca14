//! Read-only view of the game handed to the renderer each frame.

use std::time::Duration;

use super::{Cell, Direction};

/// The active bonus and how long it has left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusView {
    pub cell: Cell,
    pub remaining: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub grid_size: i32,
    /// Head first.
    pub snake: Vec<Cell>,
    /// Current heading, used to orient the head.
    pub heading: Direction,
    pub foods: Vec<Cell>,
    pub obstacles: Vec<Cell>,
    pub bonus: Option<BonusView>,
    pub score: u32,
    pub lives: u32,
    pub running: bool,
    pub palette_index: usize,
}

impl Snapshot {
    pub fn bonus_active(&self) -> bool {
        self.bonus.is_some()
    }
}
