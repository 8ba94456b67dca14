//! Static impassable cells.

use rand::Rng;

use super::{Cell, Grid};

/// Obstacles are chosen once per game and never move, not even on restart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    cells: Vec<Cell>,
}

impl ObstacleSet {
    /// Samples `count` uniformly random cells. Duplicates and overlap with the snake or food
    /// are allowed.
    pub fn generate<R: Rng + ?Sized>(grid: Grid, rng: &mut R, count: usize) -> Self {
        let cells = (0..count).map(|_| grid.random_cell(rng)).collect();
        ObstacleSet { cells }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        ObstacleSet {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

}
