//! Food items and free-cell placement.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::game::{Cell, Grid, MAX_PLACEMENT_ATTEMPTS, OCCUPANCY_WARN_FRACTION};

/// No free cell was left on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    GridFull,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridFull => write!(f, "no free cell left on the grid"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Picks a uniformly random in-bounds cell that is not in `occupied`.
///
/// Rejection sampling is capped at [`MAX_PLACEMENT_ATTEMPTS`]; after that the free cells are
/// enumerated and one is chosen directly, so the call always terminates.
pub fn sample_free_cell<R: Rng + ?Sized>(
    grid: Grid,
    rng: &mut R,
    occupied: &HashSet<Cell>,
) -> Result<Cell, PlacementError> {
    let taken = occupied.iter().filter(|c| grid.contains(**c)).count();
    let fraction = taken as f32 / grid.area() as f32;
    if fraction > OCCUPANCY_WARN_FRACTION {
        tracing::warn!(taken, area = grid.area(), "Grid is crowded, placement may be slow");
    }

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let cell = grid.random_cell(rng);
        if !occupied.contains(&cell) {
            return Ok(cell);
        }
    }

    tracing::warn!(
        attempts = MAX_PLACEMENT_ATTEMPTS,
        "Random placement exhausted, scanning for free cells"
    );
    grid.cells()
        .filter(|c| !occupied.contains(c))
        .choose(rng)
        .ok_or(PlacementError::GridFull)
}

/// A single collectible cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Spawns food at a random position that doesn't overlap `occupied`.
    pub fn spawn<R: Rng + ?Sized>(
        grid: Grid,
        rng: &mut R,
        occupied: &HashSet<Cell>,
    ) -> Result<Self, PlacementError> {
        sample_free_cell(grid, rng, occupied).map(|position| Food { position })
    }

    pub fn at(position: Cell) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a fresh free cell. On failure the food stays where it was.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: Grid,
        rng: &mut R,
        occupied: &HashSet<Cell>,
    ) -> Result<(), PlacementError> {
        self.position = sample_free_cell(grid, rng, occupied)?;
        Ok(())
    }
}
