//! Grid geometry: cells, headings, and the bounded square board.

use rand::Rng;

/// A discrete board coordinate. `y` grows downwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell one step towards `direction`. May leave the grid.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit vector in grid coordinates.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// A square board of `size * size` cells with the origin in the top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Self {
        Grid { size: size.max(1) }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells on the board.
    pub fn area(&self) -> usize {
        let side = self.size as usize;
        side * side
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }

    /// The cell at a row-major `index`, if it lies on the board.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        let side = self.size as usize;
        (index < self.area()).then(|| Cell::new((index % side) as i32, (index / side) as i32))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.area()).filter_map(|i| self.cell_at(i))
    }

    /// A uniformly random in-bounds cell.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.random_range(0..self.size), rng.random_range(0..self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_GRID_SIZE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn opposite_is_involution() {
        for d in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn step_follows_screen_axes() {
        let c = Cell::new(6, 9);
        assert_eq!(c.step(Direction::Right), Cell::new(7, 9));
        assert_eq!(c.step(Direction::Left), Cell::new(5, 9));
        assert_eq!(c.step(Direction::Up), Cell::new(6, 8));
        assert_eq!(c.step(Direction::Down), Cell::new(6, 10));
    }

    #[test]
    fn bounds_are_half_open() {
        let grid = Grid::new(25);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(24, 24)));
        assert!(!grid.contains(Cell::new(25, 3)));
        assert!(!grid.contains(Cell::new(3, -1)));
    }

    #[test]
    fn cells_are_row_major() {
        let grid = Grid::new(5);
        assert_eq!(grid.cell_at(13), Some(Cell::new(3, 2)));
        assert_eq!(grid.cell_at(25), None);
        assert_eq!(grid.cells().count(), 25);
        assert_eq!(grid.cells().nth(5), Some(Cell::new(0, 1)));
    }

    #[test]
    fn area_of_the_largest_board_fits() {
        let grid = Grid::new(MAX_GRID_SIZE);
        assert_eq!(grid.area(), 1 << 20);
        assert_eq!(
            grid.cell_at(grid.area() - 1),
            Some(Cell::new(MAX_GRID_SIZE - 1, MAX_GRID_SIZE - 1))
        );
    }

    #[test]
    fn random_cells_stay_in_bounds() {
        let grid = Grid::new(4);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }
}
