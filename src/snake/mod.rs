//! The snake: an ordered body of cells, a heading, and a pending-growth flag.

use std::collections::VecDeque;

use crate::game::{Cell, Direction};

/// The player's snake. The head is the front of `body`.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    grow_pending: bool,
    start_body: Vec<Cell>,
    start_direction: Direction,
}

impl Snake {
    /// Builds a snake from its starting body (head first) and heading.
    ///
    /// An empty `start_body` is replaced by a single cell at the origin so the body is never
    /// empty.
    pub fn new(start_body: &[Cell], start_direction: Direction) -> Self {
        let start_body = if start_body.is_empty() {
            vec![Cell::new(0, 0)]
        } else {
            start_body.to_vec()
        };
        Snake {
            body: start_body.iter().copied().collect(),
            direction: start_direction,
            grow_pending: false,
            start_body,
            start_direction,
        }
    }

    pub fn head(&self) -> Cell {
        // The body is never empty; see `new`.
        self.body.front().copied().unwrap_or(self.start_body[0])
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grow_pending(&self) -> bool {
        self.grow_pending
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Replaces the heading. Reversals are filtered by the caller's turn gate.
    pub fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advances one cell. The tail is dropped unless growth was pending.
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);
        if !self.grow_pending {
            self.body.pop_back();
        }
        self.grow_pending = false;
    }

    /// Marks growth; it takes effect on the next [`Snake::advance`].
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// True when the head shares a cell with any other segment.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|c| *c == head)
    }

    /// Restores the starting body and heading, discarding pending growth.
    pub fn reset(&mut self) {
        self.body = self.start_body.iter().copied().collect();
        self.direction = self.start_direction;
        self.grow_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{INITIAL_DIRECTION, INITIAL_SNAKE_BODY};
    use proptest::prelude::*;

    fn classic() -> Snake {
        Snake::new(&INITIAL_SNAKE_BODY, INITIAL_DIRECTION)
    }

    fn body(snake: &Snake) -> Vec<Cell> {
        snake.body().iter().copied().collect()
    }

    #[test]
    fn advance_moves_head_and_drops_tail() {
        let mut snake = classic();
        snake.advance();
        assert!(!snake.contains(Cell::new(4, 9)));
        assert_eq!(
            body(&snake),
            vec![Cell::new(7, 9), Cell::new(6, 9), Cell::new(5, 9)]
        );
    }

    #[test]
    fn growth_applies_on_next_advance_only() {
        let mut snake = classic();
        snake.grow();
        assert_eq!(snake.body().len(), 3);

        snake.advance();
        assert_eq!(snake.body().len(), 4);
        assert!(snake.contains(Cell::new(4, 9)));
        assert!(!snake.grow_pending());

        snake.advance();
        assert_eq!(snake.body().len(), 4);
    }

    #[test]
    fn turn_replaces_heading() {
        let mut snake = classic();
        snake.turn(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
        snake.advance();
        assert_eq!(snake.head(), Cell::new(6, 8));
    }

    #[test]
    fn detects_self_bite() {
        let mut snake = Snake::new(
            &[
                Cell::new(2, 2),
                Cell::new(1, 2),
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(3, 1),
            ],
            Direction::Right,
        );
        assert!(!snake.bites_itself());
        snake.turn(Direction::Up);
        snake.grow();
        snake.advance();
        assert_eq!(snake.head(), Cell::new(2, 1));
        assert!(snake.bites_itself());
    }

    #[test]
    fn reset_restores_start() {
        let mut snake = classic();
        snake.turn(Direction::Down);
        snake.grow();
        snake.advance();
        snake.grow();
        snake.reset();
        assert_eq!(body(&snake), INITIAL_SNAKE_BODY.to_vec());
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.grow_pending());
    }

    #[test]
    fn empty_start_body_still_has_a_head() {
        let snake = Snake::new(&[], Direction::Up);
        assert_eq!(snake.body().len(), 1);
        assert_eq!(snake.head(), Cell::new(0, 0));
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Right),
            Just(Direction::Up),
            Just(Direction::Down),
        ]
    }

    proptest! {
        #[test]
        fn length_only_changes_after_growth(
            steps in proptest::collection::vec((any_direction(), any::<bool>()), 1..60)
        ) {
            let mut snake = classic();
            for (direction, grow) in steps {
                let before = snake.body().len();
                let pending = snake.grow_pending();
                snake.turn(direction);
                snake.advance();
                prop_assert_eq!(snake.body().len(), before + usize::from(pending));
                if grow {
                    snake.grow();
                }
            }
        }
    }
}
