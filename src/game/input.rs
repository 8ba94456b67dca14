//! Player intents and the once-per-tick turn gate.

use super::Direction;

/// An edge-triggered request from the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    Restart,
}

/// Holds at most one turn between two ticks.
///
/// The gate closes as soon as a turn is accepted and re-arms only when a tick consumes it, so a
/// burst of key presses between ticks can never fold the snake back through its own neck.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnGate {
    pending: Option<Direction>,
}

impl TurnGate {
    /// Queues `direction` if the gate is armed and it does not reverse `current`.
    pub fn offer(&mut self, direction: Direction, current: Direction) -> bool {
        if self.pending.is_some() || direction == current.opposite() {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Takes the queued turn, re-arming the gate.
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    /// Drops any queued turn.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_turn_until_taken() {
        let mut gate = TurnGate::default();
        assert!(gate.offer(Direction::Up, Direction::Right));
        assert!(!gate.offer(Direction::Left, Direction::Up));
        assert_eq!(gate.take(), Some(Direction::Up));
        assert_eq!(gate.take(), None);
        assert!(gate.offer(Direction::Left, Direction::Up));
    }

    #[test]
    fn rejects_reversal_without_closing() {
        let mut gate = TurnGate::default();
        assert!(!gate.offer(Direction::Left, Direction::Right));
        assert_eq!(gate.take(), None);
        assert!(gate.offer(Direction::Down, Direction::Right));
    }

    #[test]
    fn same_direction_consumes_the_gate() {
        let mut gate = TurnGate::default();
        assert!(gate.offer(Direction::Right, Direction::Right));
        assert!(!gate.offer(Direction::Up, Direction::Right));
    }
}
