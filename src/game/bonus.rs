//! Time-limited bonus food.
//!
//! The spawner alternates between [`BonusState::Idle`] and [`BonusState::Active`]. A spawn is
//! attempted whenever the spawner is idle and a full cooldown has passed since the previous
//! attempt; the cooldown restarts at the attempt, not at expiry or consumption. An active bonus
//! lives for a fixed lifetime and disappears early when eaten.

use std::collections::HashSet;
use std::time::Duration;

use rand::Rng;

use super::{Cell, Grid};
use crate::food::{PlacementError, sample_free_cell};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BonusState {
    Idle,
    Active { cell: Cell, spawned_at: Duration },
}

#[derive(Clone, Debug)]
pub struct BonusSpawner {
    state: BonusState,
    last_attempt: Duration,
    cooldown: Duration,
    lifetime: Duration,
}

impl BonusSpawner {
    /// A fresh spawner whose first spawn is due one cooldown after `now`.
    pub fn new(now: Duration, cooldown: Duration, lifetime: Duration) -> Self {
        BonusSpawner {
            state: BonusState::Idle,
            last_attempt: now,
            cooldown,
            lifetime,
        }
    }

    pub fn state(&self) -> BonusState {
        self.state
    }

    pub fn active_cell(&self) -> Option<Cell> {
        match self.state {
            BonusState::Active { cell, .. } => Some(cell),
            BonusState::Idle => None,
        }
    }

    /// Lifetime left at `now`, if a bonus is on the board.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        match self.state {
            BonusState::Active { spawned_at, .. } => {
                Some(self.lifetime.saturating_sub(now.saturating_sub(spawned_at)))
            },
            BonusState::Idle => None,
        }
    }

    /// Spawns a bonus if idle and the cooldown has elapsed. The cooldown restarts even when
    /// placement fails.
    pub fn try_spawn<R: Rng + ?Sized>(
        &mut self,
        now: Duration,
        grid: Grid,
        rng: &mut R,
        blocked: &HashSet<Cell>,
    ) -> Result<Option<Cell>, PlacementError> {
        if self.state != BonusState::Idle || now.saturating_sub(self.last_attempt) < self.cooldown
        {
            return Ok(None);
        }
        self.last_attempt = now;

        let cell = sample_free_cell(grid, rng, blocked)?;
        self.state = BonusState::Active {
            cell,
            spawned_at: now,
        };
        Ok(Some(cell))
    }

    /// Drops the bonus once its lifetime is over. Returns whether it expired.
    pub fn expire(&mut self, now: Duration) -> bool {
        match self.state {
            BonusState::Active { spawned_at, .. }
                if now.saturating_sub(spawned_at) >= self.lifetime =>
            {
                self.state = BonusState::Idle;
                true
            },
            _ => false,
        }
    }

    /// Consumes the bonus if `head` is on it.
    pub fn consume(&mut self, head: Cell) -> bool {
        if self.active_cell() == Some(head) {
            self.state = BonusState::Idle;
            true
        } else {
            false
        }
    }

    /// Discards any active bonus; the cooldown keeps running.
    pub fn clear(&mut self) {
        self.state = BonusState::Idle;
    }

    /// Discards any active bonus and requires a full cooldown from `now`.
    pub fn reset(&mut self, now: Duration) {
        self.state = BonusState::Idle;
        self.last_attempt = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const COOLDOWN: Duration = Duration::from_secs(10);
    const LIFETIME: Duration = Duration::from_secs(3);

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    fn spawner() -> BonusSpawner {
        BonusSpawner::new(Duration::ZERO, COOLDOWN, LIFETIME)
    }

    #[test]
    fn spawns_only_after_full_cooldown() {
        let mut bonus = spawner();
        let mut rng = StdRng::seed_from_u64(5);
        let grid = Grid::new(25);
        let blocked = HashSet::new();

        assert_eq!(bonus.try_spawn(secs(9.9), grid, &mut rng, &blocked), Ok(None));
        let cell = bonus.try_spawn(secs(10.0), grid, &mut rng, &blocked).unwrap();
        assert!(cell.is_some());
        assert_eq!(bonus.active_cell(), cell);
    }

    #[test]
    fn expires_after_lifetime() {
        let mut bonus = spawner();
        let mut rng = StdRng::seed_from_u64(5);
        bonus
            .try_spawn(secs(10.0), Grid::new(25), &mut rng, &HashSet::new())
            .unwrap();

        assert!(!bonus.expire(secs(12.9)));
        assert_eq!(bonus.remaining(secs(12.0)), Some(secs(1.0)));
        assert!(bonus.expire(secs(13.0)));
        assert_eq!(bonus.state(), BonusState::Idle);
        assert_eq!(bonus.remaining(secs(13.0)), None);
    }

    #[test]
    fn cooldown_restarts_at_attempt_not_expiry() {
        let mut bonus = spawner();
        let mut rng = StdRng::seed_from_u64(5);
        let grid = Grid::new(25);
        let blocked = HashSet::new();

        bonus.try_spawn(secs(10.0), grid, &mut rng, &blocked).unwrap();
        bonus.expire(secs(13.0));
        assert_eq!(bonus.try_spawn(secs(19.9), grid, &mut rng, &blocked), Ok(None));
        assert!(bonus.try_spawn(secs(20.0), grid, &mut rng, &blocked).unwrap().is_some());
    }

    #[test]
    fn no_spawn_while_active() {
        let mut bonus = BonusSpawner::new(Duration::ZERO, COOLDOWN, secs(100.0));
        let mut rng = StdRng::seed_from_u64(5);
        let grid = Grid::new(25);
        let blocked = HashSet::new();

        let first = bonus.try_spawn(secs(10.0), grid, &mut rng, &blocked).unwrap();
        assert_eq!(bonus.try_spawn(secs(25.0), grid, &mut rng, &blocked), Ok(None));
        assert_eq!(bonus.active_cell(), first);
    }

    #[test]
    fn consumption_only_on_the_bonus_cell() {
        let mut bonus = spawner();
        let mut rng = StdRng::seed_from_u64(5);
        let cell = bonus
            .try_spawn(secs(10.0), Grid::new(25), &mut rng, &HashSet::new())
            .unwrap()
            .unwrap();

        assert!(!bonus.consume(Cell::new(cell.x + 1, cell.y)));
        assert!(bonus.consume(cell));
        assert!(!bonus.consume(cell));
    }

    #[test]
    fn failed_placement_still_restarts_cooldown() {
        let grid = Grid::new(2);
        let blocked: HashSet<Cell> = grid.cells().collect();
        let mut bonus = spawner();
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(
            bonus.try_spawn(secs(10.0), grid, &mut rng, &blocked),
            Err(PlacementError::GridFull)
        );
        assert_eq!(bonus.state(), BonusState::Idle);
        assert_eq!(bonus.try_spawn(secs(15.0), grid, &mut rng, &HashSet::new()), Ok(None));
    }

    #[test]
    fn reset_requires_a_full_cooldown() {
        let mut bonus = spawner();
        let mut rng = StdRng::seed_from_u64(5);
        let grid = Grid::new(25);
        let blocked = HashSet::new();

        bonus.reset(secs(42.0));
        assert_eq!(bonus.try_spawn(secs(51.0), grid, &mut rng, &blocked), Ok(None));
        assert!(bonus.try_spawn(secs(52.0), grid, &mut rng, &blocked).unwrap().is_some());
    }

    proptest! {
        #[test]
        fn spawn_avoids_blocked_cells(
            seed in any::<u64>(),
            blocked in proptest::collection::hash_set((0i32..10, 0i32..10), 0..90)
        ) {
            let grid = Grid::new(10);
            let blocked: HashSet<Cell> =
                blocked.into_iter().map(|(x, y)| Cell::new(x, y)).collect();
            let mut bonus = spawner();
            let mut rng = StdRng::seed_from_u64(seed);

            let cell = bonus.try_spawn(COOLDOWN, grid, &mut rng, &blocked).unwrap().unwrap();
            prop_assert!(grid.contains(cell));
            prop_assert!(!blocked.contains(&cell));
        }
    }
}
