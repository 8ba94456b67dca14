//! Score counter and milestone-driven palette progression.

/// Running score plus the snake palette index derived from score milestones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    last_milestone: u32,
    palette_index: usize,
    food_points: u32,
    bonus_points: u32,
    milestone_step: u32,
    palette_size: usize,
}

impl Scoreboard {
    pub fn new(
        food_points: u32,
        bonus_points: u32,
        milestone_step: u32,
        palette_size: usize,
    ) -> Self {
        Scoreboard {
            score: 0,
            last_milestone: 0,
            palette_index: 0,
            food_points,
            bonus_points,
            milestone_step: milestone_step.max(1),
            palette_size: palette_size.max(1),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Index into the snake palette, in `0..palette_size`.
    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    pub fn on_food_eaten(&mut self) {
        self.score += self.food_points;
    }

    pub fn on_bonus_eaten(&mut self) {
        self.score += self.bonus_points;
    }

    /// Advances the palette by one when the score has passed a new milestone.
    /// Returns the new index if it changed.
    pub fn check_palette_advance(&mut self) -> Option<usize> {
        let milestone = self.score / self.milestone_step;
        if milestone <= self.last_milestone {
            return None;
        }
        self.palette_index = (self.palette_index + 1) % self.palette_size;
        self.last_milestone = milestone;
        Some(self.palette_index)
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.last_milestone = 0;
        self.palette_index = 0;
    }
}
