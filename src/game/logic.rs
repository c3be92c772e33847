//! Snake game logic: session transitions, direction input, the per-tick step.

use super::difficulty::Difficulty;
use super::grid::Cell;
use super::placement::place_food;
use super::types::*;
use crate::constants::{POINTS_PER_FOOD, START_COL};
use rand::Rng;

impl SnakeGame {
    /// Begin a fresh session at `difficulty`. Valid from any state; a running
    /// session is simply replaced.
    pub fn start<R: Rng + ?Sized>(&mut self, difficulty: Difficulty, rng: &mut R) {
        self.difficulty = difficulty;
        self.state = SessionState::Running;
        self.snake.clear();
        self.snake
            .push_back(Cell::new((self.grid.rows / 2).max(1), START_COL));
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.tick_count = 0;
        self.food.clear();

        for _ in 0..difficulty.profile().food_count {
            self.spawn_food(rng);
        }
    }

    /// Return to the idle state, discarding the current session.
    pub fn reset(&mut self) {
        *self = SnakeGame::new(self.grid);
    }

    /// Request a direction for the next tick. Ignored unless running, and
    /// ignored if it would reverse the committed direction. Returns whether
    /// the request was accepted.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() || direction == self.direction.opposite() {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn pause(&mut self) {
        if self.state == SessionState::Running {
            self.state = SessionState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == SessionState::Paused {
            self.state = SessionState::Running;
        }
    }

    /// Running <-> Paused. No effect in any other state.
    pub fn toggle_pause(&mut self) {
        match self.state {
            SessionState::Running => self.pause(),
            SessionState::Paused => self.resume(),
            SessionState::Idle | SessionState::Ended => {}
        }
    }

    /// Advance the simulation by one step.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Skipped;
        }
        let Some(head) = self.head() else {
            return TickOutcome::Skipped;
        };

        self.direction = self.pending_direction;
        let new_head = head.step(self.direction);

        if !self.grid.contains(new_head) {
            return self.end(Collision::Wall);
        }
        // The tail counts too: it has not moved out of the way yet.
        if self.snake.contains(&new_head) {
            return self.end(Collision::SelfBite);
        }

        self.snake.push_front(new_head);
        self.tick_count += 1;

        let ate = match self.food.iter().position(|&f| f == new_head) {
            Some(index) => {
                self.food.remove(index);
                self.score += POINTS_PER_FOOD;
                self.spawn_food(rng);
                true
            }
            None => {
                self.snake.pop_back();
                false
            }
        };

        TickOutcome::Moved { ate }
    }

    fn end(&mut self, collision: Collision) -> TickOutcome {
        self.state = SessionState::Ended;
        TickOutcome::GameOver {
            collision,
            score: self.score,
        }
    }

    /// One placement attempt. A miss leaves the food set short until the
    /// next time food is eaten.
    fn spawn_food<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        match place_food(rng, self.grid, |cell| self.is_occupied(cell)) {
            Some(cell) => {
                self.food.push(cell);
                true
            }
            None => false,
        }
    }
}
