//! Snake game data structures.
//!
//! The engine state lives in [`SnakeGame`]; state transitions are in
//! `logic.rs`.

use super::difficulty::Difficulty;
use super::grid::{Cell, GridSize};
use std::collections::VecDeque;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (d_row, d_col) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No game yet, or back at the level selection.
    Idle,
    Running,
    Paused,
    /// The last game ended in a collision.
    Ended,
}

/// What the head ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened: not running.
    Skipped,
    /// The snake advanced one cell.
    Moved { ate: bool },
    /// The session ended.
    GameOver { collision: Collision, score: u32 },
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub grid: GridSize,
    pub state: SessionState,
    pub difficulty: Difficulty,

    // Snake state
    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Cell>,
    /// Direction committed on the last tick.
    pub direction: Direction,
    /// Requested direction, committed at the start of the next tick.
    pub pending_direction: Direction,

    /// Food currently on the board, in placement order.
    pub food: Vec<Cell>,

    pub score: u32,
    /// Ticks advanced since the session started.
    pub tick_count: u64,
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}

impl SnakeGame {
    /// An idle engine on the given board. Call `start` to begin a session.
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            state: SessionState::Idle,
            difficulty: Difficulty::Easy,
            snake: VecDeque::new(),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: Vec::new(),
            score: 0,
            tick_count: 0,
        }
    }

    /// Head of the snake, if a session has been started.
    pub fn head(&self) -> Option<Cell> {
        self.snake.front().copied()
    }

    /// True if `cell` is part of the snake or holds food.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.snake.contains(&cell) || self.food.contains(&cell)
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }
}
