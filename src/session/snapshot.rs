//! What the renderer sees after every tick or transition.

use crate::game::{Cell, Collision, Difficulty, GridSize, SessionState, SnakeGame};
use std::io;

/// Outcome of the most recently finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub difficulty: Difficulty,
    pub score: u32,
    pub collision: Collision,
    /// The score beat the stored best for its difficulty.
    pub new_record: bool,
}

/// Full copy of the visible game state. Renderers redraw from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: SessionState,
    /// Difficulty being played, or highlighted on the level selection.
    pub difficulty: Difficulty,
    pub grid: GridSize,
    pub snake: Vec<Cell>,
    pub food: Vec<Cell>,
    pub score: u32,
    /// Moves made since the session started.
    pub tick_count: u64,
    /// Best score for `difficulty`.
    pub high_score: u32,
    pub last_game: Option<GameSummary>,
}

impl Snapshot {
    pub fn capture(
        game: &SnakeGame,
        difficulty: Difficulty,
        high_score: u32,
        last_game: Option<GameSummary>,
    ) -> Self {
        Self {
            state: game.state,
            difficulty,
            grid: game.grid,
            snake: game.snake.iter().copied().collect(),
            food: game.food.clone(),
            score: game.score,
            tick_count: game.tick_count,
            high_score,
            last_game,
        }
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }
}

/// Draws snapshots. Implemented by the terminal UI and by test doubles.
pub trait Renderer {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

/// Keeps every snapshot it is given.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Snapshot>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}
