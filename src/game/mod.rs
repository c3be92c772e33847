//! The snake simulation: board geometry, food placement, difficulty
//! profiles and the tick-driven engine.

pub mod difficulty;
pub mod grid;
mod logic;
pub mod placement;
pub mod types;

pub use difficulty::{Difficulty, DifficultyProfile, Theme};
pub use grid::{Cell, GridSize};
pub use placement::place_food;
pub use types::{Collision, Direction, SessionState, SnakeGame, TickOutcome};
