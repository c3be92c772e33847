//! Per-difficulty best scores. Stored in `~/.gridsnake/high_scores.json`
//! unless persistence is disabled.

pub mod persistence;
pub mod types;

pub use persistence::{InMemoryStore, JsonFileStore, ScoreStore};
pub use types::{HighScoreLedger, HighScores};
