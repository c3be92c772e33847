//! Game session orchestration between the engine and its collaborators.

pub mod controller;
pub mod snapshot;
pub mod timer;

pub use controller::{Command, SessionController};
pub use snapshot::{GameSummary, RecordingRenderer, Renderer, Snapshot};
pub use timer::TickTimer;
