//! gridsnake - terminal snake on a 40x40 board.
//!
//! The library exposes the engine, session orchestration and high score
//! storage for testing; the binary wires them to a crossterm terminal.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod high_scores;
pub mod input;
pub mod logging;
pub mod session;
pub mod ui;
pub mod utils;
