//! Key event to session command mapping.
//!
//! The mapping depends on which screen is showing: arrows steer during play
//! but move the highlight on the level selection.

use crate::game::{Difficulty, Direction, SessionState};
use crate::session::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

pub fn map_key(key: KeyEvent, state: SessionState) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Some(Command::Quit);
    }

    match state {
        SessionState::Idle => map_menu_key(key.code),
        SessionState::Running | SessionState::Paused => map_play_key(key.code),
        SessionState::Ended => map_game_over_key(key.code),
    }
}

fn map_menu_key(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Up => Command::SelectPrevious,
        KeyCode::Down => Command::SelectNext,
        KeyCode::Enter | KeyCode::Char(' ') => Command::StartSelected,
        KeyCode::Char('1') | KeyCode::Char('e') | KeyCode::Char('E') => {
            Command::Start(Difficulty::Easy)
        }
        KeyCode::Char('2') | KeyCode::Char('m') | KeyCode::Char('M') => {
            Command::Start(Difficulty::Medium)
        }
        KeyCode::Char('3') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Command::Start(Difficulty::Hard)
        }
        KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn map_play_key(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Up => Command::Turn(Direction::Up),
        KeyCode::Down => Command::Turn(Direction::Down),
        KeyCode::Left => Command::Turn(Direction::Left),
        KeyCode::Right => Command::Turn(Direction::Right),
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Command::TogglePause,
        KeyCode::Esc => Command::Menu,
        _ => return None,
    };
    Some(command)
}

fn map_game_over_key(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter | KeyCode::Char(' ') => {
            Command::Restart
        }
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Command::Menu,
        _ => return None,
    };
    Some(command)
}
