pub mod game_common;
pub mod level_select;
pub mod snake_scene;

use crate::game::SessionState;
use crate::session::{Renderer, Snapshot};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

/// Smallest terminal that fits the 40x40 board with its info panel.
pub const MIN_WIDTH: u16 = 62;
pub const MIN_HEIGHT: u16 = 26;

/// Draw one snapshot into the whole frame.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.size();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    match snapshot.state {
        SessionState::Idle => level_select::render_level_select(frame, area, snapshot),
        SessionState::Running | SessionState::Paused | SessionState::Ended => {
            snake_scene::render_snake_scene(frame, area, snapshot)
        }
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let text = format!(
        "Terminal too small: {}x{} (need {}x{})",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let message = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

/// Renders snapshots into a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.terminal.draw(|frame| draw(frame, snapshot))?;
        Ok(())
    }
}
