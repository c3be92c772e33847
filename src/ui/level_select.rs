//! Level selection screen shown while the session is idle.

use super::game_common::controls_line;
use super::snake_scene::palette;
use crate::game::{Collision, Difficulty};
use crate::session::Snapshot;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub fn render_level_select(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    frame.render_widget(Clear, area);

    let selected = snapshot.difficulty;
    let accent = palette(selected.profile().theme).accent;

    let block = Block::default()
        .title(" Snake - Choose a level ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                               // Spacer
            Constraint::Length(Difficulty::ALL.len() as u16 + 1), // Levels
            Constraint::Length(1),                               // Spacer
            Constraint::Length(2),                               // Best + last game
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let items: Vec<ListItem> = Difficulty::ALL
        .iter()
        .map(|&difficulty| {
            let profile = difficulty.profile();
            let is_selected = difficulty == selected;
            let prefix = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(palette(profile.theme).accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let food = if profile.food_count == 1 {
                "1 food".to_string()
            } else {
                format!("{} food", profile.food_count)
            };
            ListItem::new(format!(
                "{}{}. {:<8} {:>4}ms  {}",
                prefix,
                difficulty.index() + 1,
                difficulty.name(),
                profile.tick_interval_ms,
                food
            ))
            .style(style)
        })
        .collect();
    frame.render_widget(List::new(items), centered(chunks[1], 34));

    let mut info = vec![Line::from(vec![
        Span::styled(
            format!("Best on {}: ", selected.name()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            snapshot.high_score.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])];
    if let Some(last) = snapshot.last_game {
        let cause = match last.collision {
            Collision::Wall => "wall",
            Collision::SelfBite => "tail",
        };
        info.push(Line::from(Span::styled(
            format!(
                "Last game: {} on {} ({}){}",
                last.score,
                last.difficulty.name(),
                cause,
                if last.new_record { " - new record!" } else { "" }
            ),
            Style::default().fg(Color::Cyan),
        )));
    }
    frame.render_widget(
        Paragraph::new(info).alignment(Alignment::Center),
        chunks[3],
    );

    let help = Paragraph::new(controls_line(&[
        ("[↑/↓]", "Select"),
        ("[Enter]", "Play"),
        ("[1-3]", "Quick start"),
        ("[Q]", "Quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

/// A horizontally centred strip of `width` columns inside `area`.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
