//! Play field rendering.
//!
//! Half-block pixels: two board rows share one terminal row through `▀`
//! (fg = upper cell, bg = lower cell), one terminal column per board column.

use super::game_common::{
    create_game_layout, render_center_prompt, render_game_over_overlay, render_info_panel_frame,
    render_status_bar,
};
use crate::game::{Cell, Collision, SessionState, Theme};
use crate::session::Snapshot;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const FOOD_COLOR: Color = Color::Rgb(255, 200, 40);
const FIELD_BORDER: Color = Color::Rgb(80, 80, 80);
const INFO_PANEL_WIDTH: u16 = 18;

/// Colours for one difficulty theme.
pub struct Palette {
    pub accent: Color,
    pub head: Color,
    body_bright: (f64, f64, f64),
    body_dim: (f64, f64, f64),
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Green => Palette {
            accent: Color::LightGreen,
            head: Color::Rgb(100, 255, 100),
            body_bright: (50.0, 220.0, 50.0),
            body_dim: (20.0, 80.0, 20.0),
        },
        Theme::Blue => Palette {
            accent: Color::LightBlue,
            head: Color::Rgb(120, 190, 255),
            body_bright: (60.0, 140.0, 240.0),
            body_dim: (20.0, 40.0, 100.0),
        },
        Theme::Red => Palette {
            accent: Color::LightRed,
            head: Color::Rgb(255, 120, 110),
            body_bright: (230.0, 60.0, 50.0),
            body_dim: (90.0, 20.0, 20.0),
        },
    }
}

impl Palette {
    /// Segment colour fading from bright behind the head to dim at the tail.
    fn body(&self, index: usize, snake_len: usize) -> Color {
        let t = index as f64 / (snake_len - 1).max(1) as f64;
        let mix = |a: f64, b: f64| (a * (1.0 - t) + b * t) as u8;
        Color::Rgb(
            mix(self.body_bright.0, self.body_dim.0),
            mix(self.body_bright.1, self.body_dim.1),
            mix(self.body_bright.2, self.body_dim.2),
        )
    }

    fn body_swatch(&self) -> Color {
        Color::Rgb(
            self.body_bright.0 as u8,
            self.body_bright.1 as u8,
            self.body_bright.2 as u8,
        )
    }
}

const GAME_OVER_WIDTH: u16 = 46;
const GAME_OVER_HEIGHT: u16 = 11;

pub fn render_snake_scene(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let colors = palette(snapshot.difficulty.profile().theme);
    let title = format!(" Snake - {} ", snapshot.difficulty.name());
    let field_height = (snapshot.grid.rows as u16).div_ceil(2) + 2;
    let layout = create_game_layout(
        frame,
        area,
        &title,
        colors.accent,
        field_height,
        INFO_PANEL_WIDTH,
    );

    render_play_field(frame, layout.content, snapshot, &colors);

    match snapshot.state {
        SessionState::Paused => render_center_prompt(frame, layout.content, "[ PAUSED ]"),
        // The crashed board stays visible around the panel
        SessionState::Ended => render_game_over(frame, layout.content, snapshot),
        SessionState::Idle | SessionState::Running => {}
    }

    render_status_bar_content(frame, layout.status_bar, snapshot, &colors);
    render_info_panel(frame, layout.info_panel, snapshot, &colors);
}

fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &Snapshot, colors: &Palette) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let grid_w = snapshot.grid.cols.max(0) as usize;
    let grid_h = snapshot.grid.rows.max(0) as usize;

    // Board cells are 1-based; pixels are 0-based.
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid_w]; grid_h];
    let mut paint = |row: i16, col: i16, color: Color| {
        if snapshot.grid.contains(Cell::new(row, col)) {
            pixels[(row - 1) as usize][(col - 1) as usize] = Some(color);
        }
    };

    for food in &snapshot.food {
        paint(food.row, food.col, FOOD_COLOR);
    }
    let snake_len = snapshot.snake.len();
    // Tail first so the head wins if anything overlaps.
    for (i, seg) in snapshot.snake.iter().enumerate().rev() {
        let color = if i == 0 {
            colors.head
        } else {
            colors.body(i, snake_len)
        };
        paint(seg.row, seg.col, color);
    }

    let content_rows = grid_h.div_ceil(2);
    let render_w = ((grid_w + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;
    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;
    let border = Style::default().fg(FIELD_BORDER);

    // Top border carries the score and best
    {
        let score_text = format!(" {} ", snapshot.score);
        let best_text = format!(" Best {} ", snapshot.high_score);
        let used = score_text.len() + best_text.len();
        let left = 1.min(inner_w);
        let middle = inner_w.saturating_sub(used + 2);
        let right = inner_w.saturating_sub(left + used + middle);

        let spans = vec![
            Span::styled(format!("{}{}", BORDER_TL, horizontal(left)), border),
            Span::styled(
                score_text,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(horizontal(middle), border),
            Span::styled(best_text, Style::default().fg(colors.accent)),
            Span::styled(format!("{}{}", horizontal(right), BORDER_TR), border),
        ];
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    let empty_row: Vec<Option<Color>> = vec![None; grid_w];
    for term_row in 0..content_rows {
        let top_row = pixels.get(term_row * 2).unwrap_or(&empty_row);
        let bot_row = pixels.get(term_row * 2 + 1).unwrap_or(&empty_row);

        let mut spans: Vec<Span> = vec![Span::styled(BORDER_V.to_string(), border)];

        // Batch runs of identical colour pairs into one span
        let mut cur = (Color::Reset, Color::Reset);
        let mut run = String::new();
        for (&top, &bot) in top_row.iter().zip(bot_row.iter()).take(inner_w) {
            let pair = (top.unwrap_or(EMPTY_BG), bot.unwrap_or(EMPTY_BG));
            if pair != cur && !run.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    Style::default().fg(cur.0).bg(cur.1),
                ));
            }
            cur = pair;
            run.push(HALF_TOP);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, Style::default().fg(cur.0).bg(cur.1)));
        }
        spans.push(Span::styled(BORDER_V.to_string(), border));

        let row_y = y_off + 1 + term_row as u16;
        if row_y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(x_off, row_y, render_w, 1),
            );
        }
    }

    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let line = format!("{}{}{}", BORDER_BL, horizontal(inner_w), BORDER_BR);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(line, border))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

fn horizontal(len: usize) -> String {
    BORDER_H.to_string().repeat(len)
}

fn render_status_bar_content(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    colors: &Palette,
) {
    match snapshot.state {
        SessionState::Paused => {
            render_status_bar(
                frame,
                area,
                "Paused",
                Color::Yellow,
                &[("[Space]", "Resume"), ("[Esc]", "Menu"), ("[Q]", "Quit")],
            );
            return;
        }
        SessionState::Ended => {
            render_status_bar(
                frame,
                area,
                "Game over",
                Color::LightRed,
                &[("[R]", "Play again"), ("[Esc]", "Menu"), ("[Q]", "Quit")],
            );
            return;
        }
        SessionState::Idle | SessionState::Running => {}
    }

    render_status_bar(
        frame,
        area,
        "Eat and grow. Avoid the walls and your tail.",
        colors.accent,
        &[
            ("[Arrows]", "Steer"),
            ("[Space]", "Pause"),
            ("[Esc]", "Menu"),
            ("[Q]", "Quit"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot, colors: &Palette) {
    let inner = render_info_panel_frame(frame, area);
    let profile = snapshot.difficulty.profile();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Level: ", label),
            Span::styled(snapshot.difficulty.name(), Style::default().fg(colors.accent)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best: ", label),
            Span::styled(snapshot.high_score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(snapshot.snake.len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Moves: ", label),
            Span::styled(snapshot.tick_count.to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", profile.tick_interval_ms), value),
        ]),
        Line::from(vec![
            Span::styled("Food: ", label),
            Span::styled(
                format!("{}/{}", snapshot.food.len(), profile.food_count),
                value,
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        legend_line(colors.head, "Head"),
        legend_line(colors.body_swatch(), "Body"),
        legend_line(FOOD_COLOR, "Food"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn legend_line(color: Color, name: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(color)),
        Span::styled(name, Style::default().fg(Color::DarkGray)),
    ])
}

fn render_game_over(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let summary = snapshot.last_game;
    let new_record = summary.is_some_and(|s| s.new_record);
    let score = summary.map_or(snapshot.score, |s| s.score);

    let (title, color) = if new_record {
        ("NEW HIGH SCORE!", Color::Yellow)
    } else {
        ("GAME OVER", Color::LightRed)
    };

    let cause = match summary.map(|s| s.collision) {
        Some(Collision::Wall) => "You hit the wall.",
        Some(Collision::SelfBite) => "You bit your own tail.",
        None => "The game is over.",
    };
    let message = format!("{} Final score: {}", cause, score);
    let detail = format!(
        "Best on {}: {}",
        snapshot.difficulty.name(),
        snapshot.high_score
    );

    let panel = Rect::new(
        area.x + area.width.saturating_sub(GAME_OVER_WIDTH) / 2,
        area.y + area.height.saturating_sub(GAME_OVER_HEIGHT) / 2,
        GAME_OVER_WIDTH.min(area.width),
        GAME_OVER_HEIGHT.min(area.height),
    );
    render_game_over_overlay(
        frame,
        panel,
        color,
        title,
        &message,
        &detail,
        &[("[R]", "Play again"), ("[Esc]", "Menu"), ("[Q]", "Quit")],
    );
}
