use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use std::time::Instant;

use super::BoardView;
use crate::game::{Phase, Position};
use crate::metrics::GameMetrics;

/// Game over notice shown on top of the fresh board for a while
#[derive(Debug, Clone, Copy)]
pub struct Banner {
    pub score: u32,
    pub high_score: u32,
    pub until: Instant,
}

/// Everything on screen that is not part of the game state
#[derive(Default)]
pub struct Hud {
    pub metrics: GameMetrics,
    pub banner: Option<Banner>,
}

impl Hud {
    fn active_banner(&self) -> Option<Banner> {
        self.banner.filter(|banner| Instant::now() < banner.until)
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw a frame. Returns the screen area covered by board cells.
    pub fn render(&self, frame: &mut Frame, view: &BoardView<'_>, hud: &Hud) -> Rect {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(view, hud), chunks[0]);

        // two columns per cell keeps cells roughly square
        let cells = u16::try_from(view.cells_per_side().max(0)).unwrap_or(u16::MAX);
        let board_area = centered(
            chunks[1],
            cells.saturating_mul(2).saturating_add(2),
            cells.saturating_add(2),
        );
        let inner = grid_block(view.phase).inner(board_area);
        frame.render_widget(self.render_grid(view, inner), board_area);

        if let Some(banner) = hud.active_banner() {
            let area = centered(board_area, 30, 7);
            frame.render_widget(Clear, area);
            frame.render_widget(self.render_game_over(banner), area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);

        inner
    }

    /// Only the cells that fit in `visible` are built
    fn render_grid(&self, view: &BoardView<'_>, visible: Rect) -> Paragraph<'static> {
        let head = view.snake.first().copied();
        let cells = view.cells_per_side().max(0);
        let rows = cells.min(i32::from(visible.height));
        let cols = cells.min(i32::from(visible.width / 2));
        let mut lines = Vec::with_capacity(rows as usize);

        for row in 0..rows {
            let mut spans = Vec::with_capacity(cols as usize);

            for col in 0..cols {
                let pos = Position::new(col * view.grid_unit, row * view.grid_unit);

                let cell = if Some(pos) == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if view.snake.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == view.food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(grid_block(view.phase))
    }

    fn render_stats(&self, view: &BoardView<'_>, hud: &Hud) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(view.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("High: ", label),
            Span::styled(view.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(hud.metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Tick: ", label),
            Span::styled(format!("{}ms", view.tick_interval_ms), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, banner: Banner) -> Paragraph<'static> {
        let mut text = vec![
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    banner.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if banner.score > 0 && banner.score == banner.high_score {
            text.push(Line::from(Span::styled(
                "New high score!",
                Style::default().fg(Color::Green),
            )));
        }

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or tap/swipe to move | "),
            Span::styled("Space", Style::default().fg(Color::Green)),
            Span::raw(" start | "),
            Span::styled("R", Style::default().fg(Color::Yellow)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn grid_block(phase: Phase) -> Block<'static> {
    let title = match phase {
        Phase::Idle => " Snake - press Space ",
        Phase::Running => " Snake ",
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::White))
        .title(title)
}

/// Rect of at most `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
