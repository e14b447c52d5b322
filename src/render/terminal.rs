use anyhow::{Context, Result};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::time::{Duration, Instant};

use super::renderer::{Banner, Hud, Renderer};
use super::{BoardView, RenderSink};

/// How long the game over banner stays up
const BANNER_DURATION: Duration = Duration::from_secs(3);

/// Render sink drawing into a ratatui terminal
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    renderer: Renderer,
    hud: Hud,
    board_area: Rect,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            renderer: Renderer::new(),
            hud: Hud::default(),
            board_area: Rect::default(),
        }
    }

    pub fn hud_mut(&mut self) -> &mut Hud {
        &mut self.hud
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Screen area of the board cells in the last frame
    pub fn board_area(&self) -> Rect {
        self.board_area
    }
}

impl<B: Backend> RenderSink for TerminalSink<B> {
    fn draw(&mut self, view: &BoardView<'_>) -> Result<()> {
        let Self {
            terminal,
            renderer,
            hud,
            board_area,
        } = self;

        terminal
            .draw(|frame| {
                *board_area = renderer.render(frame, view, hud);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn game_over(&mut self, score: u32, high_score: u32) -> Result<()> {
        self.hud.metrics.on_game_over();
        self.hud.banner = Some(Banner {
            score,
            high_score,
            until: Instant::now() + BANNER_DURATION,
        });
        Ok(())
    }
}
