use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};
use tracing::info;

use crate::game::{Action, GameConfig, Session, TickReport};
use crate::input::{InputHandler, KeyAction};
use crate::persistence::HighScoreStore;
use crate::render::TerminalSink;

/// Redraw rate for the clock and the game over banner
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Play snake with keyboard and mouse in the terminal
pub struct HumanMode<B: Backend, S: HighScoreStore> {
    session: Session<TerminalSink<B>, S>,
    input_handler: InputHandler,
    should_quit: bool,
    /// The tick timer must be replaced before the next tick
    reschedule: bool,
}

impl<S: HighScoreStore> HumanMode<CrosstermBackend<Stderr>, S> {
    /// Take over the terminal, play until quit, then restore it
    pub async fn run(config: GameConfig, store: S) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let mut mode = HumanMode::new(config, store, terminal);

        // Run game loop with cleanup
        let result = mode.run_game_loop().await;

        mode.cleanup_terminal()?;

        result
    }

    async fn run_game_loop(&mut self) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = new_tick_timer(self.session.tick_interval_ms());
        let mut render_timer = interval(RENDER_INTERVAL);

        self.session.redraw()?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    self.on_event(maybe_event)?;
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.on_tick()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.session.sink_mut().hud_mut().metrics.update();
                    self.session.redraw()?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.reschedule {
                tick_timer = new_tick_timer(self.session.tick_interval_ms());
                self.reschedule = false;
            }

            if self.should_quit {
                break;
            }
        }

        info!(high_score = self.session.high_score(), "quit");
        Ok(())
    }

    fn cleanup_terminal(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        let terminal = self.session.sink_mut().terminal_mut();
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl<B: Backend, S: HighScoreStore> HumanMode<B, S> {
    pub fn new(config: GameConfig, store: S, terminal: Terminal<B>) -> Self {
        let input_handler = InputHandler::new(config.swipe_threshold);

        Self {
            session: Session::new(config, store, TerminalSink::new(terminal)),
            input_handler,
            should_quit: false,
            reschedule: false,
        }
    }

    /// Feed one item from the terminal event stream
    fn on_event(&mut self, maybe_event: Option<std::io::Result<Event>>) -> Result<()> {
        match maybe_event {
            Some(Ok(event)) => self.handle_event(event),
            Some(Err(err)) => Err(err).context("Failed to read terminal event"),
            // stdin is gone, no more input will arrive
            None => {
                info!("terminal event stream closed");
                self.should_quit = true;
                Ok(())
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let action = match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            Event::Mouse(mouse) => {
                let board = self.session.sink().board_area();
                self.input_handler.handle_mouse_event(mouse, board)
            }
            Event::Resize(_, _) => {
                self.session.redraw()?;
                KeyAction::None
            }
            _ => KeyAction::None,
        };

        match action {
            KeyAction::GameAction(action) => self.apply(action)?,
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }

        Ok(())
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        let changed = self.session.handle(action)?;

        match action {
            Action::Start if changed => {
                self.session.sink_mut().hud_mut().metrics.on_game_start();
                // first move one full interval after start
                self.reschedule = true;
            }
            Action::Restart => {
                self.session.sink_mut().hud_mut().metrics.on_restart();
                self.reschedule = true;
            }
            _ => {}
        }

        Ok(())
    }

    fn on_tick(&mut self) -> Result<()> {
        match self.session.advance()? {
            TickReport::Idle => {}
            TickReport::Moved {
                ate_food,
                interval_changed,
            } => {
                if ate_food {
                    self.session.sink_mut().hud_mut().metrics.on_food();
                }
                if interval_changed {
                    self.reschedule = true;
                }
            }
            // the fresh board runs at the default interval again
            TickReport::GameOver { .. } => self.reschedule = true,
        }

        Ok(())
    }
}

fn new_tick_timer(interval_ms: u64) -> Interval {
    let period = Duration::from_millis(interval_ms);
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
