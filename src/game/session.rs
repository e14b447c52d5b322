//! Idle/Running state machine around the engine
//!
//! A [`Session`] holds the only mutable handle to the [`GameState`]. An
//! external clock calls [`Session::advance`] once per tick; the session talks
//! to the render sink after every change and to the high score store when a
//! run ends.

use anyhow::Result;
use tracing::{debug, info, warn};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    engine::GameEngine,
    state::{CollisionType, GameState},
};
use crate::persistence::HighScoreStore;
use crate::render::{BoardView, RenderSink};

/// Lifecycle phase of a session
///
/// Game over is not a resting phase: a terminal tick goes straight back to
/// `Idle` with a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// What one call to [`Session::advance`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickReport {
    /// Nothing to do, the session is idle
    Idle,
    /// The snake moved
    Moved {
        ate_food: bool,
        /// The tick interval changed and the driver must reschedule
        interval_changed: bool,
    },
    /// The run ended and the board was reset
    GameOver {
        score: u32,
        high_score: u32,
        collision: CollisionType,
    },
}

pub struct Session<R: RenderSink, S: HighScoreStore> {
    engine: GameEngine,
    state: GameState,
    phase: Phase,
    high_score: u32,
    store: S,
    sink: R,
}

impl<R: RenderSink, S: HighScoreStore> Session<R, S> {
    pub fn new(config: GameConfig, store: S, sink: R) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        let high_score = store.high_score();

        info!(seed = engine.seed(), high_score, "session created");

        Self {
            engine,
            state,
            phase: Phase::Idle,
            high_score,
            store,
            sink,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Interval the driver should tick at right now
    pub fn tick_interval_ms(&self) -> u64 {
        self.state.tick_interval_ms
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn state_for_test(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Apply a UI command. Returns true if it changed anything.
    pub fn handle(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Turn(direction) => Ok(self.turn(direction)),
            Action::Start => Ok(self.start()),
            Action::Restart => {
                self.restart()?;
                Ok(true)
            }
        }
    }

    /// Idle -> Running, heading right. Ignored while already running.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Running {
            return false;
        }

        self.state.snake.direction = Direction::Right;
        self.phase = Phase::Running;
        info!(interval_ms = self.state.tick_interval_ms, "game started");
        true
    }

    /// Throw away the current board and go back to Idle
    pub fn restart(&mut self) -> Result<()> {
        self.reset();
        info!("game restarted");
        self.redraw()
    }

    /// Request a turn. Only honored while running, at most once per tick.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        let accepted = self.state.request_turn(direction);
        if accepted {
            debug!(?direction, "turn accepted");
        }
        accepted
    }

    /// Run one tick
    pub fn advance(&mut self) -> Result<TickReport> {
        if self.phase == Phase::Idle {
            return Ok(TickReport::Idle);
        }

        let result = self.engine.step(&mut self.state);

        if let Some(collision) = result.info.collision_type {
            return self.finish_run(collision);
        }

        if result.info.ate_food {
            debug!(score = self.state.score, length = self.state.snake.len(), "food eaten");
        }
        if result.info.interval_changed {
            debug!(interval_ms = self.state.tick_interval_ms, "speed increased");
        }

        self.redraw()?;

        Ok(TickReport::Moved {
            ate_food: result.info.ate_food,
            interval_changed: result.info.interval_changed,
        })
    }

    /// Push the current board to the render sink
    pub fn redraw(&mut self) -> Result<()> {
        let view = BoardView {
            snake: &self.state.snake.body,
            food: self.state.food,
            board_size: self.state.board_size,
            grid_unit: self.state.grid_unit,
            score: self.state.score,
            high_score: self.high_score,
            phase: self.phase,
            tick_interval_ms: self.state.tick_interval_ms,
        };
        self.sink.draw(&view)
    }

    fn finish_run(&mut self, collision: CollisionType) -> Result<TickReport> {
        let score = self.state.score;
        info!(score, ?collision, steps = self.state.steps, "game over");

        if score > self.high_score {
            self.high_score = score;
            // a failed write still keeps the new record for this process
            if let Err(err) = self.store.set_high_score(score) {
                warn!(error = %err, score, "failed to persist high score");
            }
        }

        self.sink.game_over(score, self.high_score)?;
        self.reset();
        self.redraw()?;

        Ok(TickReport::GameOver {
            score,
            high_score: self.high_score,
            collision,
        })
    }

    fn reset(&mut self) {
        self.state = self.engine.reset();
        self.phase = Phase::Idle;
    }
}
