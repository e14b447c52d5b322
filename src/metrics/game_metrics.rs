use std::time::{Duration, Instant};

/// Per-process play statistics shown in the HUD
pub struct GameMetrics {
    /// Start of the current run, None while idle
    pub start_time: Option<Instant>,
    pub elapsed_time: Duration,
    pub games_played: u32,
    /// Food eaten in the current run
    pub foods_eaten: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed_time: Duration::ZERO,
            games_played: 0,
            foods_eaten: 0,
        }
    }

    pub fn update(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed_time = start.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Some(Instant::now());
        self.elapsed_time = Duration::ZERO;
        self.foods_eaten = 0;
    }

    pub fn on_food(&mut self) {
        self.foods_eaten += 1;
    }

    /// Freeze the clock; the final time stays on screen until the next start
    pub fn on_game_over(&mut self) {
        self.update();
        self.start_time = None;
        self.games_played += 1;
    }

    /// Back to a blank clock without counting a game
    pub fn on_restart(&mut self) {
        self.start_time = None;
        self.elapsed_time = Duration::ZERO;
        self.foods_eaten = 0;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
