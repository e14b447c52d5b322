use anyhow::Result;
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::logging::init_file_logging;
use grid_snake::modes::HumanMode;
use grid_snake::persistence::JsonFileStore;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// JSON config file; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length in board units
    #[arg(long)]
    board_size: Option<i32>,

    /// Cell size in board units
    #[arg(long)]
    grid_unit: Option<i32>,

    /// Starting tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Speed up a little every time food is eaten
    #[arg(long)]
    speed_up: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where the high score is kept
    #[arg(long, default_value = "high_score.json")]
    high_score_file: PathBuf,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(grid_unit) = self.grid_unit {
            config.grid_unit = grid_unit;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.speed_up && config.speed_up.is_none() {
            config = config.with_speed_up();
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let config = cli.game_config()?;
    let store = JsonFileStore::open(&cli.high_score_file);
    info!(?config, high_score_file = ?store.path(), "starting");

    HumanMode::run(config, store).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["grid_snake"]);
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
        assert_eq!(cli.high_score_file, PathBuf::from("high_score.json"));
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::parse_from(["grid_snake", "--tick-ms", "120", "--speed-up", "--seed", "3"]);
        let config = cli.game_config().unwrap();
        assert_eq!(config.tick_interval_ms, 120);
        assert!(config.speed_up.is_some());
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_invalid_board_rejected() {
        let cli = Cli::parse_from(["grid_snake", "--board-size", "410"]);
        assert!(cli.game_config().is_err());
    }
}
