use anyhow::Context;
use chess_lib::openings::OpeningsData;
use chess_lib::table::RecordTable;
use chess_lib::win_rate::WinRateData;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Chess openings and Elo progression dashboard")]
pub struct OpeningsArgs {
    /// Directory that relative data paths are resolved against
    #[arg(long = "data-dir", default_value = ".")]
    pub data_dir: PathBuf,

    /// Opening success rates and average ratings
    #[arg(long = "openings", default_value = "RankedOpenings.csv")]
    pub openings: PathBuf,

    /// Elo per game played with black
    #[arg(long = "black-elo", default_value = "BlackElo.csv")]
    pub black_elo: PathBuf,

    /// Elo per game played with white
    #[arg(long = "white-elo", default_value = "WhiteElo.csv")]
    pub white_elo: PathBuf,
}

impl OpeningsArgs {
    pub fn load(&self) -> anyhow::Result<OpeningsData> {
        OpeningsData::new(
            load_table("openings", &self.data_dir, &self.openings)?,
            load_table("black elo", &self.data_dir, &self.black_elo)?,
            load_table("white elo", &self.data_dir, &self.white_elo)?,
        )
        .context("invalid openings dashboard data")
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Chess win rate and time control dashboard")]
pub struct WinRateArgs {
    /// Directory that relative data paths are resolved against
    #[arg(long = "data-dir", default_value = ".")]
    pub data_dir: PathBuf,

    /// Win rate per player and ECO code
    #[arg(long = "eco", default_value = "test.csv")]
    pub eco: PathBuf,

    /// Win rate per player and time control
    #[arg(long = "time-control", default_value = "test2.csv")]
    pub time_control: PathBuf,

    /// Advantage per time control
    #[arg(long = "advantage", default_value = "test3.csv")]
    pub advantage: PathBuf,
}

impl WinRateArgs {
    pub fn load(&self) -> anyhow::Result<WinRateData> {
        WinRateData::new(
            load_table("eco", &self.data_dir, &self.eco)?,
            load_table("time control", &self.data_dir, &self.time_control)?,
            load_table("advantage", &self.data_dir, &self.advantage)?,
        )
        .context("invalid win rate dashboard data")
    }
}

fn load_table(name: &str, data_dir: &Path, file: &Path) -> anyhow::Result<RecordTable> {
    let path = data_dir.join(file);
    RecordTable::from_path(name, &path)
        .with_context(|| format!("failed to load {name} table from {}", path.display()))
}

/// Log filter comes from `RUST_LOG`, `info` when unset.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
