//! Gomoku against MiMiu
//!
//! Desktop window for playing gomoku against the companion opponent.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use gomoku::ui::{GomokuApp, Session};
use gomoku::{AppConfig, JsonFileStore, MemoryStore, StateStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let file_config = match &cli.config {
        Some(path) => AppConfig::from_file(path).with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    let config = cli.apply(file_config);

    let store: Box<dyn StateStore> = match &config.save_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "saving games to disk");
            Box::new(JsonFileStore::new(dir))
        }
        None => Box::new(MemoryStore::new()),
    };

    info!(difficulty = %config.difficulty, user = %config.user_id, "starting");
    let session = Session::new(&config, store);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku with MiMiu"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, session)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
