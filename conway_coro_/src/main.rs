// main.rs - Desktop front-end for the toroidal Game of Life

use anyhow::Context as _;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;    // Store subscription and step timer
mod config; // Defaults and CONWAY_* overrides
mod timer;  // Cancellable repeating step task
mod ui;     // egui view

use app::GameOfLife;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("conway=info,conway_coro=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    let config = AppConfig::from_env();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("step-timer")
        .enable_time()
        .build()
        .context("failed to start the step timer runtime")?;
    let game = GameOfLife::new(&config, runtime).context("failed to create the board")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(game)),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with an error: {err}"))
}
