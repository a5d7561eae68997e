use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

#[derive(Parser, Debug)]
#[command(about = "Admin dashboard for browsing and inspecting the user roster")]
struct Args {
    /// Roster JSON file; overrides the settings file and environment.
    #[arg(long)]
    roster: Option<PathBuf>,
    /// Settings file (defaults to ./admin_gui.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref())?.with_roster_override(args.roster);

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    tracing::info!(roster = %settings.roster_path.display(), "starting admin dashboard");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx).context("failed to spawn roster worker")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([900.0, 560.0]),
        ..Default::default()
    };
    let roster_path = settings.roster_path.clone();
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(ui::theme::visuals());
            Ok(Box::new(ui::AdminApp::new(cmd_tx, ui_rx, roster_path)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("admin dashboard exited with an error: {err}"))
}
