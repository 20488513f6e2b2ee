mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::PathBuf;

use anyhow::Context;
use regioncrop_core::config::ClientConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Optional first argument: path to a TOML client config.
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ClientConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ClientConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("RegionCrop"),
        ..Default::default()
    };

    eframe::run_native(
        "RegionCrop",
        options,
        Box::new(move |cc| Ok(Box::new(app::RegionCropApp::new(&cc.egui_ctx, config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
