mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regioncrop_core::config::ClientConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regioncrop", about = "Region-of-interest cropping client")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Client config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Server base URL (overrides the config file)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload up to four studies
    Upload(commands::upload::UploadArgs),
    /// Delete every file on the server
    StartOver(commands::start_over::StartOverArgs),
    /// Show the source dimensions of an uploaded file
    Dimensions(commands::dimensions::DimensionsArgs),
    /// Select a region on a thumbnail and crop the source image
    Crop(commands::crop::CropArgs),
    /// Download a thumbnail
    Fetch(commands::fetch::FetchArgs),
    /// Render the preview of a rectangle from a local image
    Preview(commands::preview::PreviewArgs),
    /// Print or save the default client config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Upload(args) => commands::upload::run(args, &config),
        Commands::StartOver(args) => commands::start_over::run(args, &config),
        Commands::Dimensions(args) => commands::dimensions::run(args, &config),
        Commands::Crop(args) => commands::crop::run(args, &config),
        Commands::Fetch(args) => commands::fetch::run(args, &config),
        Commands::Preview(args) => commands::preview::run(args),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match cli.config {
        Some(ref path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(ref server) = cli.server {
        config.server.base_url = server.clone();
    }
    Ok(config)
}
