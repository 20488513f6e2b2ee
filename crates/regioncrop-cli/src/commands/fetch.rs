use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use regioncrop_core::config::ClientConfig;
use regioncrop_core::service::CropService;

#[derive(Args)]
pub struct FetchArgs {
    /// Thumbnail filename (e.g. R_CC.jpg)
    pub filename: String,

    /// Output file (defaults to the filename in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &FetchArgs, config: &ClientConfig) -> Result<()> {
    let service = super::connect(config)?;
    let locator = service.image_locator(&args.filename)?;
    let bytes = service.fetch_image(&locator)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&args.filename));
    std::fs::write(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    match image::load_from_memory(&bytes) {
        Ok(img) => println!(
            "Saved {} ({}x{}) to {}",
            locator,
            img.width(),
            img.height(),
            output.display()
        ),
        Err(_) => println!("Saved {} ({} bytes) to {}", locator, bytes.len(), output.display()),
    }
    Ok(())
}
