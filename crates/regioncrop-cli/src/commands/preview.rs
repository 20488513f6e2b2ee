use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use regioncrop_core::geometry::{DisplayRect, Point, Size};
use regioncrop_core::preview::render_preview;

#[derive(Args)]
pub struct PreviewArgs {
    /// Local image (e.g. a downloaded thumbnail)
    pub image: PathBuf,

    /// Drag start, displayed coordinates
    #[arg(long, value_parser = super::parse_point)]
    pub from: Point,

    /// Drag end, displayed coordinates
    #[arg(long, value_parser = super::parse_point)]
    pub to: Point,

    /// Displayed size of the image (defaults to its native size)
    #[arg(long, value_parser = super::parse_size)]
    pub display: Option<Size>,

    /// Output PNG
    #[arg(short, long, default_value = "preview.png")]
    pub output: PathBuf,
}

pub fn run(args: &PreviewArgs) -> Result<()> {
    let img = image::open(&args.image)
        .with_context(|| format!("Failed to open {}", args.image.display()))?;
    let displayed = args
        .display
        .unwrap_or_else(|| Size::new(img.width() as f64, img.height() as f64));

    let rect = DisplayRect::from_corners(args.from, args.to);
    let Some(preview) = render_preview(&img, &rect, displayed) else {
        bail!("Selection {rect} has no area");
    };

    preview
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!(
        "Preview {}x{} saved to {}",
        preview.width(),
        preview.height(),
        args.output.display()
    );
    Ok(())
}
