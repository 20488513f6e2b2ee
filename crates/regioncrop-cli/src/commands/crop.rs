use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use regioncrop_core::config::ClientConfig;
use regioncrop_core::geometry::{Dimensions, Point, Size};
use regioncrop_core::selection::CropMode;
use regioncrop_core::service::{resolver_for, CropService, FixedDimensions, ResolveDimensions};
use regioncrop_core::session::{build_request, CropApplied, CropSession, DisplayImage};
use tracing::debug;

use crate::summary::print_crop_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Drag a rectangle (--from / --to)
    Rectangle,
    /// Click polygon vertices (--point, repeated)
    Polygon,
}

impl From<ModeArg> for CropMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Rectangle => CropMode::Rectangle,
            ModeArg::Polygon => CropMode::Polygon,
        }
    }
}

#[derive(Args)]
pub struct CropArgs {
    /// Thumbnail filename as shown by the server (e.g. R_CC.jpg)
    pub filename: String,

    /// Selection mode (defaults to polygon when --point is given, else the config default)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Rectangle drag start, displayed coordinates
    #[arg(long, value_parser = super::parse_point)]
    pub from: Option<Point>,

    /// Rectangle drag end, displayed coordinates
    #[arg(long, value_parser = super::parse_point)]
    pub to: Option<Point>,

    /// Polygon vertex, displayed coordinates (repeat in order)
    #[arg(long = "point", value_parser = super::parse_point)]
    pub points: Vec<Point>,

    /// Size the thumbnail was displayed at (defaults to its native size)
    #[arg(long, value_parser = super::parse_size)]
    pub display: Option<Size>,

    /// Source image size, skipping the server lookup
    #[arg(long, value_parser = super::parse_size)]
    pub source: Option<Size>,

    /// Print the request without sending it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: &CropArgs, config: &ClientConfig) -> Result<()> {
    let service = super::connect(config)?;
    let mode = resolve_mode(args, config);

    let locator = service.image_locator(&args.filename)?;
    let native = thumbnail_dimensions(&service, &locator, args.display)?;
    let displayed = args.display.unwrap_or_else(|| native.into());

    let mut session = CropSession::new(mode);
    session.show_image(DisplayImage {
        locator,
        displayed,
        native,
    });
    replay_pointer(args, &mut session)?;

    let snapshot = session.snapshot()?;
    let request = match args.source {
        Some(size) => build_request(&snapshot, &FixedDimensions(to_dimensions(size))),
        None => {
            let resolver: Box<dyn ResolveDimensions + '_> =
                resolver_for(&config.dimensions, &service);
            build_request(&snapshot, resolver.as_ref())
        }
    }?;

    debug!(?request, "built crop request");
    print_crop_summary(&snapshot, &request, displayed);

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let pb = super::spinner("Cropping...")?;
    let outcome = service
        .crop(&request)
        .and_then(|resp| resp.into_result())
        .and_then(|path| service.resolve_path(&path));
    pb.finish_and_clear();

    match session.apply(&snapshot.ticket, outcome) {
        CropApplied::Replaced(url) => {
            println!("Cropped image: {url}");
            Ok(())
        }
        CropApplied::Failed(msg) => bail!("Error cropping image: {msg}"),
        CropApplied::Superseded => bail!("Crop result was superseded"),
    }
}

fn resolve_mode(args: &CropArgs, config: &ClientConfig) -> CropMode {
    match args.mode {
        Some(m) => m.into(),
        None if !args.points.is_empty() => CropMode::Polygon,
        None => config.selector.default_mode,
    }
}

/// Feed the requested selection through the selector as pointer events.
fn replay_pointer(args: &CropArgs, session: &mut CropSession) -> Result<()> {
    match session.selector.mode() {
        CropMode::Rectangle => {
            let (Some(from), Some(to)) = (args.from, args.to) else {
                bail!("Rectangle mode needs --from X,Y and --to X,Y");
            };
            session.selector.pointer_down(from);
            session.selector.pointer_move(to);
            session.selector.pointer_up(to);
        }
        CropMode::Polygon => {
            if args.points.is_empty() {
                bail!("Polygon mode needs at least one --point X,Y");
            }
            for &p in &args.points {
                session.selector.pointer_down(p);
            }
        }
    }
    Ok(())
}

/// Native size of the thumbnail. Downloads it unless the displayed size is given.
fn thumbnail_dimensions(
    service: &dyn CropService,
    locator: &url::Url,
    display: Option<Size>,
) -> Result<Dimensions> {
    if let Some(size) = display {
        return Ok(to_dimensions(size));
    }
    let bytes = service
        .fetch_image(locator)
        .with_context(|| format!("Failed to fetch {locator}"))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("Failed to decode {locator}"))?;
    Ok(Dimensions::new(img.width(), img.height()))
}

fn to_dimensions(size: Size) -> Dimensions {
    Dimensions::new(size.width.round() as u32, size.height.round() as u32)
}
