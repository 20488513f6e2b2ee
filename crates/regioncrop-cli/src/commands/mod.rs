pub mod config;
pub mod crop;
pub mod dimensions;
pub mod fetch;
pub mod preview;
pub mod start_over;
pub mod upload;

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use regioncrop_core::config::ClientConfig;
use regioncrop_core::geometry::{Point, Size};
use regioncrop_core::service::HttpCropService;

pub(crate) fn connect(config: &ClientConfig) -> Result<HttpCropService> {
    Ok(HttpCropService::new(&config.server)?)
}

/// Spinner shown while a request is in flight.
pub(crate) fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Parse `X,Y`.
pub(crate) fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(Point::new(x, y))
}

/// Parse `WxH`.
pub(crate) fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w = w.trim().parse::<f64>().map_err(|e| format!("bad width in '{s}': {e}"))?;
    let h = h.trim().parse::<f64>().map_err(|e| format!("bad height in '{s}': {e}"))?;
    Size::new(w, h).validated().map_err(|e| e.to_string())
}
