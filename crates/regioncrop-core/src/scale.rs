//! Mapping selections from displayed coordinates into source-image pixels.
//!
//! Each axis is rescaled independently: `round(v * source / displayed)`.
//! Negative results (a drag released outside the image) clamp to zero.

use serde::{Deserialize, Serialize};

use crate::error::{RegionCropError, Result};
use crate::geometry::{Dimensions, DisplayRect, Point, Size};
use crate::selection::Selection;

/// A rectangle in source-image pixel coordinates, fully inside the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A polygon vertex in source-image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: u32,
    pub y: u32,
}

/// A selection rescaled into source pixel space.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaledSelection {
    Rectangle(ScaledRect),
    Polygon(Vec<PixelPoint>),
}

/// Per-axis factors from displayed to source coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    pub fn new(displayed: Size, source: Dimensions) -> Result<Self> {
        let displayed = displayed.validated()?;
        let source = source.validated()?;
        Ok(Self {
            x: source.width as f64 / displayed.width,
            y: source.height as f64 / displayed.height,
        })
    }

    fn scale_x(&self, v: f64) -> u32 {
        to_pixel(v * self.x)
    }

    fn scale_y(&self, v: f64) -> u32 {
        to_pixel(v * self.y)
    }
}

fn to_pixel(v: f64) -> u32 {
    // `as` saturates at u32::MAX
    v.round().max(0.0) as u32
}

/// Rescale a rectangle and clamp it to the source extent.
///
/// The origin is kept inside `[0, source)`; the size never exceeds what remains
/// to the right of / below the origin.
pub fn scale_rect(rect: &DisplayRect, displayed: Size, source: Dimensions) -> Result<ScaledRect> {
    let f = ScaleFactors::new(displayed, source)?;

    let x = f.scale_x(rect.x).min(source.width - 1);
    let y = f.scale_y(rect.y).min(source.height - 1);
    let width = f.scale_x(rect.width).min(source.width - x);
    let height = f.scale_y(rect.height).min(source.height - y);

    Ok(ScaledRect {
        x,
        y,
        width,
        height,
    })
}

/// Rescale polygon vertices. Unlike rectangles, vertices are not clamped to the extent.
pub fn scale_points(points: &[Point], displayed: Size, source: Dimensions) -> Result<Vec<PixelPoint>> {
    let f = ScaleFactors::new(displayed, source)?;
    Ok(points
        .iter()
        .map(|p| PixelPoint {
            x: f.scale_x(p.x),
            y: f.scale_y(p.y),
        })
        .collect())
}

pub fn scale_selection(
    selection: &Selection,
    displayed: Size,
    source: Dimensions,
) -> Result<ScaledSelection> {
    match selection {
        Selection::Rectangle(rect) => {
            scale_rect(rect, displayed, source).map(ScaledSelection::Rectangle)
        }
        Selection::Polygon(points) if points.is_empty() => Err(RegionCropError::EmptySelection),
        Selection::Polygon(points) => {
            scale_points(points, displayed, source).map(ScaledSelection::Polygon)
        }
    }
}
