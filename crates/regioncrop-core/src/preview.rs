//! Preview surfaces for a pending selection.
//!
//! The preview is sized in displayed pixels (1:1 with what the user sees), so a
//! selection made on a downscaled rendering is resampled from the native image.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::geometry::{polygon_contains, DisplayRect, Point, Size};

/// Copy the region under `rect` into a new surface of exactly `rect`'s size.
///
/// Returns `None` for a zero-area rectangle or an invalid displayed size.
/// Parts of the rectangle outside the image stay transparent.
pub fn render_preview(image: &DynamicImage, rect: &DisplayRect, displayed: Size) -> Option<RgbaImage> {
    let out_w = rect.width.round() as u32;
    let out_h = rect.height.round() as u32;
    if out_w == 0 || out_h == 0 {
        return None;
    }
    let displayed = displayed.validated().ok()?;

    let native_w = image.width() as f64;
    let native_h = image.height() as f64;
    let sx = native_w / displayed.width;
    let sy = native_h / displayed.height;

    // Native-pixel window, clipped to the image.
    let x0 = (rect.x * sx).floor().clamp(0.0, native_w);
    let y0 = (rect.y * sy).floor().clamp(0.0, native_h);
    let x1 = (rect.right() * sx).ceil().clamp(0.0, native_w);
    let y1 = (rect.bottom() * sy).ceil().clamp(0.0, native_h);

    let mut surface = RgbaImage::new(out_w, out_h);
    if x1 <= x0 || y1 <= y0 {
        return Some(surface);
    }

    let window = image
        .crop_imm(x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32)
        .to_rgba8();

    // Where the clipped window lands on the surface, in displayed pixels.
    let dst_x = (x0 / sx - rect.x).round().max(0.0) as i64;
    let dst_y = (y0 / sy - rect.y).round().max(0.0) as i64;
    let dst_w = ((x1 - x0) / sx).round().max(1.0) as u32;
    let dst_h = ((y1 - y0) / sy).round().max(1.0) as u32;

    let placed = if window.dimensions() == (dst_w, dst_h) {
        window
    } else {
        imageops::resize(&window, dst_w, dst_h, FilterType::Triangle)
    };
    imageops::replace(&mut surface, &placed, dst_x, dst_y);
    Some(surface)
}

/// Preview of a polygon: its bounding box, with pixels outside the polygon transparent.
///
/// Returns `None` for fewer than three vertices or a degenerate bounding box.
pub fn render_polygon_preview(
    image: &DynamicImage,
    points: &[Point],
    displayed: Size,
) -> Option<RgbaImage> {
    if points.len() < 3 {
        return None;
    }
    let bounds = DisplayRect::bounding(points)?;
    let mut surface = render_preview(image, &bounds, displayed)?;

    let transparent = Rgba([0, 0, 0, 0]);
    for (px, py, pixel) in surface.enumerate_pixels_mut() {
        let center = Point::new(
            bounds.x + px as f64 + 0.5,
            bounds.y + py as f64 + 0.5,
        );
        if !polygon_contains(points, center) {
            *pixel = transparent;
        }
    }
    Some(surface)
}
