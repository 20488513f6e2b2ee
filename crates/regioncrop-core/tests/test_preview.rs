use image::{DynamicImage, Rgba, RgbaImage};

use regioncrop_core::geometry::{DisplayRect, Point, Size};
use regioncrop_core::preview::{render_polygon_preview, render_preview};

/// 10x10 image whose pixel (x, y) has red = x * 10, green = y * 10.
fn gradient_image() -> DynamicImage {
    let img = RgbaImage::from_fn(10, 10, |x, y| Rgba([(x * 10) as u8, (y * 10) as u8, 0, 255]));
    DynamicImage::ImageRgba8(img)
}

fn rect(x: f64, y: f64, width: f64, height: f64) -> DisplayRect {
    DisplayRect {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn test_preview_is_one_to_one_copy() {
    let img = gradient_image();
    let preview = render_preview(&img, &rect(2.0, 3.0, 4.0, 5.0), Size::new(10.0, 10.0)).unwrap();
    assert_eq!(preview.dimensions(), (4, 5));
    assert_eq!(preview.get_pixel(0, 0), &Rgba([20, 30, 0, 255]));
    assert_eq!(preview.get_pixel(3, 4), &Rgba([50, 70, 0, 255]));
}

#[test]
fn test_preview_size_follows_displayed_rect() {
    // Image shown at half size: a 3x2 displayed rect covers 6x4 native pixels.
    let img = gradient_image();
    let preview = render_preview(&img, &rect(1.0, 1.0, 3.0, 2.0), Size::new(5.0, 5.0)).unwrap();
    assert_eq!(preview.dimensions(), (3, 2));
}

#[test]
fn test_zero_area_has_no_preview() {
    let img = gradient_image();
    assert!(render_preview(&img, &rect(4.0, 4.0, 0.0, 0.0), Size::new(10.0, 10.0)).is_none());
}

#[test]
fn test_region_outside_image_is_transparent() {
    let img = gradient_image();
    let preview = render_preview(&img, &rect(8.0, 0.0, 4.0, 2.0), Size::new(10.0, 10.0)).unwrap();
    assert_eq!(preview.dimensions(), (4, 2));
    assert_eq!(preview.get_pixel(0, 0), &Rgba([80, 0, 0, 255]));
    assert_eq!(preview.get_pixel(3, 0)[3], 0);
}

#[test]
fn test_polygon_preview_masks_outside() {
    let img = gradient_image();
    let triangle = [Point::new(0.0, 0.0), Point::new(8.0, 0.0), Point::new(0.0, 8.0)];
    let preview = render_polygon_preview(&img, &triangle, Size::new(10.0, 10.0)).unwrap();
    assert_eq!(preview.dimensions(), (8, 8));
    assert_eq!(preview.get_pixel(1, 1)[3], 255);
    assert_eq!(preview.get_pixel(7, 7)[3], 0);
}

#[test]
fn test_polygon_preview_needs_three_points() {
    let img = gradient_image();
    let line = [Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
    assert!(render_polygon_preview(&img, &line, Size::new(10.0, 10.0)).is_none());
}
