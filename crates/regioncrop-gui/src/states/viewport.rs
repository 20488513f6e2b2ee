use image::DynamicImage;
use url::Url;

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Decoded image backing the texture, kept for previews.
    pub source: Option<DynamicImage>,
    pub locator: Option<Url>,
    /// Panel area from the last frame, used to fit newly loaded images.
    pub last_panel_rect: Option<egui::Rect>,
    /// Last pointer position seen over the window.
    pub last_pointer: Option<egui::Pos2>,
}

impl ViewportState {
    /// Native size of the displayed image.
    pub fn image_size(&self) -> Option<egui::Vec2> {
        self.source
            .as_ref()
            .map(|img| egui::vec2(img.width() as f32, img.height() as f32))
    }

    pub fn clear(&mut self) {
        self.texture = None;
        self.source = None;
        self.locator = None;
    }
}

/// Size an image is displayed at inside `available`: scaled down to fit, never up.
pub fn fit_size(image_size: egui::Vec2, available: egui::Vec2) -> egui::Vec2 {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (available.x / image_size.x)
        .min(available.y / image_size.y)
        .min(1.0)
        .max(0.0);
    (image_size * scale).round()
}
