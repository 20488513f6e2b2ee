/// Preview of the pending selection, 1:1 with the displayed image.
#[derive(Default)]
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
}

impl PreviewState {
    pub fn clear(&mut self) {
        self.texture = None;
    }
}
