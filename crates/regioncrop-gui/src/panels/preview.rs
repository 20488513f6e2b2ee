use crate::app::RegionCropApp;

const RIGHT_PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut RegionCropApp) {
    egui::SidePanel::right("preview")
        .default_width(RIGHT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            super::section_header(ui, "Preview", None);
            ui.add_space(4.0);

            let Some(texture) = app.preview.texture.as_ref() else {
                ui.small("Select a region to preview it");
                return;
            };
            let [w, h] = texture.size();
            ui.small(format!("{w}x{h}"));
            egui::ScrollArea::both().show(ui, |ui| {
                ui.image((texture.id(), egui::vec2(w as f32, h as f32)));
            });
        });
}
