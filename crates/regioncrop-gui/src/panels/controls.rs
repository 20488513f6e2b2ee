use regioncrop_core::selection::{CropMode, Selection};

use crate::app::RegionCropApp;

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut RegionCropApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                files_section(ui, app);
                ui.separator();
                mode_section(ui, app);
                ui.separator();
                crop_section(ui, app);
            });
        });
}

fn files_section(ui: &mut egui::Ui, app: &mut RegionCropApp) {
    let count = app.ui_state.thumbnails.len().to_string();
    super::section_header(ui, "Files", Some(count.as_str()));
    ui.add_space(4.0);

    if ui.button("Upload...").clicked() {
        super::menu_bar::upload_files(app);
    }

    if app.ui_state.thumbnails.is_empty() {
        ui.small("No thumbnails yet");
        return;
    }

    let mut clicked = None;
    for name in &app.ui_state.thumbnails {
        let selected = app.ui_state.selected_thumbnail.as_ref() == Some(name);
        if ui.selectable_label(selected, name).clicked() {
            clicked = Some(name.clone());
        }
    }
    if let Some(name) = clicked {
        app.open_thumbnail(name);
    }
}

fn mode_section(ui: &mut egui::Ui, app: &mut RegionCropApp) {
    super::section_header(ui, "Crop Mode", None);
    ui.add_space(4.0);

    let mut mode = app.session.selector.mode();
    for &choice in CropMode::ALL {
        ui.radio_value(&mut mode, choice, choice.to_string());
    }
    if mode != app.session.selector.mode() {
        app.session.set_mode(mode);
        app.preview.clear();
    }

    if mode == CropMode::Polygon {
        ui.small("Click to add vertices. The shape closes back to the first one.");
    }
}

fn crop_section(ui: &mut egui::Ui, app: &mut RegionCropApp) {
    super::section_header(ui, "Crop", None);
    ui.add_space(4.0);

    let selection = app.session.selector.selection();
    let can_crop = app.session.image().is_some() && selection.is_some();
    if ui
        .add_enabled(can_crop, egui::Button::new("Crop"))
        .clicked()
    {
        app.request_crop();
    }

    match &selection {
        Some(Selection::Rectangle(rect)) => {
            ui.small(format!("Selected: {rect}"));
        }
        Some(Selection::Polygon(points)) => {
            ui.small(format!("{} vertices", points.len()));
        }
        None => {
            ui.small("No selection");
        }
    }

    if let Some(image) = app.session.image() {
        ui.small(format!(
            "Displayed {:.0}x{:.0}, native {}",
            image.displayed.width, image.displayed.height, image.native
        ));
    }
}
