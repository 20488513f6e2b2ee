use crate::app::RegionCropApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut RegionCropApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let upload_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::U);
                if ui.add(egui::Button::new("Upload...").shortcut_text(ctx.format_shortcut(&upload_shortcut))).clicked() {
                    ui.close();
                    upload_files(app);
                }

                if ui.button("Start Over...").clicked() {
                    ui.close();
                    confirm_start_over(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::U))) {
            upload_files(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub(crate) fn upload_files(app: &RegionCropApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(files) = rfd::FileDialog::new()
            .add_filter("DICOM files", &["dcm"])
            .add_filter("All files", &["*"])
            .pick_files()
        {
            let _ = cmd_tx.send(WorkerCommand::Upload { files });
        }
    });
}

fn confirm_start_over(app: &RegionCropApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Start Over")
            .set_description("Are you sure you want to delete all files?")
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        if answer == rfd::MessageDialogResult::Yes {
            let _ = cmd_tx.send(WorkerCommand::StartOver);
        }
    });
}
