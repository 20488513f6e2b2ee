use std::sync::mpsc;

use regioncrop_core::config::ClientConfig;
use regioncrop_core::geometry::{Dimensions, Size};
use regioncrop_core::preview::{render_polygon_preview, render_preview};
use regioncrop_core::selection::Selection;
use regioncrop_core::session::{CropApplied, CropSession, DisplayImage};

use crate::convert::rgba_to_color_image;
use crate::messages::{LoadedImage, WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{fit_size, PreviewState, UIState, ViewportState};
use crate::workers;

pub struct RegionCropApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub preview: PreviewState,
    pub session: CropSession,
    pub show_about: bool,
}

impl RegionCropApp {
    pub fn new(ctx: &egui::Context, config: ClientConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let session = CropSession::new(config.selector.default_mode);
        let cmd_tx = workers::spawn_worker(config, result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            preview: PreviewState::default(),
            session,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Started { task } => {
                    self.ui_state.running = Some(task);
                }
                WorkerResult::Uploaded { thumbnails } => {
                    self.ui_state.running = None;
                    self.ui_state
                        .add_log(format!("Uploaded, {} thumbnail(s) available", thumbnails.len()));
                    self.ui_state.add_thumbnails(thumbnails);
                }
                WorkerResult::StartOverComplete => {
                    self.ui_state.running = None;
                    self.ui_state.add_log("All files deleted".into());
                    self.ui_state.clear_thumbnails();
                    self.viewport.clear();
                    self.preview.clear();
                    self.session = CropSession::new(self.session.selector.mode());
                }
                WorkerResult::StartOverFailed { message } => {
                    self.ui_state.running = None;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    alert("Error deleting files", message);
                }
                WorkerResult::ImageLoaded { request, loaded } => {
                    self.ui_state.running = None;
                    if request == self.ui_state.image_request {
                        self.display(ctx, loaded);
                    }
                }
                WorkerResult::CropComplete { ticket, outcome } => {
                    // On success the worker goes on to reload the cropped image.
                    if outcome.is_err() {
                        self.ui_state.running = None;
                    }
                    match self.session.apply(&ticket, outcome) {
                        CropApplied::Replaced(locator) => {
                            self.ui_state.add_log(format!("Cropped image: {locator}"));
                            self.preview.clear();
                            // The old texture stays on screen until the reload lands.
                            self.viewport.locator = Some(locator);
                        }
                        CropApplied::Superseded => {
                            self.ui_state
                                .add_log(format!("Discarded stale crop of {}", ticket.filename));
                        }
                        CropApplied::Failed(message) => {
                            self.ui_state.add_log(format!("ERROR: {message}"));
                            alert("Error cropping image", message);
                        }
                    }
                }
                WorkerResult::CroppedImageLoaded { loaded } => {
                    self.ui_state.running = None;
                    let current = self.session.image().map(|img| &img.locator);
                    if current == Some(&loaded.locator) {
                        self.display(ctx, loaded);
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.running = None;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Show a decoded image, fitted to the last known viewport size.
    fn display(&mut self, ctx: &egui::Context, loaded: LoadedImage) {
        let rgba = loaded.image.to_rgba8();
        let texture = ctx.load_texture(
            "viewport",
            rgba_to_color_image(&rgba),
            egui::TextureOptions::LINEAR,
        );
        self.viewport.texture = Some(texture);
        self.viewport.locator = Some(loaded.locator);
        self.viewport.source = Some(loaded.image);
        self.sync_display();
    }

    /// Keep the session's displayed image in step with the viewport.
    ///
    /// A new locator, native size or fitted size drops the pending selection.
    pub fn sync_display(&mut self) {
        let (Some(locator), Some(image_size)) =
            (self.viewport.locator.clone(), self.viewport.image_size())
        else {
            return;
        };
        let available = self
            .viewport
            .last_panel_rect
            .map_or(image_size, |r| r.size());
        let fitted = fit_size(image_size, available);
        let displayed = Size::new(fitted.x as f64, fitted.y as f64);

        let image = DisplayImage {
            locator,
            displayed,
            native: Dimensions::new(image_size.x as u32, image_size.y as u32),
        };
        if self.session.image() == Some(&image) {
            return;
        }

        self.session.show_image(image);
        self.preview.clear();
    }

    /// Re-render the preview from the selector's current selection.
    pub fn refresh_preview(&mut self, ctx: &egui::Context) {
        let (Some(source), Some(image)) = (self.viewport.source.as_ref(), self.session.image())
        else {
            self.preview.clear();
            return;
        };
        let rendered = match self.session.selector.selection() {
            Some(Selection::Rectangle(rect)) => render_preview(source, &rect, image.displayed),
            Some(Selection::Polygon(points)) => {
                render_polygon_preview(source, &points, image.displayed)
            }
            None => None,
        };
        self.preview.texture = rendered.map(|surface| {
            ctx.load_texture(
                "preview",
                rgba_to_color_image(&surface),
                egui::TextureOptions::NEAREST,
            )
        });
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn open_thumbnail(&mut self, filename: String) {
        self.ui_state.image_request += 1;
        self.ui_state.selected_thumbnail = Some(filename.clone());
        self.send_command(WorkerCommand::OpenThumbnail {
            request: self.ui_state.image_request,
            filename,
        });
    }

    /// Snapshot the current selection and queue it for cropping.
    pub fn request_crop(&mut self) {
        match self.session.snapshot() {
            Ok(snapshot) => {
                self.ui_state.add_log(format!(
                    "Cropping {} (request #{})",
                    snapshot.ticket.filename, snapshot.ticket.seq
                ));
                self.send_command(WorkerCommand::Crop { snapshot });
            }
            Err(e) => self.ui_state.add_log(format!("Cannot crop: {e}")),
        }
    }
}

impl eframe::App for RegionCropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::preview::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About RegionCrop")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("RegionCrop");
                        ui.label("Interactive region cropping client");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

/// Show an error dialog without blocking the UI thread.
pub fn alert(title: &'static str, message: String) {
    std::thread::spawn(move || {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    });
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbaImage};
    use regioncrop_core::geometry::Point;
    use url::Url;

    use super::*;

    fn app() -> (RegionCropApp, mpsc::Sender<WorkerResult>, egui::Context) {
        let ctx = egui::Context::default();
        let mut app = RegionCropApp::new(&ctx, ClientConfig::default());
        let (tx, rx) = mpsc::channel();
        app.result_rx = rx;
        (app, tx, ctx)
    }

    fn loaded(path: &str, width: u32, height: u32) -> LoadedImage {
        LoadedImage {
            locator: Url::parse("http://server.test/uploads/").unwrap().join(path).unwrap(),
            image: DynamicImage::ImageRgba8(RgbaImage::new(width, height)),
        }
    }

    /// Show `a.jpg` and commit a rectangle on it; returns its crop snapshot.
    fn crop_on_a(
        app: &mut RegionCropApp,
        tx: &mpsc::Sender<WorkerResult>,
        ctx: &egui::Context,
    ) -> regioncrop_core::session::CropSnapshot {
        tx.send(WorkerResult::ImageLoaded {
            request: app.ui_state.image_request,
            loaded: loaded("a.jpg", 200, 200),
        })
        .unwrap();
        app.poll_results(ctx);

        app.session.selector.pointer_down(Point::new(10.0, 10.0));
        app.session.selector.pointer_up(Point::new(50.0, 40.0));
        app.session.snapshot().unwrap()
    }

    #[test]
    fn test_failed_reload_keeps_cropped_locator() {
        let (mut app, tx, ctx) = app();
        let snapshot = crop_on_a(&mut app, &tx, &ctx);
        let cropped = loaded("a_cropped.jpg", 1, 1).locator;

        tx.send(WorkerResult::CropComplete {
            ticket: snapshot.ticket,
            outcome: Ok(cropped.clone()),
        })
        .unwrap();
        tx.send(WorkerResult::Error {
            message: "Failed to load cropped image".into(),
        })
        .unwrap();
        app.poll_results(&ctx);
        app.sync_display();

        assert_eq!(app.session.image().unwrap().locator, cropped);
        assert!(app.session.selector.selection().is_none());
        assert!(app.ui_state.running.is_none());
    }

    #[test]
    fn test_reload_at_same_fit_updates_native_size() {
        let (mut app, tx, ctx) = app();
        app.viewport.last_panel_rect = Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(100.0, 100.0),
        ));
        let snapshot = crop_on_a(&mut app, &tx, &ctx);
        assert_eq!(app.session.image().unwrap().native, Dimensions::new(200, 200));

        let reloaded = loaded("a_cropped.jpg", 400, 400);
        let cropped = reloaded.locator.clone();
        tx.send(WorkerResult::CropComplete {
            ticket: snapshot.ticket,
            outcome: Ok(cropped.clone()),
        })
        .unwrap();
        tx.send(WorkerResult::CroppedImageLoaded { loaded: reloaded })
            .unwrap();
        app.poll_results(&ctx);

        let image = app.session.image().unwrap();
        assert_eq!(image.locator, cropped);
        assert_eq!(image.displayed, Size::new(100.0, 100.0));
        assert_eq!(image.native, Dimensions::new(400, 400));
    }

    #[test]
    fn test_reload_for_superseded_crop_is_ignored() {
        let (mut app, tx, ctx) = app();
        let first = crop_on_a(&mut app, &tx, &ctx);
        app.session.selector.pointer_down(Point::new(0.0, 0.0));
        app.session.selector.pointer_up(Point::new(20.0, 20.0));
        let _second = app.session.snapshot().unwrap();

        let stale = loaded("stale.jpg", 8, 8);
        tx.send(WorkerResult::CropComplete {
            ticket: first.ticket,
            outcome: Ok(stale.locator.clone()),
        })
        .unwrap();
        tx.send(WorkerResult::CroppedImageLoaded { loaded: stale })
            .unwrap();
        app.poll_results(&ctx);

        assert_eq!(app.session.image().unwrap().filename().unwrap(), "a.jpg");
    }
}
