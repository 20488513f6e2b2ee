use regioncrop_core::consts::OVERLAY_STROKE_RGB;
use regioncrop_core::geometry::{DisplayRect, Point};
use regioncrop_core::selection::{CropMode, OverlayShape, RegionSelector};

use crate::app::RegionCropApp;

const OVERLAY_STROKE_WIDTH: f32 = 2.0;

pub fn show(ctx: &egui::Context, app: &mut RegionCropApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);
        app.viewport.last_panel_rect = Some(rect);

        let Some(texture_id) = app.viewport.texture.as_ref().map(|t| t.id()) else {
            show_placeholder(ui);
            return;
        };

        // A re-fit (panel resized) counts as an image change.
        app.sync_display();
        let Some(displayed) = app.session.image().map(|img| img.displayed) else {
            return;
        };
        let img_rect = egui::Rect::from_center_size(
            rect.center(),
            egui::vec2(displayed.width as f32, displayed.height as f32),
        );

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        if route_pointer(ui, &response, app, img_rect) {
            app.refresh_preview(ctx);
        }
        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }

        draw_image(ui, texture_id, img_rect);
        draw_overlay(ui, app, img_rect);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn to_display(pos: egui::Pos2, img_rect: egui::Rect) -> Point {
    Point::new(
        (pos.x - img_rect.left()) as f64,
        (pos.y - img_rect.top()) as f64,
    )
}

fn to_screen(p: Point, img_rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(
        img_rect.left() + p.x as f32,
        img_rect.top() + p.y as f32,
    )
}

/// Primary-button input for one frame.
struct PointerFrame {
    pressed: bool,
    released: bool,
    /// Pointer over the viewport (and not over another widget).
    hovered: bool,
    /// `None` once the pointer has left the window.
    pos: Option<egui::Pos2>,
}

fn route_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut RegionCropApp,
    img_rect: egui::Rect,
) -> bool {
    let frame = ui.input(|i| PointerFrame {
        pressed: i.pointer.primary_pressed(),
        released: i.pointer.primary_released(),
        hovered: response.hovered(),
        pos: i.pointer.latest_pos(),
    });
    apply_pointer(
        &mut app.session.selector,
        &frame,
        &mut app.viewport.last_pointer,
        img_rect,
    )
}

/// Feed one frame of pointer input to the selector.
///
/// Presses count only over the image. Releases count anywhere, so a drag
/// that leaves the image still finishes; without a current position the
/// last known one ends it. Returns `true` when the selection changed.
fn apply_pointer(
    selector: &mut RegionSelector,
    frame: &PointerFrame,
    last_pointer: &mut Option<egui::Pos2>,
    img_rect: egui::Rect,
) -> bool {
    if frame.pos.is_some() {
        *last_pointer = frame.pos;
    }
    let Some(pos) = *last_pointer else {
        return false;
    };
    let mut changed = false;

    if frame.pressed && frame.hovered && frame.pos.is_some() && img_rect.contains(pos) {
        selector.pointer_down(to_display(pos, img_rect));
        changed = selector.mode() == CropMode::Polygon;
    }
    if selector.is_dragging() && frame.pos.is_some() {
        selector.pointer_move(to_display(pos, img_rect));
    }
    if frame.released && selector.pointer_up(to_display(pos, img_rect)).is_some() {
        changed = true;
    }
    changed
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_overlay(ui: &egui::Ui, app: &RegionCropApp, img_rect: egui::Rect) {
    let [r, g, b] = OVERLAY_STROKE_RGB;
    let color = egui::Color32::from_rgb(r, g, b);
    let stroke = egui::Stroke::new(OVERLAY_STROKE_WIDTH, color);
    let painter = ui.painter().with_clip_rect(img_rect);

    for shape in app.session.selector.overlay() {
        match shape {
            OverlayShape::Rect(rect) => {
                painter.rect_stroke(
                    screen_rect(rect, img_rect),
                    0.0,
                    stroke,
                    egui::epaint::StrokeKind::Middle,
                );
            }
            OverlayShape::ClosedPath(points) => {
                let path = points.iter().map(|&p| to_screen(p, img_rect)).collect();
                painter.add(egui::Shape::closed_line(path, stroke));
            }
        }
    }

    if app.session.selector.mode() == CropMode::Polygon {
        for &p in app.session.selector.points() {
            painter.circle_filled(to_screen(p, img_rect), 3.0, color);
        }
    }
}

fn screen_rect(rect: &DisplayRect, img_rect: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        to_screen(Point::new(rect.x, rect.y), img_rect),
        to_screen(Point::new(rect.right(), rect.bottom()), img_rect),
    )
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Upload files and pick a thumbnail to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
