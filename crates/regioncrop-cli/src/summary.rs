use console::Style;
use regioncrop_core::geometry::Size;
use regioncrop_core::protocol::CropRequest;
use regioncrop_core::selection::Selection;
use regioncrop_core::session::CropSnapshot;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
        }
    }
}

pub fn print_crop_summary(snapshot: &CropSnapshot, request: &CropRequest, displayed: Size) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Crop"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.value.apply_to(&snapshot.ticket.filename)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Displayed"),
        s.value
            .apply_to(format!("{}x{}", displayed.width, displayed.height))
    );

    match (&snapshot.selection, request) {
        (Selection::Rectangle(rect), CropRequest::Rectangle { rect: scaled, .. }) => {
            println!("  {:<14}{}", s.label.apply_to("Mode"), s.method.apply_to("Rectangle"));
            println!("  {:<14}{}", s.label.apply_to("Selected"), s.value.apply_to(rect));
            println!(
                "  {:<14}{}",
                s.label.apply_to("Scaled"),
                s.value.apply_to(format!(
                    "({}, {}) to ({}, {})",
                    scaled.x,
                    scaled.y,
                    scaled.x + scaled.width,
                    scaled.y + scaled.height
                ))
            );
        }
        (Selection::Polygon(points), CropRequest::Polygon { points: scaled, .. }) => {
            println!("  {:<14}{}", s.label.apply_to("Mode"), s.method.apply_to("Polygon"));
            println!(
                "  {:<14}{}",
                s.label.apply_to("Vertices"),
                s.value.apply_to(points.len())
            );
            let listed: Vec<String> = scaled.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
            println!(
                "  {:<14}{}",
                s.label.apply_to("Scaled"),
                s.value.apply_to(listed.join(" "))
            );
        }
        _ => {}
    }
    println!();
}
