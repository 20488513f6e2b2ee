mod preview;
mod ui;
mod viewport;

pub use preview::PreviewState;
pub use ui::UIState;
pub use viewport::{fit_size, ViewportState};
