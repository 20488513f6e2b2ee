use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{DisplayRect, Point};

/// Drawing mode of the region selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropMode {
    #[default]
    Rectangle,
    Polygon,
}

impl CropMode {
    pub const ALL: &[Self] = &[Self::Rectangle, Self::Polygon];
}

impl fmt::Display for CropMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "Rectangle"),
            Self::Polygon => write!(f, "Polygon"),
        }
    }
}

/// A region chosen by the user, in displayed coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Rectangle(DisplayRect),
    /// Ordered vertices; the path is implicitly closed back to the first one.
    Polygon(Vec<Point>),
}

/// One shape of the overlay display list.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayShape {
    Rect(DisplayRect),
    ClosedPath(Vec<Point>),
}

/// Interaction state for drawing a region over the displayed image.
///
/// Rectangle mode runs `Idle -> Dragging -> Idle` on press/move/release.
/// Polygon mode appends a vertex per press and never terminates on its own;
/// whatever vertices exist when a crop is requested form the polygon.
///
/// The overlay is rebuilt from scratch on every change, never patched.
#[derive(Clone, Debug, Default)]
pub struct RegionSelector {
    mode: CropMode,
    /// Press position of the drag in progress (rectangle mode).
    anchor: Option<Point>,
    /// Last finished rectangle.
    committed: Option<DisplayRect>,
    points: Vec<Point>,
    overlay: Vec<OverlayShape>,
}

impl RegionSelector {
    pub fn new(mode: CropMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> CropMode {
        self.mode
    }

    /// Switch modes. Always discards the pending selection and blanks the overlay.
    pub fn set_mode(&mut self, mode: CropMode) {
        debug!(from = %self.mode, to = %mode, "crop mode changed");
        self.mode = mode;
        self.reset();
    }

    /// Forget any pending selection, e.g. when a different image is shown.
    pub fn reset(&mut self) {
        self.anchor = None;
        self.committed = None;
        self.points.clear();
        self.overlay.clear();
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn overlay(&self) -> &[OverlayShape] {
        &self.overlay
    }

    pub fn pointer_down(&mut self, p: Point) {
        match self.mode {
            CropMode::Rectangle => {
                self.anchor = Some(p);
            }
            CropMode::Polygon => {
                self.points.push(p);
                self.redraw_polygon();
            }
        }
    }

    pub fn pointer_move(&mut self, p: Point) {
        if self.mode != CropMode::Rectangle {
            return;
        }
        if let Some(anchor) = self.anchor {
            let rect = DisplayRect::from_corners(anchor, p);
            self.overlay.clear();
            self.overlay.push(OverlayShape::Rect(rect));
        }
    }

    /// Finish a rectangle drag. Returns the committed rectangle so the caller
    /// can render its preview; `None` when no drag was in progress.
    pub fn pointer_up(&mut self, p: Point) -> Option<DisplayRect> {
        if self.mode != CropMode::Rectangle {
            return None;
        }
        let anchor = self.anchor.take()?;
        let rect = DisplayRect::from_corners(anchor, p);
        self.overlay.clear();
        self.overlay.push(OverlayShape::Rect(rect));
        self.committed = Some(rect);
        debug!("Selected area: {rect}");
        Some(rect)
    }

    /// The region a crop would use right now.
    pub fn selection(&self) -> Option<Selection> {
        match self.mode {
            CropMode::Rectangle => self.committed.map(Selection::Rectangle),
            CropMode::Polygon if self.points.is_empty() => None,
            CropMode::Polygon => Some(Selection::Polygon(self.points.clone())),
        }
    }

    fn redraw_polygon(&mut self) {
        self.overlay.clear();
        if self.points.len() > 1 {
            self.overlay.push(OverlayShape::ClosedPath(self.points.clone()));
        }
    }
}
