//! The displayed image, its pending selection, and the crop submission sequence.

use std::collections::HashMap;

use tracing::{debug, error, info, warn};
use url::Url;

use crate::error::{RegionCropError, Result};
use crate::geometry::{Dimensions, Size};
use crate::protocol::CropRequest;
use crate::scale::scale_selection;
use crate::selection::{CropMode, RegionSelector, Selection};
use crate::service::{locator_filename, CropService, ResolveDimensions};

/// The image currently shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayImage {
    pub locator: Url,
    /// Size as rendered on screen.
    pub displayed: Size,
    /// Intrinsic pixel size of the loaded resource.
    pub native: Dimensions,
}

impl DisplayImage {
    pub fn filename(&self) -> Result<String> {
        locator_filename(&self.locator)
    }
}

/// Identifies one crop submission. Only the newest ticket for the displayed
/// file may change what is shown.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CropTicket {
    pub filename: String,
    pub seq: u64,
}

/// Everything needed to submit a crop, captured at the moment the user asks for it.
#[derive(Clone, Debug, PartialEq)]
pub struct CropSnapshot {
    pub ticket: CropTicket,
    pub selection: Selection,
    pub displayed: Size,
}

/// What applying a crop result did.
#[derive(Clone, Debug, PartialEq)]
pub enum CropApplied {
    /// The displayed image now points at the cropped result.
    Replaced(Url),
    /// A newer submission or a different image superseded this result.
    Superseded,
    /// The crop failed; nothing changed.
    Failed(String),
}

/// Owns the region selector and the displayed image for one viewer.
#[derive(Debug, Default)]
pub struct CropSession {
    pub selector: RegionSelector,
    image: Option<DisplayImage>,
    next_seq: u64,
    latest: HashMap<String, u64>,
}

impl CropSession {
    pub fn new(mode: CropMode) -> Self {
        Self {
            selector: RegionSelector::new(mode),
            ..Default::default()
        }
    }

    pub fn image(&self) -> Option<&DisplayImage> {
        self.image.as_ref()
    }

    /// Show a different image (or the same one at a different size). Pending selection is dropped.
    pub fn show_image(&mut self, image: DisplayImage) {
        debug!(locator = %image.locator, displayed = ?image.displayed, "showing image");
        self.selector.reset();
        self.image = Some(image);
    }

    pub fn set_mode(&mut self, mode: CropMode) {
        self.selector.set_mode(mode);
    }

    /// Capture the current selection for submission and issue its ticket.
    pub fn snapshot(&mut self) -> Result<CropSnapshot> {
        let image = self.image.as_ref().ok_or(RegionCropError::NoImage)?;
        let selection = self
            .selector
            .selection()
            .ok_or(RegionCropError::EmptySelection)?;
        let filename = image.filename()?;
        let displayed = image.displayed;

        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest.insert(filename.clone(), seq);

        Ok(CropSnapshot {
            ticket: CropTicket { filename, seq },
            selection,
            displayed,
        })
    }

    /// Apply the outcome of a submission.
    ///
    /// A success replaces the displayed image only if `ticket` is the newest
    /// submission for the file still on screen, and consumes the selection.
    /// Failures never change state.
    pub fn apply(&mut self, ticket: &CropTicket, outcome: Result<Url>) -> CropApplied {
        let locator = match outcome {
            Ok(locator) => locator,
            Err(e) => {
                error!("Error cropping image {}: {e}", ticket.filename);
                return CropApplied::Failed(e.to_string());
            }
        };

        let newest = self.latest.get(&ticket.filename) == Some(&ticket.seq);
        let image = match self.image.as_mut() {
            Some(image) if newest && image.filename().ok().as_ref() == Some(&ticket.filename) => {
                image
            }
            _ => {
                warn!(
                    filename = %ticket.filename,
                    seq = ticket.seq,
                    "discarding superseded crop result"
                );
                return CropApplied::Superseded;
            }
        };

        info!("Cropped image path: {locator}");
        image.locator = locator.clone();
        self.selector.reset();
        CropApplied::Replaced(locator)
    }
}

/// Build the `/crop` body for a snapshot: resolve source dimensions, then rescale.
pub fn build_request(
    snapshot: &CropSnapshot,
    resolver: &dyn ResolveDimensions,
) -> Result<CropRequest> {
    let filename = &snapshot.ticket.filename;
    let source = resolver.resolve(filename)?;
    let scaled = scale_selection(&snapshot.selection, snapshot.displayed, source)?;
    debug!(filename = %filename, %source, scaled = ?scaled, "scaled selection");
    Ok(CropRequest::new(filename.clone(), scaled))
}

/// Run one submission end to end and return the locator of the cropped image.
///
/// Nothing is sent when source dimensions cannot be resolved.
pub fn submit(
    service: &dyn CropService,
    resolver: &dyn ResolveDimensions,
    snapshot: &CropSnapshot,
) -> Result<Url> {
    let request = build_request(snapshot, resolver)?;
    let path = service.crop(&request)?.into_result()?;
    service.resolve_path(&path)
}
