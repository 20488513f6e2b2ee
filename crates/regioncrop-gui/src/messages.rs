use std::fmt;
use std::path::PathBuf;

use image::DynamicImage;
use regioncrop_core::error::RegionCropError;
use regioncrop_core::session::{CropSnapshot, CropTicket};
use url::Url;

/// Commands sent from UI thread to worker thread. Handled strictly in order.
pub enum WorkerCommand {
    /// Upload up to four files and report their thumbnails.
    Upload { files: Vec<PathBuf> },

    /// Delete every file on the server.
    StartOver,

    /// Download and decode a thumbnail for display.
    OpenThumbnail { request: u64, filename: String },

    /// Resolve dimensions, rescale, send `/crop`, then fetch the result.
    /// Skipped when a newer crop of the same file is already queued.
    Crop { snapshot: CropSnapshot },
}

/// An image downloaded and decoded by the worker.
pub struct LoadedImage {
    pub locator: Url,
    pub image: DynamicImage,
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// The worker picked up a command.
    Started {
        task: Task,
    },
    Uploaded {
        thumbnails: Vec<String>,
    },
    StartOverComplete,
    StartOverFailed {
        message: String,
    },
    ImageLoaded {
        request: u64,
        loaded: LoadedImage,
    },
    /// The server answered a crop. On success the reload follows separately.
    CropComplete {
        ticket: CropTicket,
        outcome: Result<Url, RegionCropError>,
    },
    CroppedImageLoaded {
        loaded: LoadedImage,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}

/// What the worker is busy with, for the status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    Uploading,
    StartingOver,
    Loading,
    Cropping,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uploading => write!(f, "Uploading"),
            Self::StartingOver => write!(f, "Deleting files"),
            Self::Loading => write!(f, "Loading image"),
            Self::Cropping => write!(f, "Cropping"),
        }
    }
}
