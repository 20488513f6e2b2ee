//! JSON bodies exchanged with the cropping server.

use serde::{Deserialize, Serialize};

use crate::error::{RegionCropError, Result};
use crate::scale::{PixelPoint, ScaledRect, ScaledSelection};

/// Body of `POST /crop`.
///
/// Serialises flat: `{filename, x, y, width, height}` or `{filename, points: [{x, y}, ...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CropRequest {
    Rectangle {
        filename: String,
        #[serde(flatten)]
        rect: ScaledRect,
    },
    Polygon {
        filename: String,
        points: Vec<PixelPoint>,
    },
}

impl CropRequest {
    pub fn new(filename: impl Into<String>, scaled: ScaledSelection) -> Self {
        let filename = filename.into();
        match scaled {
            ScaledSelection::Rectangle(rect) => Self::Rectangle { filename, rect },
            ScaledSelection::Polygon(points) => Self::Polygon { filename, points },
        }
    }

    pub fn filename(&self) -> &str {
        match self {
            Self::Rectangle { filename, .. } | Self::Polygon { filename, .. } => filename,
        }
    }
}

/// Body returned by `POST /crop`, on success and on failure alike.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cropped_image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CropResponse {
    /// The new image path, or `CropRejected` carrying the server's error text.
    pub fn into_result(self) -> Result<String> {
        match self.cropped_image_path {
            Some(path) => Ok(path),
            None => Err(RegionCropError::CropRejected(
                self.error
                    .unwrap_or_else(|| "response has no cropped_image_path".into()),
            )),
        }
    }
}

/// Body returned by `POST /start-over`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartOverResponse {
    #[serde(default)]
    pub success: bool,
}

impl StartOverResponse {
    pub fn into_result(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(RegionCropError::StartOverRejected)
        }
    }
}
