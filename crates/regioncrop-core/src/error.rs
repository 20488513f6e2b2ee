use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionCropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("Source dimensions unavailable for {filename}: {reason}")]
    DimensionsUnavailable { filename: String, reason: String },

    #[error("No region selected")]
    EmptySelection,

    #[error("No image is displayed")]
    NoImage,

    #[error("Image locator has no filename: {0}")]
    MissingFilename(String),

    #[error("Crop rejected by server: {0}")]
    CropRejected(String),

    #[error("Server refused to delete files")]
    StartOverRejected,

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, RegionCropError>;
