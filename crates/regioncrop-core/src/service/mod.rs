mod dimensions;
mod http;

use std::path::{Path, PathBuf};

use tracing::warn;
use url::Url;

use crate::consts::{MAX_UPLOAD_FILES, SOURCE_EXTENSION, THUMBNAIL_EXTENSION, UPLOADS_ROUTE};
use crate::error::{RegionCropError, Result};
use crate::geometry::Dimensions;
use crate::protocol::{CropRequest, CropResponse};

pub use dimensions::{resolver_for, FixedDimensions, ResolveDimensions, ServiceDimensions};
pub use http::HttpCropService;

/// The cropping server's endpoints.
///
/// Calls block until the server answers; callers that must stay responsive
/// run them off the UI thread.
pub trait CropService {
    /// Upload files in one multipart request. At most [`MAX_UPLOAD_FILES`] are sent.
    fn upload(&self, files: &[PathBuf]) -> Result<String>;

    /// Delete every file on the server.
    fn start_over(&self) -> Result<()>;

    /// Native dimensions of the original asset behind `filename`.
    fn dimensions(&self, filename: &str) -> Result<Dimensions>;

    /// Send a crop request. Transport errors are `Err`; a well-formed failure
    /// body is returned as-is for the caller to inspect.
    fn crop(&self, request: &CropRequest) -> Result<CropResponse>;

    /// Download the bytes behind an image locator.
    fn fetch_image(&self, locator: &Url) -> Result<Vec<u8>>;

    /// Locator of an uploaded file or thumbnail.
    fn image_locator(&self, filename: &str) -> Result<Url>;

    /// Resolve a server-returned path (e.g. `uploads/a.jpg`) to a locator.
    fn resolve_path(&self, path: &str) -> Result<Url>;
}

/// The files of a selection that are actually uploaded.
pub fn upload_batch(files: &[PathBuf]) -> &[PathBuf] {
    if files.len() > MAX_UPLOAD_FILES {
        warn!(
            selected = files.len(),
            max = MAX_UPLOAD_FILES,
            "too many files selected, uploading the first {MAX_UPLOAD_FILES}"
        );
        &files[..MAX_UPLOAD_FILES]
    } else {
        files
    }
}

/// Final path segment of a locator, which the server uses as the file key.
pub fn locator_filename(locator: &Url) -> Result<String> {
    locator
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| RegionCropError::MissingFilename(locator.to_string()))
}

/// Name of the thumbnail the server derives from an uploaded study.
///
/// Returns `None` for files the server ignores (anything but `.dcm`).
pub fn thumbnail_name(upload: &Path) -> Option<String> {
    let is_source = upload
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == SOURCE_EXTENSION);
    if !is_source {
        return None;
    }
    let name = Path::new(upload.file_name()?).with_extension(THUMBNAIL_EXTENSION);
    name.to_str().map(str::to_string)
}

/// Path of a file under the server's upload route.
pub fn uploads_path(filename: &str) -> String {
    format!("{UPLOADS_ROUTE}{filename}")
}

/// Parse a base URL so that relative joins append to it.
pub fn parse_base_url(base: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
