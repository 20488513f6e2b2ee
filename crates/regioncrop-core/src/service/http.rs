use std::path::PathBuf;

use reqwest::blocking::{multipart, Client};
use tracing::{debug, info};
use url::Url;

use crate::config::ServerConfig;
use crate::consts::UPLOAD_FIELD;
use crate::error::Result;
use crate::geometry::Dimensions;
use crate::protocol::{CropRequest, CropResponse, StartOverResponse};

use super::{parse_base_url, upload_batch, uploads_path, CropService};

/// [`CropService`] over blocking HTTP.
pub struct HttpCropService {
    base: Url,
    client: Client,
}

impl HttpCropService {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let base = parse_base_url(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }
}

impl CropService for HttpCropService {
    fn upload(&self, files: &[PathBuf]) -> Result<String> {
        let batch = upload_batch(files);
        let mut form = multipart::Form::new();
        for path in batch {
            form = form.file(UPLOAD_FIELD, path)?;
        }

        info!(count = batch.len(), "uploading files");
        let body = self
            .client
            .post(self.endpoint("")?)
            .multipart(form)
            .send()?
            .error_for_status()?
            .text()?;
        debug!(response_len = body.len(), "upload finished");
        Ok(body)
    }

    fn start_over(&self) -> Result<()> {
        info!("deleting all files on the server");
        let response: StartOverResponse = self
            .client
            .post(self.endpoint("start-over")?)
            .json(&serde_json::json!({}))
            .send()?
            .json()?;
        response.into_result()
    }

    fn dimensions(&self, filename: &str) -> Result<Dimensions> {
        let dims = self
            .client
            .get(self.endpoint("dicom-dimensions")?)
            .query(&[("filename", filename)])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(dims)
    }

    fn crop(&self, request: &CropRequest) -> Result<CropResponse> {
        info!(filename = request.filename(), "sending crop request");
        // Failures arrive as `{error}` with a 5xx status, so the body is decoded regardless.
        let response = self
            .client
            .post(self.endpoint("crop")?)
            .json(request)
            .send()?
            .json()?;
        Ok(response)
    }

    fn fetch_image(&self, locator: &Url) -> Result<Vec<u8>> {
        let bytes = self
            .client
            .get(locator.clone())
            .send()?
            .error_for_status()?
            .bytes()?;
        Ok(bytes.to_vec())
    }

    fn image_locator(&self, filename: &str) -> Result<Url> {
        self.endpoint(&uploads_path(filename))
    }

    fn resolve_path(&self, path: &str) -> Result<Url> {
        self.endpoint(path)
    }
}
