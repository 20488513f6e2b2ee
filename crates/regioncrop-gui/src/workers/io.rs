use std::path::PathBuf;
use std::sync::mpsc;

use regioncrop_core::error::Result;
use regioncrop_core::service::{thumbnail_name, upload_batch, CropService};
use url::Url;

use crate::messages::{LoadedImage, WorkerResult};

use super::{send, send_error, send_log};

/// Download and decode the image behind a locator.
pub(super) fn fetch_decoded(service: &dyn CropService, locator: Url) -> Result<LoadedImage> {
    let bytes = service.fetch_image(&locator)?;
    let image = image::load_from_memory(&bytes)?;
    Ok(LoadedImage { locator, image })
}

pub(super) fn handle_upload(
    service: &dyn CropService,
    files: &[PathBuf],
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let batch = upload_batch(files);
    if batch.len() < files.len() {
        send_log(
            tx,
            ctx,
            format!("Only the first {} of {} files will be uploaded", batch.len(), files.len()),
        );
    }

    // Failures are logged only; nothing else changes.
    match service.upload(batch) {
        Ok(_) => {
            let thumbnails = batch.iter().filter_map(|p| thumbnail_name(p)).collect();
            send(tx, ctx, WorkerResult::Uploaded { thumbnails });
        }
        Err(e) => {
            tracing::error!("Error uploading files: {e}");
            send_error(tx, ctx, format!("Error uploading files: {e}"));
        }
    }
}

pub(super) fn handle_start_over(
    service: &dyn CropService,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match service.start_over() {
        Ok(()) => send(tx, ctx, WorkerResult::StartOverComplete),
        Err(e) => {
            tracing::error!("Error deleting files: {e}");
            send(
                tx,
                ctx,
                WorkerResult::StartOverFailed {
                    message: e.to_string(),
                },
            );
        }
    }
}

pub(super) fn handle_open_thumbnail(
    service: &dyn CropService,
    request: u64,
    filename: &str,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let loaded = service
        .image_locator(filename)
        .and_then(|locator| fetch_decoded(service, locator));
    match loaded {
        Ok(loaded) => send(tx, ctx, WorkerResult::ImageLoaded { request, loaded }),
        Err(e) => send_error(tx, ctx, format!("Failed to load {filename}: {e}")),
    }
}
