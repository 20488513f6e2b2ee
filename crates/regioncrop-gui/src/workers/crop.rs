use std::sync::mpsc;
use std::time::Instant;

use regioncrop_core::service::{CropService, ResolveDimensions};
use regioncrop_core::session::{submit, CropSnapshot};

use crate::messages::WorkerResult;

use super::io::fetch_decoded;
use super::{send, send_error, send_log};

pub(super) fn handle_crop(
    service: &dyn CropService,
    resolver: &dyn ResolveDimensions,
    snapshot: &CropSnapshot,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    let outcome = submit(service, resolver, snapshot);
    let cropped = outcome.as_ref().ok().cloned();
    send(
        tx,
        ctx,
        WorkerResult::CropComplete {
            ticket: snapshot.ticket.clone(),
            outcome,
        },
    );

    let Some(locator) = cropped else {
        return;
    };
    send_log(
        tx,
        ctx,
        format!(
            "Cropped {} in {:.1}s",
            snapshot.ticket.filename,
            start.elapsed().as_secs_f32()
        ),
    );

    // The server already replaced the file; a failed reload is only logged.
    match fetch_decoded(service, locator.clone()) {
        Ok(loaded) => send(tx, ctx, WorkerResult::CroppedImageLoaded { loaded }),
        Err(e) => {
            tracing::error!("Failed to load cropped image {locator}: {e}");
            send_error(tx, ctx, format!("Failed to load cropped image {locator}: {e}"));
        }
    }
}
