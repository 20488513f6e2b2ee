use std::collections::VecDeque;
use std::sync::mpsc;

use regioncrop_core::config::ClientConfig;
use regioncrop_core::service::{resolver_for, HttpCropService};
use regioncrop_core::session::CropTicket;

use crate::messages::{Task, WorkerCommand, WorkerResult};

use super::{crop, io};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    config: ClientConfig,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("regioncrop-worker".into())
        .spawn(move || {
            worker_loop(config, cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    config: ClientConfig,
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let service = match HttpCropService::new(&config.server) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Failed to create HTTP client: {e}");
            send_error(&tx, &ctx, format!("Failed to create HTTP client: {e}"));
            return;
        }
    };
    send_log(&tx, &ctx, format!("Server: {}", service.base_url()));
    let resolver = resolver_for(&config.dimensions, &service);

    let mut queue = VecDeque::new();
    loop {
        if queue.is_empty() {
            match cmd_rx.recv() {
                Ok(cmd) => queue.push_back(cmd),
                Err(_) => break,
            }
        }
        queue.extend(cmd_rx.try_iter());
        let Some(cmd) = queue.pop_front() else {
            continue;
        };

        if let WorkerCommand::Crop { snapshot } = &cmd {
            if is_superseded(&snapshot.ticket, &queue) {
                tracing::warn!(
                    filename = %snapshot.ticket.filename,
                    seq = snapshot.ticket.seq,
                    "skipping superseded crop request"
                );
                send_log(
                    &tx,
                    &ctx,
                    format!(
                        "Skipped crop request #{} of {}: a newer one is queued",
                        snapshot.ticket.seq, snapshot.ticket.filename
                    ),
                );
                continue;
            }
        }

        send(&tx, &ctx, WorkerResult::Started { task: task_of(&cmd) });
        match cmd {
            WorkerCommand::Upload { files } => {
                io::handle_upload(&service, &files, &tx, &ctx);
            }
            WorkerCommand::StartOver => {
                io::handle_start_over(&service, &tx, &ctx);
            }
            WorkerCommand::OpenThumbnail { request, filename } => {
                io::handle_open_thumbnail(&service, request, &filename, &tx, &ctx);
            }
            WorkerCommand::Crop { snapshot } => {
                crop::handle_crop(&service, resolver.as_ref(), &snapshot, &tx, &ctx);
            }
        }
    }
}

fn task_of(cmd: &WorkerCommand) -> Task {
    match cmd {
        WorkerCommand::Upload { .. } => Task::Uploading,
        WorkerCommand::StartOver => Task::StartingOver,
        WorkerCommand::OpenThumbnail { .. } => Task::Loading,
        WorkerCommand::Crop { .. } => Task::Cropping,
    }
}

/// A crop is superseded when a newer crop of the same file is already queued.
fn is_superseded(ticket: &CropTicket, queue: &VecDeque<WorkerCommand>) -> bool {
    queue.iter().any(|cmd| {
        matches!(cmd, WorkerCommand::Crop { snapshot }
            if snapshot.ticket.filename == ticket.filename && snapshot.ticket.seq > ticket.seq)
    })
}
