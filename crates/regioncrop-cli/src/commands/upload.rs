use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use regioncrop_core::config::ClientConfig;
use regioncrop_core::consts::MAX_UPLOAD_FILES;
use regioncrop_core::service::{thumbnail_name, upload_batch, CropService};

#[derive(Args)]
pub struct UploadArgs {
    /// Files to upload (only the first four are sent)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: &UploadArgs, config: &ClientConfig) -> Result<()> {
    let service = super::connect(config)?;
    let batch = upload_batch(&args.files);
    if args.files.len() > batch.len() {
        println!(
            "Selected {} files; uploading the first {MAX_UPLOAD_FILES}",
            args.files.len()
        );
    }

    let pb = super::spinner(&format!("Uploading {} files...", batch.len()))?;
    let result = service.upload(batch);
    pb.finish_and_clear();
    result?;

    for path in batch {
        match thumbnail_name(path) {
            Some(thumb) => println!("Uploaded {} -> {thumb}", path.display()),
            None => println!("Sent {} (ignored by server: not a .dcm)", path.display()),
        }
    }
    Ok(())
}
