use anyhow::Result;
use clap::Args;
use regioncrop_core::config::ClientConfig;
use regioncrop_core::service::{resolver_for, ResolveDimensions};

#[derive(Args)]
pub struct DimensionsArgs {
    /// Thumbnail filename as shown by the server (e.g. R_CC.jpg)
    pub filename: String,
}

pub fn run(args: &DimensionsArgs, config: &ClientConfig) -> Result<()> {
    let service = super::connect(config)?;
    let resolver = resolver_for(&config.dimensions, &service);
    let dims = resolver.resolve(&args.filename)?;

    println!("File:        {}", args.filename);
    println!("Source:      {}", config.dimensions.source);
    println!("Dimensions:  {dims}");
    Ok(())
}
