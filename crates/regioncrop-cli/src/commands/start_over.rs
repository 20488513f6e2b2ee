use anyhow::Result;
use clap::Args;
use console::Term;
use regioncrop_core::config::ClientConfig;
use regioncrop_core::service::CropService;

#[derive(Args)]
pub struct StartOverArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub fn run(args: &StartOverArgs, config: &ClientConfig) -> Result<()> {
    if !args.yes && !confirm("Are you sure you want to delete all files? [y/N] ")? {
        println!("Aborted.");
        return Ok(());
    }

    let service = super::connect(config)?;
    let pb = super::spinner("Deleting files...")?;
    let result = service.start_over();
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            println!("All files deleted.");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to delete files: {e}")),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    let term = Term::stderr();
    term.write_str(prompt)?;
    let answer = term.read_line()?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
