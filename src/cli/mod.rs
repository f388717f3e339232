// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands a PrepareConfig to the
// application layer. Only routing and the final summary line
// live here.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use crate::application::prepare_use_case::PrepareConfig;
use commands::{CaptionsArgs, Commands, PrepareArgs};

#[derive(Parser, Debug)]
#[command(
    name = "caption-prep",
    version,
    about = "Prepare a captioned-image dataset: clean captions, normalize and split images."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the selected use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args)  => run_prepare(args),
            Commands::Captions(args) => run_captions(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;
    use crate::imaging::normalizer::InceptionNormalizer;

    let config = match args.config.clone() {
        Some(path) => load_config(&path, args.quiet)?,
        None       => args.into(),
    };

    let report = PrepareUseCase::new(config, InceptionNormalizer::new()).execute()?;

    println!(
        "Prepared {} captions for {} images; images: {} train, {} val, {} test ({} unlisted).",
        report.captions.captions,
        report.captions.identifiers,
        report.images.train,
        report.images.val,
        report.images.test,
        report.images.unlisted,
    );
    Ok(())
}

fn run_captions(args: CaptionsArgs) -> Result<()> {
    use crate::application::captions_use_case::CaptionsUseCase;

    let config = match args.config.clone() {
        Some(path) => load_config(&path, args.quiet)?,
        None       => args.into(),
    };

    let stats = CaptionsUseCase::new(config).execute()?;
    println!(
        "Wrote {} captions for {} images.",
        stats.captions, stats.identifiers
    );
    Ok(())
}

/// Load a JSON config; `--quiet` still wins over the file.
fn load_config(path: &Path, quiet: bool) -> Result<PrepareConfig> {
    tracing::info!("Loading configuration from '{}'", path.display());
    let mut config = PrepareConfig::load(path)?;
    if quiet {
        config.show_progress = false;
    }
    Ok(config)
}
