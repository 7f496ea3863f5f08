//! Command line front end
//!
//! `svgr <input> <output> [--threaded]` reads a document, converts it and
//! writes the output file once the whole conversion has succeeded.

use crate::{BUILD_DATE, VERSION};
use anyhow::anyhow;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use svgr_core::{DocumentError, OutputError};
use svgr_flatten::{ConversionOptions, Converter, FlattenStep};
use svgr_settings::ConversionSettings;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "svgr", version, about = "Flatten SVG documents into line segment files")]
pub struct Cli {
    /// Input document (*.svg, or *.json point/type document)
    pub input: Option<PathBuf>,

    /// Output file (*.svgr)
    pub output: Option<String>,

    /// Convert chunks in parallel
    #[arg(long)]
    pub threaded: bool,

    /// Maximum number of parallel chunks
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Settings file (.json or .toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn print_banner() {
    println!();
    println!("svgr (Scalable Vector Graphics optimized for Rustangelo) v{VERSION}");
    println!("usage: svgr [input-file (*.svg)] [output-file (*.svgr)] [--threaded]");
    println!();
}

fn progress_line(percent: u8) {
    println!("Processing SVG: {percent}%");
}

/// Settings file values with command line overrides applied
fn resolve_settings(cli: &Cli) -> anyhow::Result<ConversionSettings> {
    let mut settings = ConversionSettings::load_or_default(cli.config.as_deref())?;
    if let Some(workers) = cli.workers {
        settings.workers = workers;
    }
    settings.threaded |= cli.threaded;
    settings.validate()?;
    Ok(settings)
}

/// Run one conversion. Without both positionals this does nothing.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    debug!(version = VERSION, build_date = BUILD_DATE, "starting");
    let (Some(input), Some(output)) = (cli.input.as_ref(), cli.output.as_ref()) else {
        return Ok(());
    };

    if !input.is_file() {
        return Err(DocumentError::InputNotFound {
            path: input.clone(),
        }
        .into());
    }
    if output.trim().is_empty() {
        return Err(OutputError::InvalidOutputPath {
            path: output.clone(),
        }
        .into());
    }

    let settings = resolve_settings(&cli)?;
    debug!(?settings, "resolved settings");
    let watch = Instant::now();

    println!("Reading input file: {}", input.display());
    let source = svgr_source::load(input)?;
    let document = source.output_document(settings.magic.as_str());

    let flatten_step = FlattenStep::new(settings.flatten_step)
        .ok_or_else(|| anyhow!("invalid flatten step {}", settings.flatten_step))?;
    let converter = Converter::new(ConversionOptions {
        workers: settings.workers,
        flatten_step,
    });

    let text = if settings.threaded {
        converter
            .convert_parallel(
                Arc::new(source.path),
                source.transform,
                &document,
                Box::new(progress_line),
            )
            .await?
    } else {
        converter.convert_sequential(&source.path, source.transform, &document, progress_line)?
    };

    fs::write(output, &text)?;
    info!(output = %output, bytes = text.len(), "wrote output");

    println!();
    println!("Processing completed in {} ms.", watch.elapsed().as_millis());
    Ok(())
}
