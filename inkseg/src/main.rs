//! inkseg: split handwritten line images into word images
//!
//! ```text
//! inkseg segment --input lines --output Detected/lines --small writer03
//! inkseg --config inkseg.toml segment
//! inkseg inspect lines/writer03/a01-000u-00.png --group small
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use inkseg::recog::SizeGroup;
use inkseg::{Boxa, Pipeline, PipelineConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inkseg")]
#[command(about = "Split scanned handwritten line images into word images")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    tuning: TuningArgs,

    #[command(subcommand)]
    command: Command,
}

/// Settings shared by every subcommand; each overrides the config file
#[derive(Args)]
struct TuningArgs {
    /// Largest horizontal gap in pixels merged into one word
    #[arg(long, global = true)]
    space_threshold: Option<u32>,

    /// Gray values at or below this are ink
    #[arg(long, global = true)]
    gray_threshold: Option<u8>,

    /// Number of dilation passes
    #[arg(long, global = true)]
    iterations: Option<u32>,
}

#[derive(Subcommand)]
enum Command {
    /// Segment every image under the input directory
    Segment {
        /// Input root; each subfolder is one dataset
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output root
        #[arg(long)]
        output: Option<PathBuf>,

        /// Folder using the small brick (repeatable)
        #[arg(long, value_name = "FOLDER")]
        small: Vec<String>,

        /// Folder using the large brick (repeatable)
        #[arg(long, value_name = "FOLDER")]
        large: Vec<String>,

        /// Folder using the extra small brick (repeatable)
        #[arg(long, value_name = "FOLDER")]
        esmall: Vec<String>,
    },
    /// Print the word boxes of one image as JSON without writing crops
    Inspect {
        /// Image to segment
        image: PathBuf,

        /// Size group: esmall, small, normal or large
        #[arg(long)]
        group: Option<String>,
    },
}

#[derive(Serialize)]
struct InspectReport<'a> {
    image: &'a Path,
    group: SizeGroup,
    regions: &'a Boxa,
    merged: &'a Boxa,
    words: &'a Boxa,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    apply_tuning(&mut config, &cli.tuning);

    match cli.command {
        Command::Segment {
            input,
            output,
            small,
            large,
            esmall,
        } => {
            if let Some(input) = input {
                config.input_dir = input;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            config.groups.small.extend(small);
            config.groups.large.extend(large);
            config.groups.esmall.extend(esmall);

            let summary = inkseg::run(config).context("Segmentation run failed")?;
            println!(
                "{} folders, {} images ({} skipped), {} words written",
                summary.folders,
                summary.images_processed,
                summary.images_skipped,
                summary.words_written
            );
            Ok(())
        }
        Command::Inspect { image, group } => {
            let group = match group {
                Some(name) => name.parse::<SizeGroup>()?,
                None => SizeGroup::Normal,
            };
            // Inspecting a single file needs no input tree
            if config.input_dir.as_os_str().is_empty() {
                config.input_dir = image
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
            }
            if config.output_dir.as_os_str().is_empty() {
                config.output_dir = PathBuf::from(".");
            }

            let pipeline = Pipeline::new(config)?;
            let result = pipeline
                .inspect(&image, group)
                .with_context(|| format!("Failed to segment {}", image.display()))?;
            let report = InspectReport {
                image: &image,
                group,
                regions: &result.regions,
                merged: &result.merged,
                words: &result.words,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

fn apply_tuning(config: &mut PipelineConfig, tuning: &TuningArgs) {
    if let Some(threshold) = tuning.space_threshold {
        config.space_threshold = threshold;
    }
    if let Some(threshold) = tuning.gray_threshold {
        config.gray_threshold = threshold;
    }
    if let Some(iterations) = tuning.iterations {
        config.dilate_iterations = iterations;
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
