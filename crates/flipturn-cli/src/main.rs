//! `flipturn` CLI - derive rotated and mirrored variants of an image.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flipturn_core::{ColorMode, PipelineOptions, TransformKind};

mod preview;

/// Rotate and mirror an image, preview the results, and write them to disk.
#[derive(Parser, Debug)]
#[command(name = "flipturn")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path. Prompts on stdin when omitted.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output directory for the written variants.
    #[arg(long, default_value = "output", value_name = "DIR")]
    out_dir: PathBuf,

    /// Output JPEG quality (1-100).
    #[arg(short, long, default_value = "95", value_name = "INT")]
    quality: u8,

    /// Load the image as single-channel grayscale.
    #[arg(long)]
    grayscale: bool,

    /// Skip opening the contact-sheet preview.
    #[arg(long)]
    no_preview: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let input = match &args.input {
        Some(path) => path.clone(),
        None => prompt_for_input()?,
    };

    let options = PipelineOptions {
        color_mode: if args.grayscale {
            ColorMode::Grayscale
        } else {
            ColorMode::Color
        },
        output_dir: args.out_dir.clone(),
        jpeg_quality: args.quality,
    };

    let outcome = flipturn_core::run(&input, &options)?;

    if !args.no_preview {
        print_legend();
        // A missing viewer is an environment concern, never a failure
        match preview::show(&outcome.montage, args.quality) {
            Ok(path) => tracing::debug!("preview sheet at {}", path.display()),
            Err(err) => tracing::warn!("could not open preview: {err:#}"),
        }
    }

    println!(
        "Wrote {} files to {}",
        outcome.written.len(),
        args.out_dir.display()
    );

    Ok(())
}

/// Ask for an input path on stdout and read one line from stdin.
fn prompt_for_input() -> Result<PathBuf> {
    print!("Enter an image filename (e.g. image.jpg): ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input path from stdin")?;

    let trimmed = line.trim();
    anyhow::ensure!(!trimmed.is_empty(), "no input path given");
    Ok(PathBuf::from(trimmed))
}

/// Print the contact-sheet cell titles in grid order.
fn print_legend() {
    for row in legend_rows() {
        println!("{}", row.join(" | "));
    }
}

/// Cell titles of the 2x3 contact sheet, row by row.
fn legend_rows() -> [Vec<&'static str>; 2] {
    let mut titles = vec!["Original Image"];
    titles.extend(TransformKind::MENU.iter().map(|kind| kind.title()));

    [titles[0..3].to_vec(), titles[3..6].to_vec()]
}
