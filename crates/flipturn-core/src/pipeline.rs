//! The end-to-end pipeline: load, transform, compose, persist.
//!
//! Stages run strictly in order and the pipeline aborts on the first error,
//! so a load failure performs zero writes and zero presentation work.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::decode::{load_image, ColorMode, DecodeError};
use crate::encode::DEFAULT_JPEG_QUALITY;
use crate::montage::{build_montage, MontageError, MontageOptions};
use crate::output::{base_name, persist_variants, WriteError};
use crate::transform::TransformKind;
use crate::Raster;

/// Label under which the untransformed image is persisted.
pub const ORIGINAL_LABEL: &str = "original";

/// Errors from any stage of the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Montage(#[from] MontageError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Options controlling a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Sample layout the input is normalized to.
    pub color_mode: ColorMode,
    /// Directory the variants are written to, created if absent.
    pub output_dir: PathBuf,
    /// JPEG quality for persisted variants (1-100).
    pub jpeg_quality: u8,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Color,
            output_dir: PathBuf::from("output"),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Everything a completed pipeline run produced.
#[derive(Debug)]
pub struct PipelineRun {
    /// The loaded, untransformed image.
    pub original: Raster,
    /// The five derived variants, in menu order.
    pub variants: Vec<(TransformKind, Raster)>,
    /// The composed 2x3 contact sheet.
    pub montage: Raster,
    /// Paths written to disk, in persist order.
    pub written: Vec<PathBuf>,
}

/// Run the full pipeline on one input file.
///
/// Loads the image, derives the fixed transform menu, composes the contact
/// sheet, and writes the original plus every variant to the output
/// directory as `<base>_<label>.jpg`.
pub fn run(input: &Path, options: &PipelineOptions) -> Result<PipelineRun, PipelineError> {
    let original = load_image(input, options.color_mode)?;
    info!(
        width = original.width,
        height = original.height,
        layout = ?original.layout,
        "loaded {}",
        input.display()
    );

    let variants: Vec<(TransformKind, Raster)> = TransformKind::MENU
        .iter()
        .map(|&kind| (kind, kind.apply(&original)))
        .collect();
    info!(count = variants.len(), "derived variants");

    let mut cells: Vec<&Raster> = vec![&original];
    cells.extend(variants.iter().map(|(_, raster)| raster));
    let montage = build_montage(&cells, &MontageOptions::default())?;

    let mut entries: Vec<(&str, &Raster)> = vec![(ORIGINAL_LABEL, &original)];
    entries.extend(
        variants
            .iter()
            .map(|(kind, raster)| (kind.label(), raster)),
    );

    let base = base_name(input);
    let written = persist_variants(&options.output_dir, &base, &entries, options.jpeg_quality)?;
    info!(
        count = written.len(),
        dir = %options.output_dir.display(),
        "wrote variants"
    );

    Ok(PipelineRun {
        original,
        variants,
        montage,
        written,
    })
}
