//! Persisting variants to the output directory.
//!
//! Each entry is written as `<dir>/<base>_<label>.jpg`, where `base` is the
//! input filename without its extension. Existing files are overwritten
//! silently.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::encode::{encode_jpeg, EncodeError};
use crate::Raster;

/// Errors that can occur while writing variants to disk.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A variant could not be encoded.
    #[error("failed to encode {label}: {source}")]
    Encode {
        label: String,
        #[source]
        source: EncodeError,
    },

    /// An encoded variant could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Derive the output base name from an input path: the filename without its
/// extension.
///
/// Falls back to `"image"` for paths with no usable filename.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("image")
        .to_string()
}

/// Write labeled rasters to `dir`, creating the directory if absent.
///
/// Files are named `<base>_<label>.jpg` and encoded as JPEG at `quality`.
/// Returns the written paths in entry order.
///
/// # Errors
///
/// Fails with `WriteError` on the first entry that cannot be encoded or
/// written; earlier files stay on disk.
pub fn persist_variants(
    dir: &Path,
    base: &str,
    entries: &[(&str, &Raster)],
    quality: u8,
) -> Result<Vec<PathBuf>, WriteError> {
    std::fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(entries.len());
    for (label, raster) in entries {
        let bytes = encode_jpeg(raster, quality).map_err(|source| WriteError::Encode {
            label: (*label).to_string(),
            source,
        })?;

        let path = dir.join(format!("{base}_{label}.jpg"));
        std::fs::write(&path, bytes).map_err(|source| WriteError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "wrote variant");
        written.push(path);
    }

    Ok(written)
}
