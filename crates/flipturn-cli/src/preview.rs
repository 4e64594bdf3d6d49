//! Best-effort contact-sheet preview.
//!
//! The sheet is written to the OS temp directory and opened with the
//! platform's default image viewer. Callers treat failures here as
//! diagnostics, not pipeline errors.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};

use flipturn_core::{encode_jpeg, Raster};

/// Encode the sheet to a temporary JPEG and open it with the platform
/// viewer. Returns the temp file path.
pub fn show(sheet: &Raster, quality: u8) -> Result<PathBuf> {
    let path = write_temp_sheet(sheet, quality)?;
    open_with_viewer(&path)?;
    Ok(path)
}

/// Write the sheet to `<temp>/flipturn_preview.jpg`, overwriting any
/// previous run's sheet.
fn write_temp_sheet(sheet: &Raster, quality: u8) -> Result<PathBuf> {
    let path = std::env::temp_dir().join("flipturn_preview.jpg");
    let bytes = encode_jpeg(sheet, quality).context("failed to encode preview sheet")?;
    std::fs::write(&path, bytes)
        .with_context(|| format!("failed to write preview sheet to {}", path.display()))?;
    Ok(path)
}

/// Launch the platform's default opener on a file, without waiting for it.
fn open_with_viewer(path: &std::path::Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(path);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    command
        .spawn()
        .with_context(|| format!("failed to launch viewer for {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipturn_core::PixelLayout;

    #[test]
    fn test_write_temp_sheet() {
        let sheet = Raster::filled(12, 8, PixelLayout::Rgb8, 64);

        let path = write_temp_sheet(&sheet, 90).unwrap();
        assert!(path.exists());

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_write_temp_sheet_rejects_empty() {
        let sheet = Raster {
            width: 0,
            height: 0,
            layout: PixelLayout::Rgb8,
            samples: vec![],
        };

        assert!(write_temp_sheet(&sheet, 90).is_err());
    }
}
