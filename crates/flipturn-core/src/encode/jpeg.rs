//! JPEG encoding using the `image` crate's encoder.
//!
//! The encoder supports configurable quality for balancing file size and
//! image quality, and handles both RGB and single-channel grayscale rasters.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::{PixelLayout, Raster};

/// Default JPEG quality for persisted variants.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Sample data length doesn't match expected dimensions
    #[error("invalid sample data: expected {expected} bytes, got {actual}")]
    InvalidSampleData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a raster to JPEG bytes.
///
/// # Arguments
///
/// * `image` - RGB or grayscale raster
/// * `quality` - JPEG quality (1-100, where 100 is highest quality);
///   out-of-range values are clamped
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if the raster dimensions or
/// buffer length are invalid, or the encoder itself fails.
pub fn encode_jpeg(image: &Raster, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected_len = (image.width as usize) * (image.height as usize) * image.channels();
    if image.samples.len() != expected_len {
        return Err(EncodeError::InvalidSampleData {
            expected: expected_len,
            actual: image.samples.len(),
        });
    }

    let quality = quality.clamp(1, 100);
    let color_type = match image.layout {
        PixelLayout::Rgb8 => ExtendedColorType::Rgb8,
        PixelLayout::Gray8 => ExtendedColorType::L8,
    };

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(&image.samples, image.width, image.height, color_type)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
