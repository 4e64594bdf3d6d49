//! Mirror reflections across the image centerlines.

use crate::Raster;

/// Axis of reflection for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Left-right mirror across the vertical centerline.
    Horizontal,
    /// Top-bottom mirror across the horizontal centerline.
    Vertical,
}

/// Reflect an image across one of its centerlines.
///
/// The output has the same dimensions and layout as the input. Flipping is
/// exact sample copying; applying the same flip twice restores the original
/// bit-for-bit.
pub fn flip(image: &Raster, axis: FlipAxis) -> Raster {
    match axis {
        FlipAxis::Horizontal => flip_horizontal(image),
        FlipAxis::Vertical => flip_vertical(image),
    }
}

/// Left-right mirror: pixel (x, y) moves to (width - 1 - x, y).
pub fn flip_horizontal(image: &Raster) -> Raster {
    let channels = image.channels();
    let row_len = image.width as usize * channels;
    let mut output = Vec::with_capacity(image.samples.len());

    for row in image.samples.chunks_exact(row_len) {
        for pixel in row.chunks_exact(channels).rev() {
            output.extend_from_slice(pixel);
        }
    }

    Raster::new(image.width, image.height, image.layout, output)
}

/// Top-bottom mirror: pixel (x, y) moves to (x, height - 1 - y).
pub fn flip_vertical(image: &Raster) -> Raster {
    let channels = image.channels();
    let row_len = image.width as usize * channels;
    let mut output = Vec::with_capacity(image.samples.len());

    for row in image.samples.chunks_exact(row_len).rev() {
        output.extend_from_slice(row);
    }

    Raster::new(image.width, image.height, image.layout, output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
