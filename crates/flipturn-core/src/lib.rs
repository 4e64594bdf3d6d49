//! Flipturn Core - Geometric image variants library
//!
//! This crate provides the processing stages behind flipturn: decoding a
//! raster image from disk, deriving a fixed menu of rotated and mirrored
//! variants, composing a contact sheet, and persisting everything as JPEG.

pub mod decode;
pub mod encode;
pub mod montage;
pub mod output;
pub mod pipeline;
pub mod transform;

pub use decode::{load_image, ColorMode, DecodeError};
pub use encode::{encode_jpeg, EncodeError};
pub use montage::{build_montage, MontageError, MontageOptions};
pub use output::{base_name, persist_variants, WriteError};
pub use pipeline::{run, PipelineError, PipelineOptions, PipelineRun};
pub use transform::{flip, rotate_about_center, FlipAxis, TransformKind};

/// Sample layout of a raster's pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelLayout {
    /// Three 8-bit samples per pixel, red-green-blue order.
    #[default]
    Rgb8,
    /// One 8-bit luma sample per pixel.
    Gray8,
}

impl PixelLayout {
    /// Number of samples per pixel for this layout.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Rgb8 => 3,
            PixelLayout::Gray8 => 1,
        }
    }
}

/// A decoded raster image with an explicit pixel layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Sample layout of `samples`.
    pub layout: PixelLayout,
    /// Row-major sample data. Length is width * height * channels.
    pub samples: Vec<u8>,
}

impl Raster {
    /// Create a new Raster with the given dimensions and sample data.
    pub fn new(width: u32, height: u32, layout: PixelLayout, samples: Vec<u8>) -> Self {
        debug_assert_eq!(
            samples.len(),
            (width as usize) * (height as usize) * layout.channels(),
            "Sample buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            samples,
        }
    }

    /// Create a Raster filled with a single sample value.
    pub fn filled(width: u32, height: u32, layout: PixelLayout, value: u8) -> Self {
        let len = (width as usize) * (height as usize) * layout.channels();
        Self {
            width,
            height,
            layout,
            samples: vec![value; len],
        }
    }

    /// Number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the sample buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.samples.len()
    }

    /// Check if this is an empty/invalid raster.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.samples.is_empty()
    }

    /// Byte offset of the pixel at (x, y).
    #[inline]
    pub fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) as usize) * self.channels()
    }

    /// Borrow the samples of the pixel at (x, y).
    ///
    /// The slice length equals the channel count. Panics if (x, y) is out of
    /// bounds, like a direct buffer index would.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let idx = self.pixel_index(x, y);
        &self.samples[idx..idx + self.channels()]
    }
}
