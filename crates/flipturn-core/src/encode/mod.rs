//! JPEG encoding for persisted variants.
//!
//! # Examples
//!
//! ```ignore
//! use flipturn_core::encode::encode_jpeg;
//! use flipturn_core::{PixelLayout, Raster};
//!
//! let image = Raster::filled(100, 100, PixelLayout::Rgb8, 128);
//! let jpeg_bytes = encode_jpeg(&image, 95).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
