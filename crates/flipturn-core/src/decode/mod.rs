//! Image loading for flipturn.
//!
//! This module provides functionality for:
//! - Reading a raster image file from disk (JPEG or PNG)
//! - Applying EXIF orientation correction
//! - Normalizing samples to a canonical layout (RGB or single-channel luma)
//!
//! # Examples
//!
//! ```ignore
//! use flipturn_core::decode::{load_image, ColorMode};
//!
//! let image = load_image("photo.jpg", ColorMode::Color).unwrap();
//! println!("Loaded {}x{} image", image.width, image.height);
//! ```

mod load;
mod types;

pub use load::{decode_bytes, load_image};
pub use types::{ColorMode, DecodeError, Orientation};
