//! Raster loading with EXIF orientation handling.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;
use tracing::debug;

use super::{ColorMode, DecodeError, Orientation};
use crate::{PixelLayout, Raster};

/// Load a raster image from disk, applying EXIF orientation correction and
/// normalizing samples to the canonical layout for `mode`.
///
/// # Arguments
///
/// * `path` - Path to a JPEG or PNG file
/// * `mode` - `Color` for RGB output, `Grayscale` for single-channel luma
///
/// # Errors
///
/// Returns `DecodeError::NotFound` if the path does not exist,
/// `DecodeError::Read` if the file cannot be read, and
/// `DecodeError::InvalidImage` if the bytes are not a decodable raster.
pub fn load_image<P: AsRef<Path>>(path: P, mode: ColorMode) -> Result<Raster, DecodeError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DecodeError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| DecodeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    decode_bytes(&bytes, mode).map_err(|source| DecodeError::InvalidImage {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode raster bytes, applying EXIF orientation correction.
///
/// Orientation is read before decoding so the returned raster matches the
/// image as photographed. Bytes without EXIF data decode as-is.
pub fn decode_bytes(bytes: &[u8], mode: ColorMode) -> Result<Raster, image::ImageError> {
    let orientation = extract_orientation(bytes);
    if orientation != Orientation::Normal {
        debug!(?orientation, "applying EXIF orientation");
    }

    let cursor = Cursor::new(bytes);
    let img = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?;

    let oriented = apply_orientation(img, orientation);

    Ok(match mode {
        ColorMode::Color => {
            let rgb = oriented.into_rgb8();
            let (width, height) = rgb.dimensions();
            Raster::new(width, height, PixelLayout::Rgb8, rgb.into_raw())
        }
        ColorMode::Grayscale => {
            let luma = oriented.into_luma8();
            let (width, height) = luma.dimensions();
            Raster::new(width, height, PixelLayout::Gray8, luma.into_raw())
        }
    })
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Minimal valid JPEG bytes (1x1 pixel)
    const MINIMAL_JPEG: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
        0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
        0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
        0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
        0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
        0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
        0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
        0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
        0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
        0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
        0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
        0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
        0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
        0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
        0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
        0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
        0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
        0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
        0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
        0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
        0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
    ];

    #[test]
    fn test_decode_valid_jpeg_color() {
        let img = decode_bytes(MINIMAL_JPEG, ColorMode::Color).unwrap();
        assert_eq!(img.width, 1);
        assert_eq!(img.height, 1);
        assert_eq!(img.layout, PixelLayout::Rgb8);
        assert_eq!(img.samples.len(), 3);
    }

    #[test]
    fn test_decode_valid_jpeg_grayscale() {
        let img = decode_bytes(MINIMAL_JPEG, ColorMode::Grayscale).unwrap();
        assert_eq!(img.width, 1);
        assert_eq!(img.height, 1);
        assert_eq!(img.layout, PixelLayout::Gray8);
        assert_eq!(img.samples.len(), 1);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_bytes(&[0x00, 0x01, 0x02, 0x03], ColorMode::Color);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_empty_bytes() {
        let result = decode_bytes(&[], ColorMode::Color);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let truncated = &MINIMAL_JPEG[0..20];
        let result = decode_bytes(truncated, ColorMode::Color);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_nonexistent_path() {
        let result = load_image("definitely/does/not/exist.jpg", ColorMode::Color);
        assert!(matches!(result, Err(DecodeError::NotFound { .. })));
    }

    #[test]
    fn test_load_non_image_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not an image").unwrap();

        let result = load_image(file.path(), ColorMode::Color);
        assert!(matches!(result, Err(DecodeError::InvalidImage { .. })));
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL_JPEG).unwrap();

        let img = load_image(file.path(), ColorMode::Color).unwrap();
        assert_eq!((img.width, img.height), (1, 1));
    }

    #[test]
    fn test_orientation_extraction_no_exif() {
        // The minimal JPEG has no EXIF data
        let orientation = extract_orientation(MINIMAL_JPEG);
        assert_eq!(orientation, Orientation::Normal);
    }

    #[test]
    fn test_orientation_extraction_invalid_data() {
        let orientation = extract_orientation(&[0x00, 0x01, 0x02]);
        assert_eq!(orientation, Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_normal() {
        // Create a simple 2x2 image
        let pixels = vec![
            255, 0, 0, // Red
            0, 255, 0, // Green
            0, 0, 255, // Blue
            255, 255, 0, // Yellow
        ];
        let rgb_img = image::RgbImage::from_raw(2, 2, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb_img);

        // Normal orientation should not change anything
        let result = apply_orientation(img, Orientation::Normal);
        let rgb_result = result.into_rgb8();

        assert_eq!(rgb_result.dimensions(), (2, 2));
        // Top-left pixel should still be red
        assert_eq!(rgb_result.get_pixel(0, 0).0, [255, 0, 0]);
    }

    #[test]
    fn test_apply_orientation_rotate90() {
        // Create a simple 2x1 image (horizontal)
        let pixels = vec![
            255, 0, 0, // Red (left)
            0, 255, 0, // Green (right)
        ];
        let rgb_img = image::RgbImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb_img);

        // Rotate 90 CW should make it 1x2 (vertical)
        let result = apply_orientation(img, Orientation::Rotate90CW);
        let rgb_result = result.into_rgb8();

        // Dimensions should swap
        assert_eq!(rgb_result.dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        // Create a simple 2x1 image
        let pixels = vec![
            255, 0, 0, // Red (left)
            0, 255, 0, // Green (right)
        ];
        let rgb_img = image::RgbImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb_img);

        // Flip horizontal should swap left and right
        let result = apply_orientation(img, Orientation::FlipHorizontal);
        let rgb_result = result.into_rgb8();

        assert_eq!(rgb_result.get_pixel(0, 0).0, [0, 255, 0]); // Green
        assert_eq!(rgb_result.get_pixel(1, 0).0, [255, 0, 0]); // Red
    }
}
