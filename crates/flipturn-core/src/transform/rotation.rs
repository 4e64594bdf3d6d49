//! Canvas-preserving rotation with bilinear interpolation.
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each pixel in the output image,
//! we calculate which source pixel(s) contribute to it and interpolate
//! their values.
//!
//! For a counter-clockwise rotation by angle θ (in y-down image
//! coordinates), the inverse transform is:
//! ```text
//! src_x = (dst_x - cx) * cos(θ) - (dst_y - cy) * sin(θ) + cx
//! src_y = (dst_x - cx) * sin(θ) + (dst_y - cy) * cos(θ) + cy
//! ```
//!
//! The output canvas has the same dimensions as the source. Source content
//! rotated outside the canvas is discarded; destination pixels that map
//! outside the source bounds are filled with black.

use crate::Raster;

/// Maximum number of channels any supported layout carries.
const MAX_CHANNELS: usize = 3;

/// Rotate an image about its center by `angle_degrees`, keeping the
/// original canvas.
///
/// Positive angles rotate counter-clockwise. Scale factor is always 1.
/// Works for any angle; the fixed menu uses 30, 60 and 90.
///
/// # Returns
///
/// A new `Raster` with the same width, height and layout as the source.
/// Calling twice with the same input yields bit-identical output.
pub fn rotate_about_center(image: &Raster, angle_degrees: f64) -> Raster {
    // Fast path: no rotation needed
    if angle_degrees.abs() < 0.001 {
        return image.clone();
    }

    let channels = image.channels();
    let (w, h) = (image.width, image.height);

    // In y-down image coordinates this inverse map moves content
    // counter-clockwise for positive angles
    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    // Rotation center: the image center, shared by source and destination
    let cx = w as f64 / 2.0;
    let cy = h as f64 / 2.0;

    let mut output = vec![0u8; image.samples.len()];

    for dst_y in 0..h {
        for dst_x in 0..w {
            // Translate destination point to origin at center
            let dx = dst_x as f64 - cx;
            let dy = dst_y as f64 - cy;

            // Apply inverse rotation to find source coordinates
            let src_x = dx * cos - dy * sin + cx;
            let src_y = dx * sin + dy * cos + cy;

            let dst_idx = ((dst_y * w + dst_x) as usize) * channels;
            let pixel = sample_bilinear(image, src_x, src_y);
            output[dst_idx..dst_idx + channels].copy_from_slice(&pixel[..channels]);
        }
    }

    Raster::new(w, h, image.layout, output)
}

/// Get a pixel as f64 samples from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &Raster, px: usize, py: usize) -> [f64; MAX_CHANNELS] {
    let channels = image.channels();
    let idx = (py * image.width as usize + px) * channels;
    let mut out = [0.0; MAX_CHANNELS];
    for (o, s) in out[..channels].iter_mut().zip(&image.samples[idx..]) {
        *o = *s as f64;
    }
    out
}

/// Sample a pixel using bilinear interpolation.
///
/// Bilinear interpolation considers the 4 nearest pixels and weights
/// their contribution based on distance. Coordinates within half a pixel
/// of the image bounds clamp to the border; anything further out is black.
fn sample_bilinear(image: &Raster, x: f64, y: f64) -> [u8; MAX_CHANNELS] {
    let (w, h) = (image.width as usize, image.height as usize);

    if x < -0.5 || y < -0.5 || x > w as f64 - 0.5 || y > h as f64 - 0.5 {
        return [0; MAX_CHANNELS];
    }

    let x = x.clamp(0.0, (w - 1) as f64);
    let y = y.clamp(0.0, (h - 1) as f64);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; MAX_CHANNELS];
    for i in 0..image.channels() {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


// ============================================================================
// Property-Based Tests
// ============================================================================
