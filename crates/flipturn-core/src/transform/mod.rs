//! Geometric transform operations: rotation and mirroring.
//!
//! This module provides the fixed transform menu applied to a loaded raster:
//! rotations by 30, 60 and 90 degrees about the image center, plus horizontal
//! and vertical flips.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Rotation preserves the source canvas; uncovered regions are black
//! - Origin is top-left corner

mod flip;
mod rotation;

pub use flip::{flip, flip_horizontal, flip_vertical, FlipAxis};
pub use rotation::rotate_about_center;

use crate::Raster;

/// A named entry in the fixed transform menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Rotation by 30 degrees counter-clockwise.
    Rotation30,
    /// Rotation by 60 degrees counter-clockwise.
    Rotation60,
    /// Rotation by 90 degrees counter-clockwise.
    Rotation90,
    /// Left-right mirror across the vertical centerline.
    FlipHorizontal,
    /// Top-bottom mirror across the horizontal centerline.
    FlipVertical,
}

impl TransformKind {
    /// The full menu, in presentation order.
    pub const MENU: [TransformKind; 5] = [
        TransformKind::Rotation30,
        TransformKind::Rotation60,
        TransformKind::Rotation90,
        TransformKind::FlipHorizontal,
        TransformKind::FlipVertical,
    ];

    /// Stable lowercase label used in output filenames.
    pub fn label(self) -> &'static str {
        match self {
            TransformKind::Rotation30 => "rotation30",
            TransformKind::Rotation60 => "rotation60",
            TransformKind::Rotation90 => "rotation90",
            TransformKind::FlipHorizontal => "flip_horizontal",
            TransformKind::FlipVertical => "flip_vertical",
        }
    }

    /// Human-readable title for display.
    pub fn title(self) -> &'static str {
        match self {
            TransformKind::Rotation30 => "Rotation 30",
            TransformKind::Rotation60 => "Rotation 60",
            TransformKind::Rotation90 => "Rotation 90",
            TransformKind::FlipHorizontal => "Horizontal Flip",
            TransformKind::FlipVertical => "Vertical Flip",
        }
    }

    /// Apply this transform, producing a new raster.
    ///
    /// The output always has the same width, height and layout as the input.
    pub fn apply(self, image: &Raster) -> Raster {
        match self {
            TransformKind::Rotation30 => rotate_about_center(image, 30.0),
            TransformKind::Rotation60 => rotate_about_center(image, 60.0),
            TransformKind::Rotation90 => rotate_about_center(image, 90.0),
            TransformKind::FlipHorizontal => flip(image, FlipAxis::Horizontal),
            TransformKind::FlipVertical => flip(image, FlipAxis::Vertical),
        }
    }
}
