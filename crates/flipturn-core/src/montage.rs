//! Contact-sheet composition.
//!
//! Arranges the original image and its variants into a 2-row by 3-column
//! grid on a solid background. The resulting sheet is itself a raster and
//! can be encoded and shown with any image viewer.

use thiserror::Error;

use crate::{PixelLayout, Raster};

/// Number of grid rows in a contact sheet.
pub const GRID_ROWS: u32 = 2;
/// Number of grid columns in a contact sheet.
pub const GRID_COLS: u32 = 3;

/// Errors that can occur while composing a contact sheet.
#[derive(Debug, Error)]
pub enum MontageError {
    /// No cells were supplied.
    #[error("montage requires at least one cell")]
    NoCells,

    /// Cells do not share a single pixel layout.
    #[error("montage cells must share one pixel layout, got {first:?} and {other:?}")]
    LayoutMismatch {
        first: PixelLayout,
        other: PixelLayout,
    },
}

/// Layout options for [`build_montage`].
#[derive(Debug, Clone, Copy)]
pub struct MontageOptions {
    /// Outer margin around the grid, in pixels.
    pub margin: u32,
    /// Gap between adjacent cells, in pixels.
    pub gap: u32,
    /// Background sample value (applied to every channel).
    pub background: u8,
}

impl Default for MontageOptions {
    fn default() -> Self {
        Self {
            margin: 16,
            gap: 8,
            background: 32,
        }
    }
}

/// Compose cells into a 2x3 contact sheet.
///
/// Cells fill the grid row by row in the order given. Cell slots are sized
/// to the largest cell; smaller cells are centered within their slot. At
/// most six cells fit; extra cells are ignored.
///
/// # Errors
///
/// Returns `MontageError::NoCells` for an empty cell list and
/// `MontageError::LayoutMismatch` when cells mix pixel layouts.
pub fn build_montage(cells: &[&Raster], options: &MontageOptions) -> Result<Raster, MontageError> {
    let cells = &cells[..cells.len().min((GRID_ROWS * GRID_COLS) as usize)];

    let first = cells.first().ok_or(MontageError::NoCells)?;
    let layout = first.layout;
    for cell in cells {
        if cell.layout != layout {
            return Err(MontageError::LayoutMismatch {
                first: layout,
                other: cell.layout,
            });
        }
    }

    let cell_w = cells.iter().map(|c| c.width).max().unwrap_or(1).max(1);
    let cell_h = cells.iter().map(|c| c.height).max().unwrap_or(1).max(1);

    let sheet_w = 2 * options.margin + GRID_COLS * cell_w + (GRID_COLS - 1) * options.gap;
    let sheet_h = 2 * options.margin + GRID_ROWS * cell_h + (GRID_ROWS - 1) * options.gap;

    let mut sheet = Raster::filled(sheet_w, sheet_h, layout, options.background);

    for (slot, cell) in cells.iter().enumerate() {
        let row = slot as u32 / GRID_COLS;
        let col = slot as u32 % GRID_COLS;

        // Slot origin, then center the cell within the slot
        let x0 = options.margin + col * (cell_w + options.gap) + (cell_w - cell.width) / 2;
        let y0 = options.margin + row * (cell_h + options.gap) + (cell_h - cell.height) / 2;

        blit(&mut sheet, cell, x0, y0);
    }

    Ok(sheet)
}

/// Copy `src` into `dst` with its top-left corner at (x0, y0).
///
/// The caller guarantees the source fits; the layouts already match.
fn blit(dst: &mut Raster, src: &Raster, x0: u32, y0: u32) {
    let channels = dst.channels();
    let src_row_len = src.width as usize * channels;
    let dst_row_len = dst.width as usize * channels;

    for src_y in 0..src.height as usize {
        let src_start = src_y * src_row_len;
        let dst_start = (y0 as usize + src_y) * dst_row_len + x0 as usize * channels;
        dst.samples[dst_start..dst_start + src_row_len]
            .copy_from_slice(&src.samples[src_start..src_start + src_row_len]);
    }
}
