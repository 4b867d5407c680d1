//! inkseg-core - Basic data structures for handwriting word segmentation
//!
//! This crate provides the data structures shared by the inkseg crates:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`Box`] / [`Boxa`] - Rectangle regions and ordered sequences of them
//!
//! The word-box algorithm itself lives on [`Boxa`]: regions are put in
//! left-to-right order with [`Boxa::sorted_by_x`], folded into words with
//! [`Boxa::merge_horizontal`], and filtered with
//! [`Boxa::select_by_min_size`].

pub mod box_;
pub mod error;
pub mod pix;

pub use box_::{Box, Boxa, SizeRelation, SizeSelectType, WordAccumulator};
pub use error::{Error, Result};
pub use pix::{Pix, PixMut, PixelDepth};

/// Color channel helpers for 32-bit pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (
            ((pixel >> RED_SHIFT) & 0xff) as u8,
            ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            ((pixel >> BLUE_SHIFT) & 0xff) as u8,
        )
    }

    /// BT.601 luma, `0.299 R + 0.587 G + 0.114 B`, in 14-bit fixed point.
    #[inline]
    pub fn luma(r: u8, g: u8, b: u8) -> u8 {
        const R_W: u32 = 4899;
        const G_W: u32 = 9617;
        const B_W: u32 = 1868;
        let sum = r as u32 * R_W + g as u32 * G_W + b as u32 * B_W;
        ((sum + (1 << 13)) >> 14) as u8
    }

}
