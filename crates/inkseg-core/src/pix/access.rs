//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//!
//! # Pixel packing
//!
//! Pixels are packed MSB-to-LSB within each 32-bit word. In a 1-bit
//! image, pixel 0 occupies bit 31 of the first word; in an 8-bit image it
//! occupies bits 24..32.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

/// Word index and bit shift of pixel `x` within its row.
#[inline]
fn locate(x: u32, depth: PixelDepth) -> (usize, u32) {
    match depth {
        PixelDepth::Bit1 => ((x >> 5) as usize, 31 - (x & 31)),
        PixelDepth::Bit8 => ((x >> 2) as usize, 24 - 8 * (x & 3)),
        PixelDepth::Bit32 => (x as usize, 0),
    }
}

#[inline]
fn read(data: &[u32], wpl: u32, depth: PixelDepth, x: u32, y: u32) -> u32 {
    let (word, shift) = locate(x, depth);
    let w = data[y as usize * wpl as usize + word];
    match depth {
        PixelDepth::Bit32 => w,
        _ => (w >> shift) & depth.max_value(),
    }
}

#[inline]
fn write(data: &mut [u32], wpl: u32, depth: PixelDepth, x: u32, y: u32, val: u32) {
    let (word, shift) = locate(x, depth);
    let slot = &mut data[y as usize * wpl as usize + word];
    match depth {
        PixelDepth::Bit32 => *slot = val,
        _ => {
            let mask = depth.max_value() << shift;
            *slot = (*slot & !mask) | ((val << shift) & mask);
        }
    }
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates fall outside the data buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read(self.data(), self.wpl(), self.depth(), x, y)
    }

    /// Get RGB values at (x, y).
    ///
    /// Only valid for 32-bit images.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgb)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read(self.data(), self.wpl(), self.depth(), x, y)
    }

    /// Set a pixel value at (x, y).
    ///
    /// The value is masked to the image depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let (wpl, depth) = (self.wpl(), self.depth());
        write(self.data_mut(), wpl, depth, x, y, val);
    }

    /// Set RGB values at (x, y) of a 32-bit image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for non 32-bit images and
    /// [`Error::PixelOutOfBounds`] for coordinates outside the image.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Fill a rectangle with `val`, clipped to the image.
    pub fn fill_rect(&mut self, rect: &crate::Box, val: u32) {
        let Some(clipped) = rect.clip(self.width() as i32, self.height() as i32) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set_pixel_unchecked(x as u32, y as u32, val);
            }
        }
    }
}
