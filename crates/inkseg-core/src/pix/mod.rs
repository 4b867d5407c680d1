//! PIX - The image container
//!
//! The `Pix` structure is the image type shared by every inkseg crate.
//! Three depths are supported: 1-bit ink masks, 8-bit grayscale, and
//! 32-bit RGB.
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word
//! - For 32-bit images, color order is RGBA (red in MSB)
//!
//! # Ownership model
//!
//! Images are built in a [`PixMut`] and frozen into a [`Pix`] with
//! `Into<Pix>`. A frozen `Pix` is shared through an `Arc`, so cloning it
//! never copies pixels.

mod access;
mod clip;
mod convert;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel depth (bits per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 1-bit binary image (1 = foreground ink)
    Bit1 = 1,
    /// 8-bit grayscale
    Bit8 = 8,
    /// 32-bit RGB
    Bit32 = 32,
}

impl PixelDepth {
    /// Get the number of bits per pixel.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum pixel value representable at this depth.
    pub fn max_value(self) -> u32 {
        match self {
            PixelDepth::Bit32 => u32::MAX,
            _ => (1u32 << self.bits()) - 1,
        }
    }
}

#[derive(Debug)]
struct PixData {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// 32-bit words per row
    wpl: u32,
    /// Packed rows, `wpl * height` words
    data: Vec<u32>,
}

/// PIX - Main image container
///
/// # Examples
///
/// ```
/// use inkseg_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(640, 48, PixelDepth::Bit8).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 48);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create an all-zero image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        PixMut::new(width, height, depth).map(Into::into)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    #[inline]
    pub(crate) fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    #[inline]
    pub(crate) fn data(&self) -> &[u32] {
        &self.inner.data
    }
}

/// Mutable PIX
///
/// Owns its pixels outright. Freeze it into a [`Pix`] with `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create an all-zero mutable image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or a
    /// row does not fit in `u32` words.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let bits_per_row = u64::from(width) * u64::from(depth.bits());
        let wpl = u32::try_from(bits_per_row.div_ceil(32))
            .map_err(|_| Error::InvalidDimension { width, height })?;
        Ok(PixMut {
            inner: PixData {
                width,
                height,
                depth,
                wpl,
                data: vec![0; wpl as usize * height as usize],
            },
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    #[inline]
    pub(crate) fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    #[inline]
    pub(crate) fn data(&self) -> &[u32] {
        &self.inner.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix {
            inner: Arc::new(pm.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pix_creation() {
        let pix = Pix::new(100, 200, PixelDepth::Bit8).unwrap();
        assert_eq!(pix.width(), 100);
        assert_eq!(pix.height(), 200);
        assert_eq!(pix.depth(), PixelDepth::Bit8);
        assert_eq!(pix.wpl(), 25);
    }

    #[test]
    fn test_wpl_binary() {
        let pix = Pix::new(33, 2, PixelDepth::Bit1).unwrap();
        assert_eq!(pix.wpl(), 2);
        assert_eq!(pix.data().len(), 4);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Pix::new(0, 100, PixelDepth::Bit8).is_err());
        assert!(PixMut::new(100, 0, PixelDepth::Bit1).is_err());
    }

    #[test]
    fn test_max_value() {
        assert_eq!(PixelDepth::Bit1.max_value(), 1);
        assert_eq!(PixelDepth::Bit8.max_value(), 255);
        assert_eq!(PixelDepth::Bit32.max_value(), u32::MAX);
    }

    #[test]
    fn test_frozen_clone_shares_pixels() {
        let mut pm = PixMut::new(4, 4, PixelDepth::Bit8).unwrap();
        pm.data_mut()[0] = 0xFF00_0000;
        let pix: Pix = pm.into();
        let shared = pix.clone();
        assert!(Arc::ptr_eq(&pix.inner, &shared.inner));
        assert_eq!(shared.data()[0], 0xFF00_0000);
    }
}
