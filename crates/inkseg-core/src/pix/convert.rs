//! Depth conversion and thresholding
//!
//! - Raw sample import/export for the I/O layer
//! - RGB to grayscale with BT.601 luma weights
//! - Inverse binary thresholding: dark (ink) pixels become foreground

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Build an 8-bit image from row-major gray samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `samples.len() != width * height`.
    pub fn from_gray_samples(width: u32, height: u32, samples: &[u8]) -> Result<Pix> {
        check_len(width, height, 1, samples.len())?;
        let mut pm = PixMut::new(width, height, PixelDepth::Bit8)?;
        for (i, &v) in samples.iter().enumerate() {
            let (x, y) = (i as u32 % width, i as u32 / width);
            pm.set_pixel_unchecked(x, y, u32::from(v));
        }
        Ok(pm.into())
    }

    /// Build a 32-bit image from row-major interleaved RGB samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `samples.len() != width * height * 3`.
    pub fn from_rgb_samples(width: u32, height: u32, samples: &[u8]) -> Result<Pix> {
        check_len(width, height, 3, samples.len())?;
        let mut pm = PixMut::new(width, height, PixelDepth::Bit32)?;
        for (i, px) in samples.chunks_exact(3).enumerate() {
            let (x, y) = (i as u32 % width, i as u32 / width);
            pm.set_pixel_unchecked(x, y, color::compose_rgb(px[0], px[1], px[2]));
        }
        Ok(pm.into())
    }

    /// Export an 8-bit image as row-major gray samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] unless the image is 8 bpp.
    pub fn to_gray_samples(&self) -> Result<Vec<u8>> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        Ok(self.pixels().map(|v| v as u8).collect())
    }

    /// Export a 32-bit image as row-major interleaved RGB samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] unless the image is 32 bpp.
    pub fn to_rgb_samples(&self) -> Result<Vec<u8>> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let mut out = Vec::with_capacity(self.width() as usize * self.height() as usize * 3);
        for v in self.pixels() {
            let (r, g, b) = color::extract_rgb(v);
            out.extend_from_slice(&[r, g, b]);
        }
        Ok(out)
    }

    /// Convert to 8-bit grayscale.
    ///
    /// - 8 bpp: returned as a shared clone
    /// - 32 bpp: BT.601 luma
    /// - 1 bpp: foreground becomes black (0), background white (255)
    pub fn convert_to_gray(&self) -> Result<Pix> {
        match self.depth() {
            PixelDepth::Bit8 => Ok(self.clone()),
            PixelDepth::Bit32 => self.map_to_gray(|v| {
                let (r, g, b) = color::extract_rgb(v);
                color::luma(r, g, b)
            }),
            PixelDepth::Bit1 => self.map_to_gray(|v| if v == 0 { 255 } else { 0 }),
        }
    }

    /// Inverse binary threshold of an 8-bit image.
    ///
    /// Pixels with value `<= thresh` become foreground (1); brighter pixels
    /// become background (0). With dark ink on light paper this marks the
    /// strokes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] unless the image is 8 bpp.
    pub fn threshold_to_binary_inv(&self, thresh: u8) -> Result<Pix> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let mut out = PixMut::new(self.width(), self.height(), PixelDepth::Bit1)?;
        let thresh = u32::from(thresh);
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.get_pixel_unchecked(x, y) <= thresh {
                    out.set_pixel_unchecked(x, y, 1);
                }
            }
        }
        Ok(out.into())
    }

    /// Count foreground pixels of a 1-bit image.
    pub fn count_foreground(&self) -> Result<u64> {
        if self.depth() != PixelDepth::Bit1 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        Ok(self.pixels().filter(|&v| v != 0).count() as u64)
    }

    fn map_to_gray(&self, f: impl Fn(u32) -> u8) -> Result<Pix> {
        let mut out = PixMut::new(self.width(), self.height(), PixelDepth::Bit8)?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.set_pixel_unchecked(x, y, u32::from(f(self.get_pixel_unchecked(x, y))));
            }
        }
        Ok(out.into())
    }

    /// Iterate pixel values in row-major order.
    fn pixels(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.height())
            .flat_map(move |y| (0..self.width()).map(move |x| self.get_pixel_unchecked(x, y)))
    }
}

fn check_len(width: u32, height: u32, spp: usize, actual: usize) -> Result<()> {
    let expected = width as usize * height as usize * spp;
    if expected != actual {
        return Err(Error::BufferSize { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_samples_roundtrip() {
        let samples: Vec<u8> = (0..12).map(|v| v * 20).collect();
        let pix = Pix::from_gray_samples(4, 3, &samples).unwrap();
        assert_eq!(pix.get_pixel(3, 2), Some(220));
        assert_eq!(pix.to_gray_samples().unwrap(), samples);
    }

    #[test]
    fn test_sample_length_mismatch() {
        assert!(Pix::from_gray_samples(4, 3, &[0; 11]).is_err());
        assert!(Pix::from_rgb_samples(2, 2, &[0; 11]).is_err());
    }

    #[test]
    fn test_rgb_to_gray() {
        let pix = Pix::from_rgb_samples(3, 1, &[255, 255, 255, 0, 0, 0, 255, 0, 0]).unwrap();
        let gray = pix.convert_to_gray().unwrap();
        assert_eq!(gray.depth(), PixelDepth::Bit8);
        assert_eq!(gray.to_gray_samples().unwrap(), vec![255, 0, 76]);
    }

    #[test]
    fn test_threshold_inverse_boundary() {
        let pix = Pix::from_gray_samples(4, 1, &[0, 128, 129, 255]).unwrap();
        let bin = pix.threshold_to_binary_inv(128).unwrap();
        assert_eq!(bin.depth(), PixelDepth::Bit1);
        let vals: Vec<u32> = (0..4).map(|x| bin.get_pixel(x, 0).unwrap()).collect();
        assert_eq!(vals, vec![1, 1, 0, 0]);
        assert_eq!(bin.count_foreground().unwrap(), 2);
    }

    #[test]
    fn test_threshold_requires_gray() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        assert!(pix.threshold_to_binary_inv(128).is_err());
    }

    #[test]
    fn test_binary_to_gray() {
        let bin = Pix::from_gray_samples(2, 1, &[0, 255])
            .unwrap()
            .threshold_to_binary_inv(128)
            .unwrap();
        let gray = bin.convert_to_gray().unwrap();
        assert_eq!(gray.to_gray_samples().unwrap(), vec![0, 255]);
    }
}
