//! Rectangle clipping
//!
//! Extraction of rectangular sub-images, used to cut word crops out of
//! the source line image.

use super::{Pix, PixMut};
use crate::Box;
use crate::error::{Error, Result};

impl Pix {
    /// Extract a rectangular sub-region from the image.
    ///
    /// The rectangle is clipped to the image bounds first. The output keeps
    /// the depth and samples-per-pixel of the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BoxOutsideImage`] if the rectangle does not
    /// intersect the image.
    pub fn clip_rectangle(&self, rect: &Box) -> Result<Pix> {
        let clipped = rect
            .clip(self.width() as i32, self.height() as i32)
            .ok_or(Error::BoxOutsideImage {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
                width: self.width(),
                height: self.height(),
            })?;

        let (x0, y0) = (clipped.x as u32, clipped.y as u32);
        let (w, h) = (clipped.w as u32, clipped.h as u32);
        let mut out = PixMut::new(w, h, self.depth())?;

        for y in 0..h {
            for x in 0..w {
                let val = self.get_pixel_unchecked(x0 + x, y0 + y);
                out.set_pixel_unchecked(x, y, val);
            }
        }
        Ok(out.into())
    }
}
