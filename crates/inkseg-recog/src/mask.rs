//! Ink mask production
//!
//! gray -> inverse threshold -> brick dilation. The result is a 1 bpp mask
//! whose foreground blobs are whole words (or word fragments) rather than
//! individual strokes.

use crate::{RecogError, RecogResult};
use inkseg_core::{Pix, PixelDepth};
use inkseg_morph::dilate_brick_iter;
use tracing::trace;

/// Build the dilated ink mask of a line image.
///
/// * `sel_size` - dilation brick `(width, height)`, usually from a
///   [`SizeGroup`](crate::SizeGroup)
/// * `gray_threshold` - gray values `<=` this are ink
/// * `iterations` - number of dilation passes
///
/// Accepts 8 bpp gray, 32 bpp RGB, or an existing 1 bpp mask (which is
/// only dilated).
pub fn make_ink_mask(
    pix: &Pix,
    sel_size: (u32, u32),
    gray_threshold: u8,
    iterations: u32,
) -> RecogResult<Pix> {
    let (sel_w, sel_h) = sel_size;
    if sel_w == 0 || sel_h == 0 {
        return Err(RecogError::InvalidParameter(format!(
            "structuring element must be non-empty: {sel_w}x{sel_h}"
        )));
    }

    let binary = match pix.depth() {
        PixelDepth::Bit1 => pix.clone(),
        _ => pix.convert_to_gray()?.threshold_to_binary_inv(gray_threshold)?,
    };
    trace!(sel_w, sel_h, iterations, "dilating ink mask");

    Ok(dilate_brick_iter(&binary, sel_w, sel_h, iterations)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, samples: &[u8]) -> Pix {
        Pix::from_gray_samples(width, samples.len() as u32 / width, samples).unwrap()
    }

    #[test]
    fn test_threshold_only() {
        let pix = gray(4, &[0, 128, 129, 255]);
        let mask = make_ink_mask(&pix, (1, 1), 128, 2).unwrap();
        assert_eq!(mask.depth(), PixelDepth::Bit1);
        assert_eq!(mask.count_foreground().unwrap(), 2);
        assert_eq!(mask.get_pixel(2, 0), Some(0));
    }

    #[test]
    fn test_dilation_grows_ink() {
        let mut samples = vec![255u8; 15 * 15];
        samples[7 * 15 + 7] = 0;
        let pix = gray(15, &samples);
        let mask = make_ink_mask(&pix, (3, 3), 128, 2).unwrap();
        assert_eq!(mask.count_foreground().unwrap(), 25);
    }

    #[test]
    fn test_rgb_input() {
        let pix = Pix::from_rgb_samples(2, 1, &[20, 20, 20, 250, 250, 250]).unwrap();
        let mask = make_ink_mask(&pix, (1, 1), 128, 1).unwrap();
        assert_eq!(mask.get_pixel(0, 0), Some(1));
        assert_eq!(mask.get_pixel(1, 0), Some(0));
    }

    #[test]
    fn test_empty_sel_rejected() {
        let pix = gray(2, &[0, 0]);
        assert!(matches!(
            make_ink_mask(&pix, (0, 4), 128, 1),
            Err(RecogError::InvalidParameter(_))
        ));
    }
}
