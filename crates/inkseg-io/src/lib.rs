//! inkseg-io - Image I/O for inkseg
//!
//! Reads raster files into [`Pix`] and writes [`Pix`] back out, using the
//! `image` crate for the codecs.
//!
//! - Decoded images without color become 8-bit gray; everything else
//!   becomes 32-bit RGB (alpha is dropped).
//! - 1-bit masks are written as 8-bit gray with ink black.
//!
//! # Example
//!
//! ```
//! use inkseg_core::{Pix, PixelDepth};
//! use inkseg_io::{ImageFormat, read_image_mem, write_image_mem};
//!
//! let pix = Pix::new(8, 4, PixelDepth::Bit8).unwrap();
//! let bytes = write_image_mem(&pix, ImageFormat::Png).unwrap();
//! let back = read_image_mem(&bytes).unwrap();
//! assert_eq!((back.width(), back.height()), (8, 4));
//! ```

mod error;
pub mod format;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use image::{DynamicImage, GrayImage, RgbImage};
use inkseg_core::{Pix, PixelDepth};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// The format is guessed from the file contents, not the extension.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened and
/// [`IoError::DecodeError`] / [`IoError::UnsupportedFormat`] if it cannot
/// be decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let reader = image::ImageReader::open(path.as_ref())?
        .with_guessed_format()
        .map_err(IoError::Io)?;
    let img = reader.decode().map_err(IoError::from_decode)?;
    dynamic_to_pix(&img)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let img = image::load_from_memory(data).map_err(IoError::from_decode)?;
    dynamic_to_pix(&img)
}

/// Write an image to a file path.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns [`IoError::Io`] on filesystem failures (permissions, disk full)
/// and [`IoError::EncodeError`] if encoding fails.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_image_to(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into an in-memory buffer.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_image_to(pix, &mut cursor, format)?;
    Ok(cursor.into_inner())
}

fn write_image_to<W: Write + Seek>(pix: &Pix, writer: &mut W, format: ImageFormat) -> IoResult<()> {
    let fmt = format.to_image_format()?;
    let img = pix_to_dynamic(pix)?;
    img.write_to(writer, fmt).map_err(IoError::from_encode)
}

fn dynamic_to_pix(img: &DynamicImage) -> IoResult<Pix> {
    let (width, height) = (img.width(), img.height());
    if img.color().has_color() {
        let rgb = img.to_rgb8();
        Ok(Pix::from_rgb_samples(width, height, rgb.as_raw())?)
    } else {
        let gray = img.to_luma8();
        Ok(Pix::from_gray_samples(width, height, gray.as_raw())?)
    }
}

fn pix_to_dynamic(pix: &Pix) -> IoResult<DynamicImage> {
    let (width, height) = (pix.width(), pix.height());
    let invalid = || IoError::InvalidData(format!("sample buffer does not fit {width}x{height}"));
    match pix.depth() {
        PixelDepth::Bit32 => {
            let buf = RgbImage::from_raw(width, height, pix.to_rgb_samples()?).ok_or_else(invalid)?;
            Ok(DynamicImage::ImageRgb8(buf))
        }
        PixelDepth::Bit8 => {
            let buf =
                GrayImage::from_raw(width, height, pix.to_gray_samples()?).ok_or_else(invalid)?;
            Ok(DynamicImage::ImageLuma8(buf))
        }
        PixelDepth::Bit1 => {
            let gray = pix.convert_to_gray()?;
            let buf =
                GrayImage::from_raw(width, height, gray.to_gray_samples()?).ok_or_else(invalid)?;
            Ok(DynamicImage::ImageLuma8(buf))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_gray_roundtrip() {
        let samples: Vec<u8> = (0..24).map(|v| (v * 10) as u8).collect();
        let pix = Pix::from_gray_samples(6, 4, &samples).unwrap();
        let bytes = write_image_mem(&pix, ImageFormat::Png).unwrap();
        assert_eq!(detect_format_from_bytes(&bytes).unwrap(), ImageFormat::Png);
        let back = read_image_mem(&bytes).unwrap();
        assert_eq!(back.depth(), PixelDepth::Bit8);
        assert_eq!(back.to_gray_samples().unwrap(), samples);
    }

    #[test]
    fn test_png_rgb_keeps_color() {
        let pix = Pix::from_rgb_samples(2, 1, &[255, 0, 0, 0, 0, 255]).unwrap();
        let back = read_image_mem(&write_image_mem(&pix, ImageFormat::Png).unwrap()).unwrap();
        assert_eq!(back.depth(), PixelDepth::Bit32);
        assert_eq!(back.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(back.get_rgb(1, 0), Some((0, 0, 255)));
    }

    #[test]
    fn test_binary_written_as_gray() {
        let mask = Pix::from_gray_samples(2, 1, &[0, 255])
            .unwrap()
            .threshold_to_binary_inv(128)
            .unwrap();
        let back = read_image_mem(&write_image_mem(&mask, ImageFormat::Png).unwrap()).unwrap();
        assert_eq!(back.to_gray_samples().unwrap(), vec![0, 255]);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let pix = Pix::new(1, 1, PixelDepth::Bit8).unwrap();
        assert!(matches!(
            write_image_mem(&pix, ImageFormat::Unknown),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        assert!(read_image_mem(b"definitely not an image").is_err());
    }
}
