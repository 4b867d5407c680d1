//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header,
//! and maps formats to file extensions.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raster formats the reader and writer understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
    /// BMP format
    Bmp,
    /// TIFF format
    Tiff,
}

impl ImageFormat {
    /// Get the canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Tiff => "tif",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "bmp" => Self::Bmp,
            "tif" | "tiff" => Self::Tiff,
            _ => Self::Unknown,
        }
    }

    pub(crate) fn to_image_format(self) -> IoResult<image::ImageFormat> {
        match self {
            Self::Png => Ok(image::ImageFormat::Png),
            Self::Jpeg => Ok(image::ImageFormat::Jpeg),
            Self::Bmp => Ok(image::ImageFormat::Bmp),
            Self::Tiff => Ok(image::ImageFormat::Tiff),
            Self::Unknown => Err(IoError::UnsupportedFormat("unknown".to_string())),
        }
    }
}

/// Magic numbers for image format detection
mod magic {
    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// TIFF little-endian: II 2A 00
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];

    /// TIFF big-endian: MM 00 2A
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];
}

/// Detect image format from a file path
///
/// The header decides; the extension is consulted only when the header
/// matches no known magic number.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut header = [0u8; 12];
    let bytes_read = file.read(&mut header)?;
    let format = detect_format_from_bytes(&header[..bytes_read])?;
    if format != ImageFormat::Unknown {
        return Ok(format);
    }
    Ok(path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(ImageFormat::Unknown, ImageFormat::from_extension))
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    let format = if data.starts_with(magic::PNG) {
        ImageFormat::Png
    } else if data.starts_with(magic::JPEG) {
        ImageFormat::Jpeg
    } else if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
        ImageFormat::Tiff
    } else if data.starts_with(magic::BMP) {
        ImageFormat::Bmp
    } else {
        ImageFormat::Unknown
    };
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_magic() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        assert_eq!(detect_format_from_bytes(&png).unwrap(), ImageFormat::Png);
        assert_eq!(
            detect_format_from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            detect_format_from_bytes(b"BM\0\0").unwrap(),
            ImageFormat::Bmp
        );
        assert_eq!(
            detect_format_from_bytes(b"hello").unwrap(),
            ImageFormat::Unknown
        );
        assert!(detect_format_from_bytes(b"x").is_err());
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(ImageFormat::from_extension("PNG"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("jpeg"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("tiff"), ImageFormat::Tiff);
        assert_eq!(ImageFormat::from_extension("webp"), ImageFormat::Unknown);
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
    }
}
