//! I/O error types
//!
//! Provides a unified error type for all image I/O operations. Decoder and
//! encoder failures from the `image` crate are mapped into `IoError`
//! variants so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, disk full)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The decoder rejected the data
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The encoder failed
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. pixel depth mismatch)
    #[error("core error: {0}")]
    Core(#[from] inkseg_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

impl IoError {
    /// Map an `image` crate error raised while decoding.
    pub(crate) fn from_decode(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => IoError::Io(e),
            image::ImageError::Unsupported(e) => IoError::UnsupportedFormat(e.to_string()),
            other => IoError::DecodeError(other.to_string()),
        }
    }

    /// Map an `image` crate error raised while encoding.
    pub(crate) fn from_encode(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => IoError::Io(e),
            image::ImageError::Unsupported(e) => IoError::UnsupportedFormat(e.to_string()),
            other => IoError::EncodeError(other.to_string()),
        }
    }
}
