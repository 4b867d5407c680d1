//! Error types for inkseg-recog

use thiserror::Error;

/// Errors that can occur during word segmentation
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] inkseg_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] inkseg_morph::MorphError),

    /// Region detection error
    #[error("region error: {0}")]
    Region(#[from] inkseg_region::RegionError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Group name not in the size table
    #[error("unknown size group: {0}")]
    UnknownGroup(String),

    /// A folder is listed under more than one size group
    #[error("folder '{folder}' is listed in both '{first}' and '{second}'")]
    DuplicateFolder {
        folder: String,
        first: &'static str,
        second: &'static str,
    },
}

/// Result type for word segmentation operations
pub type RecogResult<T> = Result<T, RecogError>;
