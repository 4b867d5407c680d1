//! Error types for the pipeline driver

use inkseg_io::IoError;
use inkseg_recog::RecogError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid configuration; nothing has been processed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An input image could not be read or decoded
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// An output file or directory could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// Word segmentation failed on a decoded image
    #[error("segmentation failed: {0}")]
    Segment(#[from] RecogError),
}

impl PipelineError {
    /// True if the run can continue with the next image
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
