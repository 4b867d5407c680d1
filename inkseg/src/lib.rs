//! inkseg - Handwriting word segmentation
//!
//! Splits scanned handwritten line images into one image per word. Ink is
//! thresholded and dilated until the strokes of a word fuse, the connected
//! regions are sorted left to right and merged across small gaps, and the
//! resulting word boxes are cropped from the original image.
//!
//! # Overview
//!
//! - [`io`]: image decoding and encoding
//! - [`morph`]: binary dilation
//! - [`region`]: connected ink regions
//! - [`recog`]: size groups and the per-image word segmenter
//! - [`config`] / [`pipeline`]: directory-tree driver
//!
//! # Example
//!
//! ```
//! use inkseg::{Box, Boxa};
//!
//! let regions: Boxa = vec![
//!     Box::new_unchecked(50, 0, 5, 10),
//!     Box::new_unchecked(0, 0, 5, 10),
//!     Box::new_unchecked(8, 0, 5, 10),
//! ]
//! .into_iter()
//! .collect();
//! let words = regions.sorted_by_x().merge_horizontal(5);
//! assert_eq!(words.get(0), Some(&Box::new_unchecked(0, 0, 13, 10)));
//! assert_eq!(words.len(), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use inkseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use inkseg_io as io;
pub use inkseg_morph as morph;
pub use inkseg_recog as recog;
pub use inkseg_region as region;

pub mod config;
mod error;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{Pipeline, RunSummary, run};
