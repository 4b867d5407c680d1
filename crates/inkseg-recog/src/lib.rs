//! inkseg-recog - Word segmentation of handwritten line images
//!
//! This crate ties the lower layers together for one image:
//!
//! - **Size groups**: [`SizeGroup`] and [`GroupTable`] map a dataset folder
//!   to the dilation brick used for its images
//! - **Ink masks**: [`make_ink_mask`] thresholds and dilates a line image
//! - **Word boxes**: [`WordSegmenter`] detects, sorts, merges and filters
//!   ink regions into word boxes
//!
//! # Quick Start
//!
//! ```
//! use inkseg_core::{Box, PixMut, PixelDepth};
//! use inkseg_recog::{SizeGroup, WordSegOptions, WordSegmenter};
//!
//! // A white line with one dark 40x20 word
//! let mut pm = PixMut::new(120, 40, PixelDepth::Bit8).unwrap();
//! pm.fill_rect(&Box::new_unchecked(0, 0, 120, 40), 255);
//! pm.fill_rect(&Box::new_unchecked(30, 10, 40, 20), 0);
//!
//! let segmenter = WordSegmenter::new(WordSegOptions::default()).unwrap();
//! let result = segmenter.segment(&pm.into(), SizeGroup::ESmall).unwrap();
//! assert_eq!(result.words.len(), 1);
//! ```

mod error;
pub mod group;
pub mod mask;
pub mod wordseg;

pub use error::{RecogError, RecogResult};
pub use group::{GroupMembership, GroupTable, SizeGroup};
pub use mask::make_ink_mask;
pub use wordseg::{WordSegOptions, WordSegResult, WordSegmenter};
