//! inkseg-morph - Binary morphology for word segmentation
//!
//! This crate provides:
//!
//! - Structuring elements ([`Sel`]) describing a dilation neighborhood
//! - Binary dilation with arbitrary SELs and a size-independent fast path
//!   for rectangular bricks
//!
//! # Example
//!
//! ```
//! use inkseg_core::{PixMut, PixelDepth};
//! use inkseg_morph::dilate_brick_iter;
//!
//! let mut pm = PixMut::new(20, 20, PixelDepth::Bit1).unwrap();
//! pm.set_pixel(10, 10, 1).unwrap();
//! let grown = dilate_brick_iter(&pm.into(), 3, 3, 2).unwrap();
//! assert_eq!(grown.count_foreground().unwrap(), 25);
//! ```

pub mod binary;
mod error;
pub mod sel;

pub use binary::{dilate, dilate_brick, dilate_brick_iter};
pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};
