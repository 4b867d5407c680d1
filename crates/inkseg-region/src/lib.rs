//! inkseg-region - Ink region detection
//!
//! Turns a binary ink mask into the bounding boxes of its connected
//! foreground regions.
//!
//! # Example
//!
//! ```
//! use inkseg_core::{Pix, PixMut, PixelDepth};
//! use inkseg_region::{ConnectivityType, find_connected_components};
//!
//! let mut pix_mut = PixMut::new(100, 100, PixelDepth::Bit1).unwrap();
//! pix_mut.set_pixel(10, 10, 1).unwrap();
//! pix_mut.set_pixel(11, 11, 1).unwrap();
//! pix_mut.set_pixel(50, 50, 1).unwrap();
//! let pix: Pix = pix_mut.into();
//!
//! let components = find_connected_components(&pix, ConnectivityType::EightWay).unwrap();
//! assert_eq!(components.len(), 2);
//! assert_eq!(components[0].pixel_count, 2);
//! ```

pub mod conncomp;
mod error;

pub use conncomp::{
    ConnectedComponent, ConnectivityType, component_boxes, find_connected_components,
    label_connected_components,
};
pub use error::{RegionError, RegionResult};
