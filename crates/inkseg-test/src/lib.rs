//! inkseg-test - Regression test helpers for inkseg
//!
//! - [`RegParams`] collects comparison results across one regression test
//!   and reports every failure at [`RegParams::cleanup`].
//! - [`PageBuilder`] draws synthetic handwriting pages: solid ink
//!   rectangles standing in for strokes on white paper.
//! - [`ScratchDir`] is a throwaway directory tree for pipeline tests.
//!
//! # Usage
//!
//! ```
//! use inkseg_test::{PageBuilder, RegParams};
//!
//! let page = PageBuilder::new(100, 40).stroke(10, 10, 20, 15).build().unwrap();
//! let mut rp = RegParams::new("usage");
//! rp.compare_values(255.0, page.get_pixel(0, 0).unwrap() as f64, 0.0);
//! rp.compare_values(0.0, page.get_pixel(15, 15).unwrap() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use inkseg_core::{Box, Pix, PixMut, PixelDepth, color};
use inkseg_io::ImageFormat;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for synthetic handwriting pages
///
/// Pages are white (255) with strokes drawn at the ink level (0 by
/// default). Strokes are clipped to the page.
#[derive(Debug, Clone)]
pub struct PageBuilder {
    width: u32,
    height: u32,
    paper: u8,
    ink: u8,
    rgb: bool,
    strokes: Vec<Box>,
}

impl PageBuilder {
    /// Start a blank `width` x `height` page
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            paper: 255,
            ink: 0,
            rgb: false,
            strokes: Vec::new(),
        }
    }

    /// Set the gray level used for strokes
    pub fn ink(mut self, level: u8) -> Self {
        self.ink = level;
        self
    }

    /// Set the gray level of the paper
    pub fn paper(mut self, level: u8) -> Self {
        self.paper = level;
        self
    }

    /// Produce a 32-bit RGB page instead of 8-bit gray
    pub fn rgb(mut self) -> Self {
        self.rgb = true;
        self
    }

    /// Add a solid stroke rectangle
    pub fn stroke(mut self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.strokes.push(Box::new_unchecked(x, y, w, h));
        self
    }

    /// Add a word made of `pieces` strokes spread evenly across `w`
    ///
    /// Adjacent pieces are separated by a gap of `gap` pixels, small enough
    /// that dilation fuses them.
    pub fn word(mut self, x: i32, y: i32, w: i32, h: i32, pieces: i32, gap: i32) -> Self {
        let pieces = pieces.max(1);
        let piece_w = ((w - gap * (pieces - 1)) / pieces).max(1);
        for i in 0..pieces {
            let px = x + i * (piece_w + gap);
            self.strokes.push(Box::new_unchecked(px, y, piece_w, h));
        }
        self
    }

    /// Render the page
    pub fn build(&self) -> TestResult<Pix> {
        let depth = if self.rgb {
            PixelDepth::Bit32
        } else {
            PixelDepth::Bit8
        };
        let level = |v: u8| {
            if self.rgb {
                color::compose_rgb(v, v, v)
            } else {
                u32::from(v)
            }
        };

        let mut pm = PixMut::new(self.width, self.height, depth)?;
        let page = Box::new_unchecked(0, 0, self.width as i32, self.height as i32);
        pm.fill_rect(&page, level(self.paper));
        for stroke in &self.strokes {
            pm.fill_rect(stroke, level(self.ink));
        }
        Ok(pm.into())
    }
}

/// A temporary directory removed on drop
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Create a new empty scratch directory
    pub fn new() -> TestResult<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Root of the scratch tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Resolve a relative path inside the scratch tree
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write raw bytes to a file, creating parent directories
    pub fn write_bytes(&self, rel: impl AsRef<Path>, data: &[u8]) -> TestResult<PathBuf> {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, data)?;
        Ok(path)
    }

    /// Encode `pix` as PNG at `rel`, creating parent directories
    pub fn write_png(&self, rel: impl AsRef<Path>, pix: &Pix) -> TestResult<PathBuf> {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        inkseg_io::write_image(pix, &path, ImageFormat::Png).map_err(|e| {
            TestError::ImageWrite {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(path)
    }
}
