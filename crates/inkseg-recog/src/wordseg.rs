//! Word segmentation of one line image
//!
//! [`WordSegmenter::segment`] runs the full per-image chain:
//!
//! 1. ink mask (gray, inverse threshold, brick dilation)
//! 2. connected regions of the mask
//! 3. drop degenerate regions
//! 4. sort left to right
//! 5. merge neighbours whose horizontal gap is within the space threshold
//! 6. keep words strictly larger than the minimum size
//!
//! Each step's output is kept in [`WordSegResult`] so callers can inspect
//! what was merged away or filtered out.

use crate::{RecogError, RecogResult, SizeGroup, make_ink_mask};
use inkseg_core::{Boxa, Pix};
use inkseg_region::{ConnectivityType, component_boxes};
use tracing::{debug, warn};

/// Options for word segmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSegOptions {
    /// Largest horizontal gap, in pixels, still merged into one word (default: 10)
    pub space_threshold: u32,
    /// Words must be strictly wider than this (default: 10)
    pub min_word_width: i32,
    /// Words must be strictly taller than this (default: 10)
    pub min_word_height: i32,
    /// Gray values `<=` this are ink (default: 128)
    pub gray_threshold: u8,
    /// Number of dilation passes (default: 2)
    pub dilate_iterations: u32,
    /// Connectivity used for region detection (default: 8-way)
    pub connectivity: ConnectivityType,
}

impl Default for WordSegOptions {
    fn default() -> Self {
        Self {
            space_threshold: 10,
            min_word_width: 10,
            min_word_height: 10,
            gray_threshold: 128,
            dilate_iterations: 2,
            connectivity: ConnectivityType::EightWay,
        }
    }
}

impl WordSegOptions {
    /// Set the merge gap threshold
    pub fn with_space_threshold(mut self, threshold: u32) -> Self {
        self.space_threshold = threshold;
        self
    }

    /// Set the minimum word size (both bounds are exclusive)
    pub fn with_min_word_size(mut self, width: i32, height: i32) -> Self {
        self.min_word_width = width;
        self.min_word_height = height;
        self
    }

    /// Set the ink threshold
    pub fn with_gray_threshold(mut self, threshold: u8) -> Self {
        self.gray_threshold = threshold;
        self
    }

    /// Set the number of dilation passes
    pub fn with_dilate_iterations(mut self, iterations: u32) -> Self {
        self.dilate_iterations = iterations;
        self
    }

    /// Check the options before use
    pub fn validate(&self) -> RecogResult<()> {
        if self.dilate_iterations == 0 {
            return Err(RecogError::InvalidParameter(
                "dilate_iterations must be at least 1".to_string(),
            ));
        }
        if self.min_word_width < 0 || self.min_word_height < 0 {
            return Err(RecogError::InvalidParameter(format!(
                "minimum word size must be non-negative: {}x{}",
                self.min_word_width, self.min_word_height
            )));
        }
        Ok(())
    }
}

/// Intermediate and final boxes of one segmentation run
#[derive(Debug, Clone, Default)]
pub struct WordSegResult {
    /// Valid regions in detection order
    pub regions: Boxa,
    /// Regions after merging, left to right
    pub merged: Boxa,
    /// Accepted words, left to right
    pub words: Boxa,
    /// Number of degenerate regions dropped before sorting
    pub degenerate: usize,
}

/// Segments line images into word boxes
#[derive(Debug, Clone, Default)]
pub struct WordSegmenter {
    options: WordSegOptions,
}

impl WordSegmenter {
    /// Create a segmenter, validating the options
    pub fn new(options: WordSegOptions) -> RecogResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Get the options
    pub fn options(&self) -> &WordSegOptions {
        &self.options
    }

    /// Segment a line image using the brick of `group`
    pub fn segment(&self, pix: &Pix, group: SizeGroup) -> RecogResult<WordSegResult> {
        let mask = make_ink_mask(
            pix,
            group.sel_size(),
            self.options.gray_threshold,
            self.options.dilate_iterations,
        )?;
        self.segment_mask(&mask)
    }

    /// Segment an already dilated 1 bpp ink mask
    pub fn segment_mask(&self, mask: &Pix) -> RecogResult<WordSegResult> {
        let detected = component_boxes(mask, self.options.connectivity)?;
        Ok(self.words_from_regions(&detected))
    }

    /// Turn raw detected regions into accepted word boxes
    ///
    /// Never fails: an empty or fully degenerate input gives an empty
    /// result.
    pub fn words_from_regions(&self, detected: &Boxa) -> WordSegResult {
        let (regions, degenerate) = detected.split_degenerate();
        for b in &degenerate {
            warn!(x = b.x, y = b.y, w = b.w, h = b.h, "skipping degenerate region");
        }

        let merged = regions
            .sorted_by_x()
            .merge_horizontal(self.options.space_threshold);
        let words = merged.select_by_min_size(self.options.min_word_width, self.options.min_word_height);
        debug!(
            regions = regions.len(),
            merged = merged.len(),
            words = words.len(),
            "segmented line"
        );

        WordSegResult {
            regions,
            merged,
            words,
            degenerate: degenerate.len(),
        }
    }
}
