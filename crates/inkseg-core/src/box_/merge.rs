//! Horizontal box merging
//!
//! Folds a left-to-right ordered run of ink regions into word boxes. Two
//! neighbours belong to the same word when the horizontal gap between the
//! running word box and the next region is at most `space_threshold`
//! pixels. Overlapping regions have a negative gap and always merge.
//!
//! The pass is single and linear: each region is visited once and only the
//! union rectangle of a word is kept, not its constituents.

use super::{Box, Boxa};

/// Running word accumulator for [`Boxa::merge_horizontal`].
///
/// Exposed so callers that receive regions incrementally can fold them
/// without first collecting a [`Boxa`].
#[derive(Debug, Clone)]
pub struct WordAccumulator {
    space_threshold: i64,
    current: Option<Box>,
    finished: Boxa,
}

impl WordAccumulator {
    /// Create an accumulator with the given gap threshold in pixels.
    pub fn new(space_threshold: u32) -> Self {
        Self {
            space_threshold: i64::from(space_threshold),
            current: None,
            finished: Boxa::new(),
        }
    }

    /// Feed the next region in left-to-right order.
    pub fn push(&mut self, next: Box) {
        self.current = Some(match self.current {
            None => next,
            Some(acc) if acc.hgap_to(&next) <= self.space_threshold => acc.union(&next),
            Some(acc) => {
                self.finished.push(acc);
                next
            }
        });
    }

    /// Emit the pending word, if any, and return all finished words.
    pub fn finish(mut self) -> Boxa {
        if let Some(acc) = self.current.take() {
            self.finished.push(acc);
        }
        self.finished
    }
}

impl Boxa {
    /// Merge horizontally adjacent boxes into word boxes.
    ///
    /// The boxes must already be ordered by ascending `x` (see
    /// [`Boxa::sorted_by_x`]); the result is fully determined by that order
    /// and `space_threshold`. A region with no neighbour within the
    /// threshold becomes a word on its own.
    ///
    /// # Example
    ///
    /// ```
    /// use inkseg_core::{Box, Boxa};
    ///
    /// let regions: Boxa = vec![
    ///     Box::new_unchecked(0, 0, 5, 10),
    ///     Box::new_unchecked(8, 0, 5, 10),
    ///     Box::new_unchecked(50, 0, 5, 10),
    /// ]
    /// .into();
    /// let words = regions.merge_horizontal(5);
    /// assert_eq!(
    ///     words.boxes(),
    ///     &[Box::new_unchecked(0, 0, 13, 10), Box::new_unchecked(50, 0, 5, 10)]
    /// );
    /// ```
    pub fn merge_horizontal(&self, space_threshold: u32) -> Boxa {
        let mut acc = WordAccumulator::new(space_threshold);
        for b in &self.boxes {
            acc.push(*b);
        }
        acc.finish()
    }
}
