//! Box selection by size and validity
//!
//! Indicator-based filtering, plus the two filters the word segmenter
//! applies: degenerate-region rejection before sorting and the minimum
//! word size after merging.

use super::{Box, Boxa};

// ---- Types ----

/// Comparison applied between a box dimension and a reference value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRelation {
    /// Dimension strictly less than the reference
    LessThan,
    /// Dimension less than or equal to the reference
    LessThanOrEqual,
    /// Dimension strictly greater than the reference
    GreaterThan,
    /// Dimension greater than or equal to the reference
    GreaterThanOrEqual,
}

impl SizeRelation {
    #[inline]
    fn holds(self, value: i32, reference: i32) -> bool {
        match self {
            Self::LessThan => value < reference,
            Self::LessThanOrEqual => value <= reference,
            Self::GreaterThan => value > reference,
            Self::GreaterThanOrEqual => value >= reference,
        }
    }
}

/// Selection mode for size-based indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSelectType {
    /// Select based on width only
    Width,
    /// Select based on height only
    Height,
    /// Select if either width or height satisfies the relation
    Either,
    /// Select only if both width and height satisfy the relation
    Both,
}

// ---- Boxa methods ----

impl Boxa {
    /// Generate a boolean indicator based on box dimensions.
    ///
    /// Each element is `true` if the box satisfies the size criteria.
    pub fn make_size_indicator(
        &self,
        width: i32,
        height: i32,
        select_type: SizeSelectType,
        relation: SizeRelation,
    ) -> Vec<bool> {
        self.boxes
            .iter()
            .map(|b| {
                let w_ok = relation.holds(b.w, width);
                let h_ok = relation.holds(b.h, height);
                match select_type {
                    SizeSelectType::Width => w_ok,
                    SizeSelectType::Height => h_ok,
                    SizeSelectType::Either => w_ok || h_ok,
                    SizeSelectType::Both => w_ok && h_ok,
                }
            })
            .collect()
    }

    /// Filter boxes using a boolean indicator array.
    ///
    /// Returns boxes where the indicator is `true`; missing indicator
    /// entries count as `false`.
    pub fn select_with_indicator(&self, indicator: &[bool]) -> Boxa {
        self.boxes
            .iter()
            .zip(indicator)
            .filter(|&(_, &keep)| keep)
            .map(|(b, _)| *b)
            .collect()
    }

    /// Keep only boxes whose width AND height strictly exceed the minimums.
    ///
    /// A word of exactly `min_w` wide or `min_h` tall is dropped.
    pub fn select_by_min_size(&self, min_w: i32, min_h: i32) -> Boxa {
        let indicator = self.make_size_indicator(
            min_w,
            min_h,
            SizeSelectType::Both,
            SizeRelation::GreaterThan,
        );
        self.select_with_indicator(&indicator)
    }

    /// Split into `(valid, degenerate)` where degenerate boxes have a zero
    /// or negative width or height. Order is preserved in both halves.
    pub fn split_degenerate(&self) -> (Boxa, Vec<Box>) {
        let (valid, degenerate): (Vec<Box>, Vec<Box>) =
            self.boxes.iter().partition(|b| b.is_valid());
        (Boxa::from(valid), degenerate)
    }
}

// ---- Tests ----

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_boxa() -> Boxa {
        vec![
            Box::new_unchecked(10, 20, 100, 50),
            Box::new_unchecked(30, 40, 200, 80),
            Box::new_unchecked(50, 60, 50, 150),
            Box::new_unchecked(70, 80, 300, 200),
        ]
        .into()
    }

    #[test]
    fn test_make_size_indicator_width_gt() {
        let boxa = sample_boxa();
        let ind =
            boxa.make_size_indicator(100, 0, SizeSelectType::Width, SizeRelation::GreaterThan);
        assert_eq!(ind, vec![false, true, false, true]);
    }

    #[test]
    fn test_make_size_indicator_both_gt() {
        let boxa = sample_boxa();
        let ind =
            boxa.make_size_indicator(100, 100, SizeSelectType::Both, SizeRelation::GreaterThan);
        // Only box 3 (300x200) has both > 100
        assert_eq!(ind, vec![false, false, false, true]);
    }

    #[test]
    fn test_make_size_indicator_either_ge() {
        let boxa = sample_boxa();
        let ind = boxa.make_size_indicator(
            100,
            100,
            SizeSelectType::Either,
            SizeRelation::GreaterThanOrEqual,
        );
        assert_eq!(ind, vec![true, true, true, true]);
    }

    #[test]
    fn test_select_with_short_indicator() {
        let boxa = sample_boxa();
        let out = boxa.select_with_indicator(&[true, false]);
        assert_eq!(out.len(), 1);
        assert_eq!(out.get(0).unwrap().x, 10);
    }

    #[test]
    fn test_select_by_min_size_is_strict() {
        let boxa: Boxa = vec![
            Box::new_unchecked(0, 0, 13, 10),
            Box::new_unchecked(50, 0, 5, 10),
            Box::new_unchecked(70, 0, 11, 11),
            Box::new_unchecked(90, 0, 10, 40),
        ]
        .into();
        let kept = boxa.select_by_min_size(10, 10);
        assert_eq!(kept.boxes(), &[Box::new_unchecked(70, 0, 11, 11)]);
    }

    #[test]
    fn test_split_degenerate() {
        let boxa: Boxa = vec![
            Box::new_unchecked(0, 0, 3, 3),
            Box::new_unchecked(5, 0, 0, 3),
            Box::new_unchecked(9, 0, 3, -1),
            Box::new_unchecked(12, 0, 1, 1),
        ]
        .into();
        let (valid, bad) = boxa.split_degenerate();
        assert_eq!(valid.len(), 2);
        assert_eq!(valid.get(1).unwrap().x, 12);
        assert_eq!(bad.len(), 2);
    }
}
