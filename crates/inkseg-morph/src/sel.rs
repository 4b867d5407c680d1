//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological
//! operations. Offsets are measured from the origin `(cx, cy)`: the hit at
//! column `i`, row `j` contributes offset `(i - cx, j - cy)`.

use crate::{MorphError, MorphResult};

/// Element type in a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SelElement {
    /// Don't care - this position is ignored
    #[default]
    DontCare = 0,
    /// Hit - participates in dilation
    Hit = 1,
}

/// Structuring Element (SEL)
#[derive(Debug, Clone)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<SelElement>,
}

impl Sel {
    /// Create an all don't-care structuring element with a centered origin
    pub fn new(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "dimensions must be positive: {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![SelElement::DontCare; width as usize * height as usize],
        })
    }

    /// Create a rectangular "brick" structuring element with all hits
    ///
    /// The origin is `(width / 2, height / 2)`, so even sizes extend one
    /// pixel further toward the top-left than the bottom-right.
    pub fn create_brick(width: u32, height: u32) -> MorphResult<Self> {
        let mut sel = Self::new(width, height)?;
        sel.data.fill(SelElement::Hit);
        Ok(sel)
    }

    /// Create a structuring element from a string pattern
    ///
    /// Rows are separated by newlines; `x` marks a hit and any of `.`,
    /// `o`, or space a don't-care.
    pub fn from_string(pattern: &str, origin_x: u32, origin_y: u32) -> MorphResult<Self> {
        let rows: Vec<&str> = pattern
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let mut sel = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let elem = match ch {
                    'x' | 'X' => SelElement::Hit,
                    '.' | 'o' | ' ' => SelElement::DontCare,
                    other => {
                        return Err(MorphError::InvalidSel(format!(
                            "unexpected character {other:?} in pattern"
                        )));
                    }
                };
                sel.set_element(x as u32, y as u32, elem);
            }
        }
        sel.set_origin(origin_x, origin_y)?;
        Ok(sel)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin x coordinate
    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.cx
    }

    /// Get the origin y coordinate
    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.cy
    }

    /// Set the origin
    pub fn set_origin(&mut self, cx: u32, cy: u32) -> MorphResult<()> {
        if cx >= self.width || cy >= self.height {
            return Err(MorphError::InvalidSel(format!(
                "origin ({cx}, {cy}) outside {}x{}",
                self.width, self.height
            )));
        }
        self.cx = cx;
        self.cy = cy;
        Ok(())
    }

    /// Get an element at (x, y)
    #[inline]
    pub fn get_element(&self, x: u32, y: u32) -> Option<SelElement> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set an element at (x, y); out-of-range positions are ignored
    #[inline]
    pub fn set_element(&mut self, x: u32, y: u32, elem: SelElement) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = elem;
        }
    }

    /// Count the number of hit elements
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&e| e == SelElement::Hit).count()
    }

    /// Check whether every element is a hit
    pub fn is_brick(&self) -> bool {
        self.hit_count() == self.data.len()
    }

    /// Iterate over hit positions relative to origin
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.data
            .iter()
            .enumerate()
            .filter_map(move |(idx, &elem)| {
                if elem == SelElement::Hit {
                    let x = (idx as u32 % width) as i32;
                    let y = (idx as u32 / width) as i32;
                    Some((x - cx, y - cy))
                } else {
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_origin() {
        let sel = Sel::create_brick(8, 3).unwrap();
        assert_eq!((sel.origin_x(), sel.origin_y()), (4, 1));
        assert_eq!(sel.hit_count(), 24);
        assert!(sel.is_brick());
        let (min_dx, max_dx) = sel
            .hit_offsets()
            .fold((i32::MAX, i32::MIN), |(lo, hi), (dx, _)| (lo.min(dx), hi.max(dx)));
        assert_eq!((min_dx, max_dx), (-4, 3));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(Sel::create_brick(0, 3).is_err());
        assert!(Sel::new(3, 0).is_err());
    }

    #[test]
    fn test_from_string() {
        let sel = Sel::from_string("x.x\n.x.\n", 1, 1).unwrap();
        assert_eq!((sel.width(), sel.height()), (3, 2));
        assert_eq!(sel.hit_count(), 3);
        assert!(!sel.is_brick());
        let offsets: Vec<_> = sel.hit_offsets().collect();
        assert_eq!(offsets, vec![(-1, -1), (1, -1), (0, 0)]);
        assert!(Sel::from_string("x?", 0, 0).is_err());
        assert!(Sel::from_string("xx", 5, 0).is_err());
    }
}
