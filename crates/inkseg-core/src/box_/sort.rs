//! Box ordering
//!
//! Left-to-right ordering of raw regions ahead of merging.

use super::Boxa;

impl Boxa {
    /// Return a copy of the boxes ordered by ascending `x`.
    ///
    /// The sort is stable: boxes sharing an `x` keep their detection order,
    /// which makes the subsequent merge deterministic. An empty input yields
    /// an empty output.
    pub fn sorted_by_x(&self) -> Boxa {
        if self.boxes.is_empty() {
            return Boxa::new();
        }
        let mut boxes = self.boxes.clone();
        boxes.sort_by_key(|b| b.x);
        Boxa { boxes }
    }
}

#[cfg(test)]
mod tests {
    use crate::Box;
    use crate::Boxa;

    #[test]
    fn test_sort_empty() {
        let sorted = Boxa::new().sorted_by_x();
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_sort_orders_by_x() {
        let boxa: Boxa = vec![
            Box::new_unchecked(50, 0, 5, 10),
            Box::new_unchecked(0, 3, 5, 10),
            Box::new_unchecked(8, 1, 5, 10),
        ]
        .into();
        let xs: Vec<i32> = boxa.sorted_by_x().iter().map(|b| b.x).collect();
        assert_eq!(xs, vec![0, 8, 50]);
        // Source untouched
        assert_eq!(boxa.get(0).unwrap().x, 50);
    }

    #[test]
    fn test_sort_is_stable_for_equal_x() {
        let boxa: Boxa = vec![
            Box::new_unchecked(10, 30, 4, 4),
            Box::new_unchecked(2, 0, 4, 4),
            Box::new_unchecked(10, 10, 4, 4),
            Box::new_unchecked(10, 20, 4, 4),
        ]
        .into();
        let sorted = boxa.sorted_by_x();
        let ys: Vec<i32> = sorted.iter().map(|b| b.y).collect();
        assert_eq!(ys, vec![0, 30, 10, 20]);
    }
}
