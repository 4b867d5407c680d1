//! Regression test parameters and comparisons

use inkseg_core::{Boxa, Pix};

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// last comparison, and every failure recorded so far. Comparisons never
/// panic; call [`RegParams::cleanup`] at the end and assert on its result
/// so that all failures of a run are reported together.
pub struct RegParams {
    /// Name of the test (e.g., "wordseg")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////   {}_reg   ///////////////", test_name);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "value comparison: difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two box sequences for exact equality, including order
    pub fn compare_boxa(&mut self, expected: &Boxa, actual: &Boxa) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            self.fail(format!(
                "boxa comparison: expected {} boxes, got {}\n\
                 expected = {:?}\n  actual = {:?}",
                expected.len(),
                actual.len(),
                expected.boxes(),
                actual.boxes()
            ));
            return false;
        }

        for (i, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
            if e != a {
                self.fail(format!("boxa comparison: box {} differs: expected {:?}, got {:?}", i, e, a));
                return false;
            }
        }
        true
    }

    /// Compare two Pix images for exact equality
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if pix1.width() != pix2.width()
            || pix1.height() != pix2.height()
            || pix1.depth() != pix2.depth()
        {
            self.fail("pix comparison: dimension mismatch".to_string());
            return false;
        }

        for y in 0..pix1.height() {
            for x in 0..pix1.width() {
                if pix1.get_pixel(x, y) != pix2.get_pixel(x, y) {
                    self.fail(format!("pix comparison: pixel mismatch at ({}, {})", x, y));
                    return false;
                }
            }
        }

        true
    }

    /// Compare two byte strings
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            self.fail(format!(
                "string comparison: sizes {} vs {}",
                data1.len(),
                data2.len()
            ));
            false
        } else {
            true
        }
    }

    fn fail(&mut self, detail: String) {
        let msg = format!(
            "Failure in {}_reg, index {}: {}",
            self.test_name, self.index, detail
        );
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// Returns `true` if every comparison passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkseg_core::Box;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert_eq!(rp.index(), 2);
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_boxa() {
        let a: Boxa = vec![Box::new_unchecked(0, 0, 5, 5), Box::new_unchecked(9, 0, 5, 5)].into();
        let sorted = a.sorted_by_x();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_boxa(&a, &sorted));

        let b: Boxa = vec![Box::new_unchecked(9, 0, 5, 5), Box::new_unchecked(0, 0, 5, 5)].into();
        assert!(!rp.compare_boxa(&a, &b));
        assert!(!rp.compare_boxa(&a, &Boxa::new()));
        assert!(!rp.cleanup());
    }
}
