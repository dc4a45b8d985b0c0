//! Regression test parameters and operations

use geogrid_core::{Element, Matrix};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check every comparison (default)
    #[default]
    Compare,
    /// Check every comparison and print displayed matrices
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "scale")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Installs a test-mode `env_logger` (once per process) so that
    /// `RUST_LOG=debug` shows the library log output for the test.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        let _ = env_logger::builder().is_test(true).try_init();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);
        log::debug!("starting regression test {}_reg", test_name);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff.is_nan() || diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two matrices for exact equality of shape and contents
    pub fn compare_matrix<T: Element>(&mut self, expected: &Matrix<T>, actual: &Matrix<T>) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            let msg = format!(
                "Failure in {}_reg: matrix comparison for index {} - dimension mismatch: \
                 expected {:?}, got {:?}",
                self.test_name,
                self.index,
                expected.dimensions(),
                actual.dimensions()
            );
            self.record_failure(msg);
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let e = expected.get_unchecked(x, y);
                let a = actual.get_unchecked(x, y);
                if e != a {
                    let msg = format!(
                        "Failure in {}_reg: matrix comparison for index {} - mismatch at ({}, {}): \
                         expected {:?}, got {:?}",
                        self.test_name, self.index, x, y, e, a
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two matrices cell by cell, allowing `delta` difference
    ///
    /// Both matrices are compared through their `f64` values, so integer
    /// and floating-point matrices can be checked against each other.
    pub fn compare_matrix_approx<T: Element, U: Element>(
        &mut self,
        expected: &Matrix<T>,
        actual: &Matrix<U>,
        delta: f64,
    ) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            let msg = format!(
                "Failure in {}_reg: matrix comparison for index {} - dimension mismatch: \
                 expected {:?}, got {:?}",
                self.test_name,
                self.index,
                expected.dimensions(),
                actual.dimensions()
            );
            self.record_failure(msg);
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let e = expected.get_unchecked(x, y).to_f64();
                let a = actual.get_unchecked(x, y).to_f64();
                let diff = (e - a).abs();
                if diff.is_nan() || diff > delta {
                    let msg = format!(
                        "Failure in {}_reg: matrix comparison for index {} - mismatch at ({}, {}): \
                         expected {}, got {}, allowed delta = {}",
                        self.test_name, self.index, x, y, e, a, delta
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Print a matrix in display mode
    pub fn display_matrix<T: Element>(&self, label: &str, m: &Matrix<T>) {
        if !self.display() {
            return;
        }
        eprintln!("  {} ({}x{}, {}):", label, m.width(), m.height(), m.element_type());
        for row in m.rows() {
            eprintln!("    {:?}", row);
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
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

    /// Check if all tests have passed so far
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

    #[test]
    fn test_mode_from_env() {
        // Can't safely mutate the environment here; just check the result
        let mode = RegTestMode::from_env();
        assert!(matches!(mode, RegTestMode::Compare | RegTestMode::Display));
    }

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
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
    fn test_compare_values_nan_fails() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(1.0, f64::NAN, 10.0));
    }

    #[test]
    fn test_compare_matrix() {
        let mut rp = RegParams::new("test");
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1, 2], vec![3, 5]]).unwrap();
        let c = Matrix::from_rows(vec![vec![1, 2, 3, 4]]).unwrap();
        assert!(rp.compare_matrix(&a, &a.clone()));
        assert!(!rp.compare_matrix(&a, &b));
        assert!(!rp.compare_matrix(&a, &c));
        assert_eq!(rp.index(), 3);
    }

    #[test]
    fn test_compare_matrix_approx_mixed_types() {
        let mut rp = RegParams::new("test");
        let a = Matrix::from_rows(vec![vec![1i32, 2]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1.00001f64, 1.99999]]).unwrap();
        assert!(rp.compare_matrix_approx(&a, &b, 1e-4));
        assert!(!rp.compare_matrix_approx(&a, &b, 1e-6));
    }
}
