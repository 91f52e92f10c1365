//! Helper functions for integration tests

use wrm_rs::domain::Domain;
use wrm_rs::methods::{standard_curves, SolutionCurve};

/// Evaluate the five reference curves on a domain
pub fn reference_curves(domain: &Domain) -> Vec<SolutionCurve> {
    standard_curves()
        .iter()
        .map(|method| method.evaluate_on(domain))
        .collect()
}

/// Assert two values agree within tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, message: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff < tolerance,
        "{}: got {}, expected {} (diff {}, tolerance {})",
        message,
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Largest element-wise absolute difference between two curves
pub fn max_abs_difference(a: &SolutionCurve, b: &SolutionCurve) -> f64 {
    assert_eq!(a.len(), b.len(), "Dimension mismatch");
    a.values
        .iter()
        .zip(b.values.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
