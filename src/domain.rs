//! Uniform evaluation grid
//!
//! The domain is the shared x-axis of every solution curve: an ordered,
//! immutable sequence of equally spaced points spanning [0, L] inclusive.
//! It is built once at the start of the pipeline and read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use wrm_rs::domain::Domain;
//!
//! let domain = Domain::uniform(1.0, 101);
//! assert_eq!(domain.len(), 101);
//! assert_eq!(domain.points()[0], 0.0);
//! assert_eq!(domain.points()[100], 1.0);
//! ```

use nalgebra::DVector;

/// Default system length [0, L]
pub const DEFAULT_LENGTH: f64 = 1.0;

/// Default number of discretization points
pub const DEFAULT_SAMPLES: usize = 101;

/// Ordered, immutable grid of evaluation points over [0, L]
///
/// All solution curves are evaluated on the same `Domain`, so `curve[i]`
/// at `domain.points()[i]` is always a valid correspondence.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    length: f64,
    points: DVector<f64>,
}

impl Domain {
    /// Create a uniform grid of `samples` points spanning [0, `length`]
    ///
    /// Spacing is constant and equal to `length / (samples - 1)`. The last
    /// point is pinned to `length` exactly rather than accumulated, so the
    /// endpoints carry no rounding drift.
    ///
    /// # Arguments
    ///
    /// * `length` - Physical extent L of the system (L > 0)
    /// * `samples` - Number of grid points N (N >= 2; smaller N is not guarded)
    pub fn uniform(length: f64, samples: usize) -> Self {
        let step = length / (samples - 1) as f64;
        let points = DVector::from_fn(samples, |i, _| {
            if i == samples - 1 {
                length
            } else {
                i as f64 * step
            }
        });

        Self { length, points }
    }

    /// Grid points in ascending order
    pub fn points(&self) -> &DVector<f64> {
        &self.points
    }

    /// Physical extent L
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the grid holds no points (never the case for `uniform`)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Constant spacing between consecutive points
    pub fn spacing(&self) -> f64 {
        self.length / (self.len() - 1) as f64
    }

    /// Iterate over the grid values
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

impl Default for Domain {
    /// The reference grid: 101 points over [0, 1]
    fn default() -> Self {
        Self::uniform(DEFAULT_LENGTH, DEFAULT_SAMPLES)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domain() {
        let domain = Domain::default();
        assert_eq!(domain.len(), 101);
        assert_eq!(domain.length(), 1.0);
    }

    #[test]
    fn test_endpoints_are_exact() {
        let domain = Domain::uniform(1.0, 101);
        assert_eq!(domain.points()[0], 0.0);
        assert_eq!(domain.points()[100], 1.0);

        // Endpoints must stay exact for lengths that do not divide evenly
        let domain = Domain::uniform(0.3, 7);
        assert_eq!(domain.points()[0], 0.0);
        assert_eq!(domain.points()[6], 0.3);
    }

    #[test]
    fn test_constant_spacing() {
        let domain = Domain::uniform(2.0, 51);
        let expected = 2.0 / 50.0;
        assert!((domain.spacing() - expected).abs() < 1e-15);

        for i in 1..domain.len() {
            let dx = domain.points()[i] - domain.points()[i - 1];
            assert!(
                (dx - expected).abs() < 1e-12,
                "Spacing at index {} is {} (expected {})",
                i,
                dx,
                expected
            );
        }
    }

    #[test]
    fn test_ordering_is_ascending() {
        let domain = Domain::uniform(1.0, 101);
        for i in 1..domain.len() {
            assert!(domain.points()[i] > domain.points()[i - 1]);
        }
    }

    #[test]
    fn test_minimal_grid() {
        let domain = Domain::uniform(1.0, 2);
        assert_eq!(domain.len(), 2);
        assert_eq!(domain.points()[0], 0.0);
        assert_eq!(domain.points()[1], 1.0);
        assert_eq!(domain.spacing(), 1.0);
    }

    #[test]
    fn test_iter_matches_points() {
        let domain = Domain::uniform(1.0, 11);
        let collected: Vec<f64> = domain.iter().collect();
        assert_eq!(collected.len(), 11);
        assert_eq!(collected[5], domain.points()[5]);
    }
}
