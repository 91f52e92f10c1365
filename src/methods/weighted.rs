//! Weighted-residual approximations of u'' + u = 1
//!
//! # Mathematical Background
//!
//! With a two-term approximation `u(x) = a0 + a1*x + a2*x^2`, the boundary
//! conditions u(0) = 1 and u(1) = 0 give `a0 = 1` and `a1 = -(1 + a2)`,
//! leaving a single unknown. The trial function becomes
//!
//! ```text
//! u(x) = 1 - x + a2 * (x^2 - x)
//! ```
//!
//! with residual `R(x) = -x + a2 * (x^2 - x + 2)`. Each weighted-residual
//! method turns the residual-minimization problem into one equation for
//! `a2`; the resulting coefficients were derived by hand ahead of time and
//! are carried here as exact rational constants:
//!
//! | Method | Weight choice | a2 |
//! |---|---|---|
//! | Collocation | R(0.5) = 0 | 2/7 |
//! | Subdomain | single subdomain, w = 1 | 3/11 |
//! | Least squares | w = dR/d(a2) | 165/606 |
//! | Petrov-Galerkin | w = du/d(a2) | 5/18 |
//!
//! # Characteristics
//!
//! - All four trials satisfy both boundary conditions exactly: the
//!   `(x^2 - x)` term vanishes at x = 0 and x = 1, so u(0) = 1 and u(1) = 0
//!   regardless of `a2`.
//! - No solving happens at runtime: evaluation is a direct polynomial
//!   computation.

use super::TrialSolution;

/// Collocation coefficient, residual forced to zero at x = 0.5
pub const COLLOCATION_A2: f64 = 2.0 / 7.0;

/// Subdomain coefficient, one subdomain covering [0, 1] with w = 1
pub const SUBDOMAIN_A2: f64 = 3.0 / 11.0;

/// Least-squares coefficient, weight function w = dR/d(a2)
pub const LEAST_SQUARES_A2: f64 = 165.0 / 606.0;

/// Petrov-Galerkin coefficient, weight function w = du/d(a2)
pub const PETROV_GALERKIN_A2: f64 = 5.0 / 18.0;

/// One-parameter quadratic trial solution
///
/// Evaluates `1 - x + a2 * (x^2 - x)` for a fixed, precomputed `a2`.
/// Use the method constructors rather than picking coefficients by hand.
#[derive(Debug, Clone)]
pub struct QuadraticTrial {
    coefficient: f64,
    label: &'static str,
    description: &'static str,
}

impl QuadraticTrial {
    /// Collocation method, residual zeroed at the midpoint x = 0.5
    pub fn collocation() -> Self {
        Self {
            coefficient: COLLOCATION_A2,
            label: "Collocation at x = 0.5",
            description: "Collocation method with R(0.5) = 0",
        }
    }

    /// Subdomain method with a single subdomain and unit weight
    pub fn subdomain() -> Self {
        Self {
            coefficient: SUBDOMAIN_A2,
            label: "Subdomain with w = 1",
            description: "Subdomain method, one subdomain over [0, 1]",
        }
    }

    /// Least-squares method, weight w = dR/d(a2)
    pub fn least_squares() -> Self {
        Self {
            coefficient: LEAST_SQUARES_A2,
            label: "Least Squares",
            description: "Least-squares method with w = dR/d(a2)",
        }
    }

    /// Petrov-Galerkin method, weight w = du/d(a2)
    pub fn petrov_galerkin() -> Self {
        Self {
            coefficient: PETROV_GALERKIN_A2,
            label: "Petrov-Galerkin with w = du/da2",
            description: "Petrov-Galerkin method with w = du/d(a2)",
        }
    }

    /// The precomputed free coefficient a2
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl TrialSolution for QuadraticTrial {
    fn evaluate_at(&self, x: f64) -> f64 {
        1.0 - x + self.coefficient * (x * x - x)
    }

    fn name(&self) -> &str {
        self.label
    }

    fn description(&self) -> Option<&str> {
        Some(self.description)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
