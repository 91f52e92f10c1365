//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use test_helpers::{assert_close, max_abs_difference, reference_curves, relative_error};
