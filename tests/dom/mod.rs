//! DOM builder tests
//!
//! End-to-end builds over the fixtures in `helpers::fixtures`:
//! - Solution-level properties (round trip, idempotence, merging)
//! - Failure isolation and diagnostics
//! - Inherited documentation and overrides
//! - Filters and options

pub mod tests_filters;
pub mod tests_inheritance;
pub mod tests_solution;
