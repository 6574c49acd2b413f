//! Shared fixtures and assertions for integration tests.

pub mod fixtures;
pub mod model_assertions;
