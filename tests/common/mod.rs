//! Common test utilities for solution-dl integration tests

#[allow(dead_code)]
pub mod fixtures;

pub use fixtures::*;
