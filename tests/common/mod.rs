//! Common test utilities for the application tests

pub mod mocks;
pub mod test_helpers;

pub use mocks::*;
pub use test_helpers::*;
