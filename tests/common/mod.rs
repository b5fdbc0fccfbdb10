//! Common test utilities for fisl-crawler integration tests

#[allow(dead_code)]
pub mod fixtures;
#[allow(dead_code)]
pub mod platform;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use platform::*;
