//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The ports are tiny and a fixed clock or counter is clearer than expectations
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//!
//! The in-memory repository is a real adapter and lives in `adapters::memory`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
