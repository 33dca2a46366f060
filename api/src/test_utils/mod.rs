//! Test utilities
//!
//! Hand-written repository doubles and test fixtures for unit testing.
//!
//! The in-memory adapters are the production stores, so most tests use them
//! directly. The doubles here cover what a real store cannot: counting
//! lookups to prove validation order, and rejecting writes to prove that
//! persistence failures are surfaced.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
