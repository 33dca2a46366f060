//! Adapters layer
//!
//! Implementations of port traits.

pub mod memory;

pub use memory::{InMemoryCustomerRepository, InMemoryFundRepository, InMemoryInvestmentRepository};
