//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the in-memory stores).
//!
//! Every operation is a synchronous call that must be safe under concurrent
//! invocation. Reads never observe a partially written record, and writes
//! move a store atomically from one consistent keyed state to the next.

use crate::domain::entities::{Customer, CustomerId, Fund, FundId, Investment, InvestmentId};
use crate::error::DomainError;

/// Repository for Customer entities
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by ID, failing with a customer `NotFound`
    fn get_by_id(&self, id: &CustomerId) -> Result<Customer, DomainError>;

    /// Insert a customer, failing with `AlreadyExists` if the ID is taken
    #[allow(dead_code)]
    fn create(&self, customer: &Customer) -> Result<(), DomainError>;

    /// Replace an existing customer, failing with `NotFound` if absent
    #[allow(dead_code)]
    fn update(&self, customer: &Customer) -> Result<(), DomainError>;
}

/// Repository for Fund entities (read-only catalog)
pub trait FundRepository: Send + Sync {
    /// Find a fund by ID, failing with a fund `NotFound`
    fn get_by_id(&self, id: &FundId) -> Result<Fund, DomainError>;

    /// Snapshot of every fund. Order is not guaranteed.
    fn get_all(&self) -> Result<Vec<Fund>, DomainError>;
}

/// Repository for Investment entities
pub trait InvestmentRepository: Send + Sync {
    /// Find an investment by ID, failing with an investment `NotFound`
    fn get_by_id(&self, id: &InvestmentId) -> Result<Investment, DomainError>;

    /// All investments owned by a customer, possibly empty. Order is not
    /// guaranteed.
    fn get_by_customer_id(&self, customer_id: &CustomerId)
        -> Result<Vec<Investment>, DomainError>;

    /// Insert an investment, failing with `AlreadyExists` if the ID is taken
    fn create(&self, investment: &Investment) -> Result<(), DomainError>;

    /// Replace an existing investment, failing with `NotFound` if absent.
    /// Reserved for status transitions, which no service exposes yet.
    #[allow(dead_code)]
    fn update(&self, investment: &Investment) -> Result<(), DomainError>;
}
