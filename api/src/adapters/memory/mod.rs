//! In-memory adapters
//!
//! Implementations of repository traits over process-local maps. Each store
//! owns its own `RwLock`: reads run concurrently, a write excludes every
//! other reader and writer on that store, and the three stores never share
//! a lock.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub mod customer_repo;
pub mod fund_repo;
pub mod investment_repo;

pub use customer_repo::InMemoryCustomerRepository;
pub use fund_repo::InMemoryFundRepository;
pub use investment_repo::InMemoryInvestmentRepository;

// A write is a single map insert, so a poisoned store is still consistent.
fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
