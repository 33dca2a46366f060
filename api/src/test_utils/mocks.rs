//! Repository doubles
//!
//! Port implementations with behavior the in-memory stores don't offer.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::adapters::InMemoryFundRepository;
use crate::domain::entities::{CustomerId, Fund, FundId, Investment, InvestmentId};
use crate::domain::ports::{FundRepository, InvestmentRepository};
use crate::error::{DomainError, EntityKind};

// ============================================================================
// Recording Fund Repository
// ============================================================================

/// Seeded fund catalog that counts `get_by_id` calls
pub struct RecordingFundRepository {
    inner: InMemoryFundRepository,
    lookups: AtomicUsize,
}

impl RecordingFundRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl Default for RecordingFundRepository {
    fn default() -> Self {
        Self {
            inner: InMemoryFundRepository::seeded(),
            lookups: AtomicUsize::new(0),
        }
    }
}

impl FundRepository for RecordingFundRepository {
    fn get_by_id(&self, id: &FundId) -> Result<Fund, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(id)
    }

    fn get_all(&self) -> Result<Vec<Fund>, DomainError> {
        self.inner.get_all()
    }
}

// ============================================================================
// Rejecting Investment Repository
// ============================================================================

/// Empty store whose `create` always reports an ID collision
pub struct RejectingInvestmentRepository;

impl InvestmentRepository for RejectingInvestmentRepository {
    fn get_by_id(&self, id: &InvestmentId) -> Result<Investment, DomainError> {
        Err(DomainError::investment_not_found(id.as_str()))
    }

    fn get_by_customer_id(
        &self,
        _customer_id: &CustomerId,
    ) -> Result<Vec<Investment>, DomainError> {
        Ok(Vec::new())
    }

    fn create(&self, investment: &Investment) -> Result<(), DomainError> {
        Err(DomainError::already_exists(
            EntityKind::Investment,
            investment.id.as_str(),
        ))
    }

    fn update(&self, investment: &Investment) -> Result<(), DomainError> {
        Err(DomainError::investment_not_found(investment.id.as_str()))
    }
}
