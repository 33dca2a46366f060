//! Fund service
//!
//! Read-only access to the fund catalog. Catalog business rules (such as
//! eligibility filtering) belong here rather than in the handlers.

use std::sync::Arc;

use crate::domain::entities::{Fund, FundId};
use crate::domain::ports::FundRepository;
use crate::error::DomainError;

/// Service for browsing the fund catalog
pub struct FundService<FR>
where
    FR: FundRepository,
{
    funds: Arc<FR>,
}

impl<FR> FundService<FR>
where
    FR: FundRepository,
{
    pub fn new(funds: Arc<FR>) -> Self {
        Self { funds }
    }

    /// Get a fund by ID
    pub fn get_fund(&self, id: &FundId) -> Result<Fund, DomainError> {
        self.funds.get_by_id(id)
    }

    /// List every fund in the catalog
    pub fn list_funds(&self) -> Result<Vec<Fund>, DomainError> {
        self.funds.get_all()
    }
}
