//! In-memory adapter for FundRepository

use std::collections::HashMap;
use std::sync::RwLock;

use super::{read_lock, write_lock};
use crate::domain::entities::{Fund, FundId, RiskLevel};
use crate::domain::ports::FundRepository;
use crate::error::DomainError;

/// In-memory implementation of FundRepository
#[derive(Default)]
pub struct InMemoryFundRepository {
    funds: RwLock<HashMap<FundId, Fund>>,
}

impl InMemoryFundRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the fund catalog
    pub fn seeded() -> Self {
        Self::new()
            .with_fund(Fund::new(
                "fund-1",
                "Cushon Equities Fund",
                "A fund that invests in global equities for long-term growth",
                RiskLevel::High,
            ))
            .with_fund(Fund::new(
                "fund-2",
                "Cushon Balanced Fund",
                "A balanced fund that invests in a mix of equities and bonds",
                RiskLevel::Medium,
            ))
            .with_fund(Fund::new(
                "fund-3",
                "Cushon Bond Fund",
                "A fund that invests in government and corporate bonds",
                RiskLevel::Low,
            ))
    }

    /// Pre-populate with a fund, replacing any with the same ID
    pub fn with_fund(self, fund: Fund) -> Self {
        write_lock(&self.funds).insert(fund.id.clone(), fund);
        self
    }
}

impl FundRepository for InMemoryFundRepository {
    fn get_by_id(&self, id: &FundId) -> Result<Fund, DomainError> {
        read_lock(&self.funds)
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::fund_not_found(id.as_str()))
    }

    fn get_all(&self) -> Result<Vec<Fund>, DomainError> {
        Ok(read_lock(&self.funds).values().cloned().collect())
    }
}
