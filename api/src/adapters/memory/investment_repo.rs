//! In-memory adapter for InvestmentRepository

use std::collections::HashMap;
use std::sync::RwLock;

use super::{read_lock, write_lock};
use crate::domain::entities::{CustomerId, Investment, InvestmentId};
use crate::domain::ports::InvestmentRepository;
use crate::error::{DomainError, EntityKind};

/// In-memory implementation of InvestmentRepository
///
/// Lookups by customer are a filtered scan under the read lock, so they
/// never see a half-inserted record.
#[derive(Default)]
pub struct InMemoryInvestmentRepository {
    investments: RwLock<HashMap<InvestmentId, Investment>>,
}

impl InMemoryInvestmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_investment(self, investment: Investment) -> Self {
        write_lock(&self.investments).insert(investment.id.clone(), investment);
        self
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        read_lock(&self.investments).len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        read_lock(&self.investments).is_empty()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> HashMap<InvestmentId, Investment> {
        read_lock(&self.investments).clone()
    }
}

impl InvestmentRepository for InMemoryInvestmentRepository {
    fn get_by_id(&self, id: &InvestmentId) -> Result<Investment, DomainError> {
        read_lock(&self.investments)
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::investment_not_found(id.as_str()))
    }

    fn get_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<Investment>, DomainError> {
        Ok(read_lock(&self.investments)
            .values()
            .filter(|i| &i.customer_id == customer_id)
            .cloned()
            .collect())
    }

    fn create(&self, investment: &Investment) -> Result<(), DomainError> {
        let mut investments = write_lock(&self.investments);
        if investments.contains_key(&investment.id) {
            return Err(DomainError::already_exists(
                EntityKind::Investment,
                investment.id.as_str(),
            ));
        }
        investments.insert(investment.id.clone(), investment.clone());
        Ok(())
    }

    fn update(&self, investment: &Investment) -> Result<(), DomainError> {
        let mut investments = write_lock(&self.investments);
        match investments.get_mut(&investment.id) {
            Some(existing) => {
                *existing = investment.clone();
                Ok(())
            }
            None => Err(DomainError::investment_not_found(investment.id.as_str())),
        }
    }
}
