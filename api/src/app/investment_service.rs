//! Investment service
//!
//! Validates and records customer investments.
//!
//! `create_investment` checks, in order and stopping at the first failure:
//! 1. the customer exists
//! 2. the fund exists
//! 3. the amount is positive
//! 4. the amount does not exceed the ISA annual limit
//!
//! The limit is checked against the single requested amount only. Prior
//! contributions in the same tax year are not summed.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{
    CustomerId, FundId, Investment, InvestmentId, InvestmentStatus, ISA_ANNUAL_LIMIT,
};
use crate::domain::ports::{CustomerRepository, FundRepository, InvestmentRepository};
use crate::error::DomainError;

/// Service for placing and reading investments
pub struct InvestmentService<IR, CR, FR>
where
    IR: InvestmentRepository,
    CR: CustomerRepository,
    FR: FundRepository,
{
    investments: Arc<IR>,
    customers: Arc<CR>,
    funds: Arc<FR>,
}

impl<IR, CR, FR> InvestmentService<IR, CR, FR>
where
    IR: InvestmentRepository,
    CR: CustomerRepository,
    FR: FundRepository,
{
    pub fn new(investments: Arc<IR>, customers: Arc<CR>, funds: Arc<FR>) -> Self {
        Self {
            investments,
            customers,
            funds,
        }
    }

    /// Place a new investment of `amount` pence
    ///
    /// Returns the stored record, in `pending` status. A failed call leaves
    /// the investment store untouched.
    pub fn create_investment(
        &self,
        customer_id: &CustomerId,
        fund_id: &FundId,
        amount: i64,
    ) -> Result<Investment, DomainError> {
        self.customers.get_by_id(customer_id)?;
        self.funds.get_by_id(fund_id)?;

        if amount <= 0 {
            return Err(DomainError::InvalidAmount(amount));
        }

        if amount > ISA_ANNUAL_LIMIT {
            return Err(DomainError::LimitExceeded {
                amount,
                limit: ISA_ANNUAL_LIMIT,
            });
        }

        let now = Utc::now();
        let investment = Investment {
            id: InvestmentId::new(),
            customer_id: customer_id.clone(),
            fund_id: fund_id.clone(),
            amount,
            status: InvestmentStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.investments.create(&investment)?;

        Ok(investment)
    }

    /// Get an investment by ID
    pub fn get_investment(&self, id: &InvestmentId) -> Result<Investment, DomainError> {
        self.investments.get_by_id(id)
    }

    /// All investments placed by a customer (empty if none)
    pub fn get_customer_investments(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<Investment>, DomainError> {
        self.investments.get_by_customer_id(customer_id)
    }
}
