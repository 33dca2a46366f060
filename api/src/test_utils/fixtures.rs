//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{
    Customer, CustomerId, FundId, Investment, InvestmentId, InvestmentStatus,
};

/// Create a test customer with a specific ID
pub fn test_customer_named(id: &str) -> Customer {
    Customer::new(
        id,
        &format!("Customer {}", id),
        &format!("{}@example.com", id),
    )
}

/// Create a pending investment without going through the service
pub fn test_investment(customer_id: &str, fund_id: &str, amount: i64) -> Investment {
    let now = Utc::now();
    Investment {
        id: InvestmentId::new(),
        customer_id: CustomerId::from(customer_id),
        fund_id: FundId::from(fund_id),
        amount,
        status: InvestmentStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}
