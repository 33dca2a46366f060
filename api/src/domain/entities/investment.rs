//! Investment domain entity
//!
//! A customer's contribution into a fund. Amounts are integer counts of
//! minor currency units (pence).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::customer::CustomerId;
use super::fund::FundId;

/// Fixed ISA annual allowance in pence (£20,000)
pub const ISA_ANNUAL_LIMIT: i64 = 2_000_000;

/// System-generated investment identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestmentId(pub String);

impl InvestmentId {
    /// Random UUID v4 identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InvestmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for InvestmentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for InvestmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InvestmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    Pending,
    Processed,
    Cancelled,
}

impl std::fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvestmentStatus::Pending => write!(f, "pending"),
            InvestmentStatus::Processed => write!(f, "processed"),
            InvestmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for InvestmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(InvestmentStatus::Pending),
            "processed" => Ok(InvestmentStatus::Processed),
            "cancelled" => Ok(InvestmentStatus::Cancelled),
            _ => Err(format!("Unknown investment status: {}", s)),
        }
    }
}

/// A customer's investment in a fund
///
/// References the customer and fund by ID only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Investment {
    pub id: InvestmentId,
    pub customer_id: CustomerId,
    pub fund_id: FundId,
    /// Amount in pence
    pub amount: i64,
    pub status: InvestmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
