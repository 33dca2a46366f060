//! Domain entities
//!
//! Plain data shapes for the ISA investment workflow. Relationships between
//! entities are expressed by ID, never by embedding.

pub mod customer;
pub mod fund;
pub mod investment;

pub use customer::{Customer, CustomerId};
pub use fund::{Fund, FundId, RiskLevel};
pub use investment::{Investment, InvestmentId, InvestmentStatus, ISA_ANNUAL_LIMIT};
