//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and the repository ports.

pub mod fund_service;
pub mod investment_service;

pub use fund_service::FundService;
pub use investment_service::InvestmentService;
