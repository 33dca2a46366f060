//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Handlers translate
//! transport types into plain values for the services and map results back.

pub mod amount;
pub mod funds;
pub mod investments;

pub use funds::{get_fund, list_funds};
pub use investments::{create_investment, get_customer_investments, get_investment};
