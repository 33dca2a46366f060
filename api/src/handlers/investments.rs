//! Investment handlers
//!
//! Endpoints for placing investments and reading them back. Read models
//! carry the fund's name, looked up live on every request. A failed fund
//! lookup degrades to a placeholder name instead of failing the read.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::amount::{format_minor_units, parse_minor_units};
use crate::domain::entities::{CustomerId, FundId, Investment, InvestmentId};
use crate::error::AppError;
use crate::AppState;

/// Fund name shown when the referenced fund can't be resolved
pub const UNKNOWN_FUND_NAME: &str = "Unknown Fund";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Request body for placing an investment
#[derive(Debug, Deserialize)]
pub struct CreateInvestmentRequest {
    pub customer_id: String,
    pub fund_id: String,
    /// Amount in pounds as a decimal string, e.g. "15000.00"
    pub amount: String,
}

/// Response body for a newly placed investment
#[derive(Debug, Serialize)]
pub struct CreateInvestmentResponse {
    pub id: String,
    pub customer_id: String,
    pub fund_id: String,
    pub fund_name: String,
    /// The amount exactly as submitted
    pub amount: String,
    /// The stored amount rendered in pounds
    pub amount_value: String,
    pub status: String,
    pub created_at: String,
}

/// Single investment with its fund name
#[derive(Debug, Serialize)]
pub struct InvestmentResponse {
    pub id: String,
    pub customer_id: String,
    pub fund_id: String,
    pub fund_name: String,
    pub amount: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Entry in a customer's investment list
#[derive(Debug, Serialize)]
pub struct InvestmentSummary {
    pub id: String,
    pub customer_id: String,
    pub fund_id: String,
    pub fund_name: String,
    pub amount: String,
    pub status: String,
    pub created_at: String,
}

/// POST /api/v1/investments
///
/// Place an investment. The amount is converted to pence before the
/// domain rules run. A body that doesn't decode is a 400.
pub async fn create_investment(
    State(state): State<AppState>,
    payload: Result<Json<CreateInvestmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateInvestmentResponse>), AppError> {
    let Json(request) = payload?;
    let amount = parse_minor_units(&request.amount)?;

    let investment = state.investment_service.create_investment(
        &CustomerId::from(request.customer_id),
        &FundId::from(request.fund_id),
        amount,
    )?;

    tracing::info!(
        investment_id = %investment.id,
        customer_id = %investment.customer_id,
        fund_id = %investment.fund_id,
        amount = investment.amount,
        "Investment created"
    );

    let fund_name = fund_name(&state, &investment.fund_id);

    Ok((
        StatusCode::CREATED,
        Json(CreateInvestmentResponse {
            id: investment.id.to_string(),
            customer_id: investment.customer_id.to_string(),
            fund_id: investment.fund_id.to_string(),
            fund_name,
            amount: request.amount,
            amount_value: format_minor_units(investment.amount),
            status: investment.status.to_string(),
            created_at: format_timestamp(&investment.created_at),
        }),
    ))
}

/// GET /api/v1/investments/:id
pub async fn get_investment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvestmentResponse>, AppError> {
    let investment = state
        .investment_service
        .get_investment(&InvestmentId::from(id))?;
    let fund_name = fund_name(&state, &investment.fund_id);

    Ok(Json(InvestmentResponse {
        id: investment.id.to_string(),
        customer_id: investment.customer_id.to_string(),
        fund_id: investment.fund_id.to_string(),
        fund_name,
        amount: format_minor_units(investment.amount),
        status: investment.status.to_string(),
        created_at: format_timestamp(&investment.created_at),
        updated_at: format_timestamp(&investment.updated_at),
    }))
}

/// GET /api/v1/customers/:id/investments
///
/// Empty list when the customer has no investments.
pub async fn get_customer_investments(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<InvestmentSummary>>, AppError> {
    let investments = state
        .investment_service
        .get_customer_investments(&CustomerId::from(customer_id))?;

    let summaries = investments
        .into_iter()
        .map(|investment| summarize(&state, investment))
        .collect();

    Ok(Json(summaries))
}

fn summarize(state: &AppState, investment: Investment) -> InvestmentSummary {
    let fund_name = fund_name(state, &investment.fund_id);
    InvestmentSummary {
        id: investment.id.to_string(),
        customer_id: investment.customer_id.to_string(),
        fund_id: investment.fund_id.to_string(),
        fund_name,
        amount: format_minor_units(investment.amount),
        status: investment.status.to_string(),
        created_at: format_timestamp(&investment.created_at),
    }
}

fn fund_name(state: &AppState, fund_id: &FundId) -> String {
    match state.fund_service.get_fund(fund_id) {
        Ok(fund) => fund.name,
        Err(e) if e.is_not_found() => {
            tracing::warn!(fund_id = %fund_id, "Fund not found, using placeholder name");
            UNKNOWN_FUND_NAME.to_string()
        }
        Err(e) => {
            tracing::error!(fund_id = %fund_id, error = %e, "Fund lookup failed, using placeholder name");
            UNKNOWN_FUND_NAME.to_string()
        }
    }
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parse_create_request_valid() {
        let json = r#"{"customer_id": "customer-1", "fund_id": "fund-1", "amount": "15000.00"}"#;
        let request: CreateInvestmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.customer_id, "customer-1");
        assert_eq!(request.fund_id, "fund-1");
        assert_eq!(request.amount, "15000.00");
    }

    #[test]
    fn parse_create_request_rejects_numeric_amount() {
        let json = r#"{"customer_id": "customer-1", "fund_id": "fund-1", "amount": 15000}"#;
        let result: Result<CreateInvestmentRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn parse_create_request_missing_fund() {
        let json = r#"{"customer_id": "customer-1", "amount": "10.00"}"#;
        let result: Result<CreateInvestmentRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn timestamps_use_plain_datetime_format() {
        let at = Utc.with_ymd_and_hms(2024, 4, 6, 9, 30, 5).unwrap();
        assert_eq!(format_timestamp(&at), "2024-04-06 09:30:05");
    }

    #[test]
    fn serialize_create_response() {
        let response = CreateInvestmentResponse {
            id: "inv-1".to_string(),
            customer_id: "customer-1".to_string(),
            fund_id: "fund-1".to_string(),
            fund_name: "Cushon Equities Fund".to_string(),
            amount: "15000".to_string(),
            amount_value: "15000.00".to_string(),
            status: "pending".to_string(),
            created_at: "2024-04-06 09:30:05".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["fund_name"], "Cushon Equities Fund");
        assert_eq!(json["amount"], "15000");
        assert_eq!(json["amount_value"], "15000.00");
        assert_eq!(json["status"], "pending");
    }
}
