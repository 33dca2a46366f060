//! Fund handlers
//!
//! Read-only endpoints over the fund catalog.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::entities::{Fund, FundId};
use crate::error::AppError;
use crate::AppState;

/// GET /api/v1/funds
///
/// List every fund in the catalog.
pub async fn list_funds(State(state): State<AppState>) -> Result<Json<Vec<Fund>>, AppError> {
    let funds = state.fund_service.list_funds()?;
    Ok(Json(funds))
}

/// GET /api/v1/funds/:id
pub async fn get_fund(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Fund>, AppError> {
    let fund = state.fund_service.get_fund(&FundId::from(id))?;
    Ok(Json(fund))
}
