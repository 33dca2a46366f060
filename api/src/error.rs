//! Unified error types for the ISA retail API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and store errors
//! - `AppError`: Adapter layer errors (wraps domain errors for HTTP responses)

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// The kind of entity a lookup or write was addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customer,
    Fund,
    Investment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Customer => write!(f, "Customer"),
            EntityKind::Fund => write!(f, "Fund"),
            EntityKind::Investment => write!(f, "Investment"),
        }
    }
}

/// Domain layer errors - pure business logic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: EntityKind, id: String },

    #[error("Investment amount must be positive (got {0})")]
    InvalidAmount(i64),

    #[error("Investment of {amount} exceeds ISA annual limit of {limit}")]
    LimitExceeded { amount: i64, limit: i64 },

    /// Store failure. The in-memory stores never produce this.
    #[allow(dead_code)]
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn customer_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity: EntityKind::Customer,
            id: id.into(),
        }
    }

    pub fn fund_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity: EntityKind::Fund,
            id: id.into(),
        }
    }

    pub fn investment_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity: EntityKind::Investment,
            id: id.into(),
        }
    }

    pub fn already_exists(entity: EntityKind, id: impl Into<String>) -> Self {
        DomainError::AlreadyExists {
            entity,
            id: id.into(),
        }
    }

    /// True for any member of the not-found family
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(e @ DomainError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Not found", Some(e.to_string()))
            }
            AppError::Domain(e @ DomainError::AlreadyExists { .. }) => {
                (StatusCode::CONFLICT, "Already exists", Some(e.to_string()))
            }
            AppError::Domain(e @ DomainError::InvalidAmount(_))
            | AppError::Domain(e @ DomainError::LimitExceeded { .. }) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(e.to_string()),
            ),
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

/// Failure converting a submitted decimal amount into pence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("Invalid amount format: {0}")]
    Format(String),

    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}

impl From<AmountParseError> for AppError {
    fn from(e: AmountParseError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

/// Undecodable request bodies share the `Bad request` envelope
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
