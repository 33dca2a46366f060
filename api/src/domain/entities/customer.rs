//! Customer domain entity
//!
//! A retail customer who can place ISA investments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Externally assigned customer identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A retail customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Build a customer whose timestamps are both set to now
    pub fn new(id: impl Into<CustomerId>, name: &str, email: &str) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
