//! Fund domain entity
//!
//! An investment fund from the catalog that customers can invest in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a fund
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundId(pub String);

impl FundId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FundId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FundId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Risk classification of a fund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Unknown risk level: {}", s)),
        }
    }
}

/// A fund in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fund {
    pub id: FundId,
    pub name: String,
    pub description: String,
    pub risk_level: RiskLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Fund {
    pub fn new(id: impl Into<FundId>, name: &str, description: &str, risk_level: RiskLevel) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.to_string(),
            description: description.to_string(),
            risk_level,
            created_at: now,
            updated_at: now,
        }
    }
}
