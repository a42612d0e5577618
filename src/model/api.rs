//! Response shapes of the portfolio backend
//!
//! These mirror the JSON the backend serves. No client lives in this
//! crate; instances come from the fixture table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date/value pairs for the portfolio trend chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub dates: Vec<String>,
    pub values: Vec<f64>,
}

impl TrendSeries {
    /// Chart points as (index, value); extra dates or values are dropped
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.dates
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(i, (_, value))| (i as f64, *value))
            .collect()
    }
}

/// `GET /api/portfolio_overview`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOverviewResponse {
    pub status: String,
    pub total_value: f64,
    pub holdings_count: u32,
    pub allocation: BTreeMap<String, f64>,
    pub trend: TrendSeries,
    pub currency: String,
    pub generated_at: DateTime<Utc>,
}

/// One row of `GET /api/assets/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "Asset_ID")]
    pub asset_id: String,
    #[serde(rename = "Asset_Name")]
    pub asset_name: String,
}

/// `GET /api/assets/list`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetsListResponse {
    pub assets: Vec<AssetRef>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

impl CheckStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✓",
            CheckStatus::Warning => "!",
            CheckStatus::Fail => "✗",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warning => "warning",
            CheckStatus::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityCheck {
    pub check_name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// `GET /api/data_quality`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataQualityResponse {
    pub checks: Vec<QualityCheck>,
}

impl DataQualityResponse {
    /// Number of checks with the given status
    pub fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub app: String,
    pub version: String,
    pub environment: String,
    pub system_state: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
    pub demo_mode: bool,
}
