//! Fixture table - the read-only data every page renders
//!
//! The built-in seed is used unless a YAML seed file is configured. A seed
//! file only needs the sections it wants to replace; missing sections fall
//! back to the built-in values.

use super::api::{
    AssetRef, AssetsListResponse, CheckStatus, DataQualityResponse, HealthResponse,
    HealthStatus, PortfolioOverviewResponse, QualityCheck, TrendSeries,
};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthPoint {
    pub month: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPerformance {
    pub symbol: String,
    pub name: String,
    pub cost_basis: f64,
    pub market_value: f64,
}

impl AssetPerformance {
    pub fn gain(&self) -> f64 {
        self.market_value - self.cost_basis
    }

    /// Gain relative to cost, in percent; zero cost gives zero
    pub fn gain_percent(&self) -> f64 {
        if self.cost_basis == 0.0 {
            0.0
        } else {
            self.gain() / self.cost_basis * 100.0
        }
    }
}

/// A statement file offered on the upload page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementFile {
    pub file_name: String,
    pub institution: String,
    pub size_kb: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub source: String,
    pub target: String,
    pub sample: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportRow {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
}

/// Immutable data injected into the app at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub allocation: Vec<AllocationEntry>,
    pub activity: Vec<ActivityEntry>,
    pub net_worth: Vec<NetWorthPoint>,
    pub performance: Vec<AssetPerformance>,
    pub statement_files: Vec<StatementFile>,
    pub column_mappings: Vec<ColumnMapping>,
    pub import_rows: Vec<ImportRow>,
    pub monthly_contribution: f64,
    pub portfolio_overview: PortfolioOverviewResponse,
    pub assets: AssetsListResponse,
    pub data_quality: DataQualityResponse,
    pub health: HealthResponse,
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn instant(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap_or_default()
}

fn allocation(name: &str, value: f64) -> AllocationEntry {
    AllocationEntry {
        name: name.to_string(),
        value,
    }
}

fn activity(date: NaiveDate, description: &str, category: &str, amount: f64) -> ActivityEntry {
    ActivityEntry {
        date,
        description: description.to_string(),
        category: category.to_string(),
        amount,
    }
}

fn performance(symbol: &str, name: &str, cost_basis: f64, market_value: f64) -> AssetPerformance {
    AssetPerformance {
        symbol: symbol.to_string(),
        name: name.to_string(),
        cost_basis,
        market_value,
    }
}

fn mapping(source: &str, target: &str, sample: &str) -> ColumnMapping {
    ColumnMapping {
        source: source.to_string(),
        target: target.to_string(),
        sample: sample.to_string(),
    }
}

fn import_row(date: NaiveDate, description: &str, amount: f64) -> ImportRow {
    ImportRow {
        date,
        description: description.to_string(),
        amount,
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        let net_worth: Vec<NetWorthPoint> = [
            ("Jan", 118_400.0),
            ("Feb", 121_050.0),
            ("Mar", 119_800.0),
            ("Apr", 124_300.0),
            ("May", 127_950.0),
            ("Jun", 131_200.0),
        ]
        .iter()
        .map(|(month, value)| NetWorthPoint {
            month: month.to_string(),
            value: *value,
        })
        .collect();

        let allocation_entries = vec![
            allocation("Equities", 72_500.0),
            allocation("Bonds", 28_400.0),
            allocation("Real Estate", 15_300.0),
            allocation("Cash", 10_600.0),
            allocation("Crypto", 4_400.0),
        ];

        let trend = TrendSeries {
            dates: net_worth.iter().map(|p| format!("2024-{}", p.month)).collect(),
            values: net_worth.iter().map(|p| p.value).collect(),
        };

        let portfolio_overview = PortfolioOverviewResponse {
            status: "success".to_string(),
            total_value: 131_200.0,
            holdings_count: 14,
            allocation: allocation_entries
                .iter()
                .map(|a| (a.name.clone(), a.value))
                .collect::<BTreeMap<_, _>>(),
            trend,
            currency: "USD".to_string(),
            generated_at: instant(2024, 6, 30, 9),
        };

        let performance_rows = vec![
            performance("VTI", "Total Stock Market ETF", 38_000.0, 44_250.0),
            performance("AAPL", "Apple Inc.", 9_800.0, 12_150.0),
            performance("BND", "Total Bond Market ETF", 29_500.0, 28_400.0),
            performance("VNQ", "Real Estate ETF", 14_200.0, 15_300.0),
            performance("BTC", "Bitcoin", 5_100.0, 4_400.0),
            performance("MSFT", "Microsoft Corp.", 13_000.0, 16_100.0),
        ];

        let assets = AssetsListResponse {
            count: performance_rows.len(),
            assets: performance_rows
                .iter()
                .map(|p| AssetRef {
                    asset_id: p.symbol.clone(),
                    asset_name: p.name.clone(),
                })
                .collect(),
            error: None,
        };

        Self {
            allocation: allocation_entries,
            activity: vec![
                activity(day(2024, 6, 28), "Salary deposit", "Income", 6_200.0),
                activity(day(2024, 6, 26), "VTI purchase", "Investment", -2_000.0),
                activity(day(2024, 6, 21), "Rent", "Housing", -2_350.0),
                activity(day(2024, 6, 18), "Dividend AAPL", "Income", 48.6),
                activity(day(2024, 6, 12), "Groceries", "Living", -186.4),
            ],
            net_worth,
            performance: performance_rows,
            statement_files: vec![
                StatementFile {
                    file_name: "brokerage_2024_06.csv".to_string(),
                    institution: "Fidelity".to_string(),
                    size_kb: 42,
                },
                StatementFile {
                    file_name: "checking_2024_06.csv".to_string(),
                    institution: "Chase".to_string(),
                    size_kb: 18,
                },
            ],
            column_mappings: vec![
                mapping("Trade Date", "date", "06/28/2024"),
                mapping("Description", "description", "Salary deposit"),
                mapping("Amount (USD)", "amount", "6,200.00"),
                mapping("Symbol", "asset_id", "VTI"),
            ],
            import_rows: vec![
                import_row(day(2024, 6, 28), "Salary deposit", 6_200.0),
                import_row(day(2024, 6, 26), "VTI purchase", -2_000.0),
                import_row(day(2024, 6, 21), "Rent", -2_350.0),
                import_row(day(2024, 6, 18), "Dividend AAPL", 48.6),
            ],
            monthly_contribution: 1_500.0,
            portfolio_overview,
            assets,
            data_quality: DataQualityResponse {
                checks: vec![
                    QualityCheck {
                        check_name: "missing_prices".to_string(),
                        status: CheckStatus::Pass,
                        message: "All holdings have a price for the last close".to_string(),
                        details: None,
                    },
                    QualityCheck {
                        check_name: "duplicate_transactions".to_string(),
                        status: CheckStatus::Warning,
                        message: "2 possible duplicate transactions".to_string(),
                        details: Some("2024-06-12 Groceries appears twice".to_string()),
                    },
                    QualityCheck {
                        check_name: "fx_rates".to_string(),
                        status: CheckStatus::Fail,
                        message: "No CNY/USD rate for 2024-06-29".to_string(),
                        details: None,
                    },
                ],
            },
            health: HealthResponse {
                status: HealthStatus::Healthy,
                app: "folio".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                environment: "demo".to_string(),
                system_state: "ready".to_string(),
                timestamp: instant(2024, 6, 30, 9),
                database: "fixtures".to_string(),
                demo_mode: true,
            },
        }
    }
}

impl Fixtures {
    /// Fixtures with every collection empty
    pub fn empty() -> Self {
        Self {
            allocation: Vec::new(),
            activity: Vec::new(),
            net_worth: Vec::new(),
            performance: Vec::new(),
            statement_files: Vec::new(),
            column_mappings: Vec::new(),
            import_rows: Vec::new(),
            portfolio_overview: PortfolioOverviewResponse {
                holdings_count: 0,
                total_value: 0.0,
                allocation: BTreeMap::new(),
                trend: TrendSeries::default(),
                ..Self::default().portfolio_overview
            },
            assets: AssetsListResponse::default(),
            data_quality: DataQualityResponse::default(),
            ..Self::default()
        }
    }

    /// Load a YAML seed file
    pub fn load(path: &Path) -> Result<Fixtures> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixtures from {}", path.display()))?;
        let fixtures = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse fixtures in {}", path.display()))?;
        Ok(fixtures)
    }

    /// Latest net worth, if any history exists
    pub fn current_net_worth(&self) -> Option<f64> {
        self.net_worth.last().map(|p| p.value)
    }

    /// Change between the last two net worth points
    pub fn month_change(&self) -> Option<f64> {
        match self.net_worth.as_slice() {
            [.., prev, last] => Some(last.value - prev.value),
            _ => None,
        }
    }

    /// Value of the allocation entry named "Cash"
    pub fn cash_balance(&self) -> Option<f64> {
        self.allocation
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case("cash"))
            .map(|a| a.value)
    }

    /// Sum of all allocation entries
    pub fn allocation_total(&self) -> f64 {
        self.allocation.iter().map(|a| a.value).sum()
    }

    pub fn import_total(&self) -> f64 {
        self.import_rows.iter().map(|r| r.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_seed_is_consistent() {
        let fixtures = Fixtures::default();
        assert_eq!(fixtures.current_net_worth(), Some(131_200.0));
        assert_eq!(fixtures.month_change(), Some(3_250.0));
        assert_eq!(fixtures.cash_balance(), Some(10_600.0));
        assert_eq!(fixtures.assets.count, fixtures.assets.assets.len());
        assert_eq!(
            fixtures.portfolio_overview.trend.points().len(),
            fixtures.net_worth.len()
        );
    }

    #[test]
    fn test_empty_fixtures() {
        let fixtures = Fixtures::empty();
        assert!(fixtures.allocation.is_empty());
        assert!(fixtures.assets.assets.is_empty());
        assert_eq!(fixtures.current_net_worth(), None);
        assert_eq!(fixtures.month_change(), None);
        assert_eq!(fixtures.allocation_total(), 0.0);
    }

    #[test]
    fn test_gain_percent() {
        let row = performance("X", "X Corp", 200.0, 250.0);
        assert_eq!(row.gain(), 50.0);
        assert_eq!(row.gain_percent(), 25.0);

        let free = performance("Y", "Gift", 0.0, 10.0);
        assert_eq!(free.gain_percent(), 0.0);
    }

    #[test]
    fn test_partial_seed_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "net_worth:\n  - month: Jul\n    value: 1000\n  - month: Aug\n    value: 1500\n"
        )
        .unwrap();

        let fixtures = Fixtures::load(file.path()).unwrap();
        assert_eq!(fixtures.net_worth.len(), 2);
        assert_eq!(fixtures.month_change(), Some(500.0));
        assert_eq!(fixtures.allocation, Fixtures::default().allocation);
    }

    #[test]
    fn test_missing_seed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Fixtures::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read fixtures"));
    }
}
