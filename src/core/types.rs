use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_INITIAL_AMOUNT: f64 = 1000.0;
pub const DEFAULT_YEARS: u32 = 10;
pub const DEFAULT_INFLATION_RATE_PERCENT: f64 = 2.5;
pub const DEFAULT_INVESTMENT_RETURN_PERCENT: f64 = 7.5;
pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 50;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ValidationMode {
    #[default]
    Lenient,
    Strict,
}

/// `NaN` marks a value that was missing or could not be parsed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawProjectionInput {
    pub initial_amount: f64,
    pub years: f64,
    pub inflation_rate_percent: f64,
    pub investment_return_percent: f64,
}

impl Default for RawProjectionInput {
    fn default() -> Self {
        Self {
            initial_amount: f64::NAN,
            years: f64::NAN,
            inflation_rate_percent: f64::NAN,
            investment_return_percent: f64::NAN,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub initial_amount: f64,
    pub years: u32,
    pub inflation_rate_percent: f64,
    pub investment_return_percent: f64,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            initial_amount: DEFAULT_INITIAL_AMOUNT,
            years: DEFAULT_YEARS,
            inflation_rate_percent: DEFAULT_INFLATION_RATE_PERCENT,
            investment_return_percent: DEFAULT_INVESTMENT_RETURN_PERCENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub time_points: Vec<u32>,
    pub invested: Vec<f64>,
    pub uninvested: Vec<f64>,
}

impl ProjectionResult {
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    pub fn final_invested(&self) -> f64 {
        self.invested.last().copied().unwrap_or(f64::NAN)
    }

    pub fn final_uninvested(&self) -> f64 {
        self.uninvested.last().copied().unwrap_or(f64::NAN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub years: u32,
    pub initial_amount: f64,
    pub final_invested: f64,
    pub final_uninvested: f64,
    pub difference: f64,
    pub invested_multiplier: f64,
    pub uninvested_multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("initialAmount must be a finite number > 0, got {0}")]
    InvalidInitialAmount(f64),
    #[error("years must be a finite number between 1 and 50, got {0}")]
    InvalidYears(f64),
    #[error("inflationRate must be a finite percentage > -100, got {0}")]
    InvalidInflationRate(f64),
    #[error("investmentReturn must be a finite percentage > -100, got {0}")]
    InvalidInvestmentReturn(f64),
}
