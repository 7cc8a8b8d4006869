use serde::Serialize;

use super::chart::{ChartSpec, build_chart_spec};
use super::engine::{project, summarize, validate_input};
use super::format::{CurrencyFormat, summary_lines};
use super::types::{
    ProjectionError, ProjectionInput, ProjectionResult, ProjectionSummary, RawProjectionInput,
    ValidationMode,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    pub input: ProjectionInput,
    #[serde(flatten)]
    pub projection: ProjectionResult,
    pub summary: ProjectionSummary,
    pub summary_lines: Vec<String>,
    pub currency_symbol: String,
    pub chart: ChartSpec,
}

pub fn build_report(
    raw: &RawProjectionInput,
    mode: ValidationMode,
    currency: &CurrencyFormat,
) -> Result<ProjectionReport, ProjectionError> {
    let input = validate_input(raw, mode)?;
    let projection = project(&input);
    let summary = summarize(&input, &projection);
    let chart = build_chart_spec(&input, &projection, currency);

    Ok(ProjectionReport {
        input,
        summary_lines: summary_lines(&summary, currency),
        summary,
        currency_symbol: currency.symbol.clone(),
        chart,
        projection,
    })
}
