use serde::Serialize;

use super::format::CurrencyFormat;
use super::types::{ProjectionInput, ProjectionResult};

pub const CHART_TITLE: &str = "Investment Growth vs. Inflation Impact";
pub const INVESTED_LABEL: &str = "Invested Money";
pub const UNINVESTED_LABEL: &str = "Uninvested (Inflation Adjusted)";
pub const INITIAL_AMOUNT_LABEL: &str = "Initial Amount";

const SUGGESTED_MAX_HEADROOM: f64 = 1.1;

/// Line chart description in the shape Chart.js expects for `data.datasets`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub labels: Vec<u32>,
    pub datasets: Vec<ChartDataset>,
    pub suggested_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub border_width: u32,
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

impl ChartDataset {
    fn filled_curve(label: &str, data: Vec<f64>, rgb: (u8, u8, u8)) -> Self {
        let (r, g, b) = rgb;
        Self {
            label: label.to_string(),
            data,
            border_color: format!("rgba({r}, {g}, {b}, 1)"),
            background_color: Some(format!("rgba({r}, {g}, {b}, 0.1)")),
            border_width: 2,
            fill: true,
            tension: Some(0.1),
            border_dash: None,
            point_radius: None,
        }
    }

    fn reference_line(label: &str, value: f64, points: usize) -> Self {
        Self {
            label: label.to_string(),
            data: vec![value; points],
            border_color: "rgba(108, 117, 125, 0.8)".to_string(),
            background_color: None,
            border_width: 2,
            fill: false,
            tension: None,
            border_dash: Some(vec![5, 5]),
            point_radius: Some(0),
        }
    }
}

pub fn build_chart_spec(
    input: &ProjectionInput,
    result: &ProjectionResult,
    currency: &CurrencyFormat,
) -> ChartSpec {
    let datasets = vec![
        ChartDataset::filled_curve(INVESTED_LABEL, result.invested.clone(), (40, 167, 69)),
        ChartDataset::filled_curve(UNINVESTED_LABEL, result.uninvested.clone(), (255, 153, 0)),
        ChartDataset::reference_line(INITIAL_AMOUNT_LABEL, input.initial_amount, result.len()),
    ];

    ChartSpec {
        title: CHART_TITLE.to_string(),
        x_axis_title: "Years".to_string(),
        y_axis_title: format!("Amount ({})", currency.symbol),
        labels: result.time_points.clone(),
        datasets,
        suggested_max: result.final_invested() * SUGGESTED_MAX_HEADROOM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::project;

    #[test]
    fn chart_has_three_aligned_series() {
        let input = ProjectionInput {
            years: 5,
            ..ProjectionInput::default()
        };
        let result = project(&input);
        let chart = build_chart_spec(&input, &result, &CurrencyFormat::default());

        assert_eq!(chart.labels, vec![0, 1, 2, 3, 4, 5]);
        let labels: Vec<&str> = chart.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![INVESTED_LABEL, UNINVESTED_LABEL, INITIAL_AMOUNT_LABEL]
        );
        for dataset in &chart.datasets {
            assert_eq!(dataset.data.len(), 6);
        }
        assert_eq!(chart.datasets[0].data, result.invested);
        assert_eq!(chart.datasets[1].data, result.uninvested);
        assert!(chart.datasets[2].data.iter().all(|&v| v == 1000.0));
    }

    #[test]
    fn suggested_max_leaves_headroom_above_final_invested() {
        let input = ProjectionInput::default();
        let result = project(&input);
        let chart = build_chart_spec(&input, &result, &CurrencyFormat::default());
        let expected = result.invested[10] * 1.1;
        assert!((chart.suggested_max - expected).abs() < 1e-9);
        assert!(chart.suggested_max > result.invested[10]);
    }

    #[test]
    fn axis_title_follows_currency_symbol() {
        let input = ProjectionInput::default();
        let result = project(&input);
        let chart = build_chart_spec(&input, &result, &CurrencyFormat::new("€"));
        assert_eq!(chart.y_axis_title, "Amount (€)");
        assert_eq!(chart.x_axis_title, "Years");
        assert_eq!(chart.title, CHART_TITLE);
    }

    #[test]
    fn reference_line_serializes_dash_and_omits_fill_color() {
        let input = ProjectionInput {
            years: 1,
            ..ProjectionInput::default()
        };
        let result = project(&input);
        let chart = build_chart_spec(&input, &result, &CurrencyFormat::default());
        let json = serde_json::to_string(&chart.datasets[2]).expect("dataset should serialize");
        assert!(json.contains("\"borderDash\":[5,5]"));
        assert!(json.contains("\"pointRadius\":0"));
        assert!(!json.contains("backgroundColor"));
        assert!(!json.contains("tension"));
    }
}
