mod chart;
mod engine;
mod format;
mod report;
mod types;

pub use chart::{ChartDataset, ChartSpec, build_chart_spec};
pub use engine::{project, summarize, validate_input};
pub use format::{CurrencyFormat, format_multiplier, summary_lines};
pub use report::{ProjectionReport, build_report};
pub use types::{
    MAX_YEARS, MIN_YEARS, ProjectionError, ProjectionInput, ProjectionResult, ProjectionSummary,
    RawProjectionInput, ValidationMode,
};
