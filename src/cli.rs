use clap::{Args, Parser, Subcommand};
use std::io::Write;
use thiserror::Error;

use crate::api::{ServerConfig, run_http_server};
use crate::core::{
    CurrencyFormat, ProjectionError, ProjectionReport, RawProjectionInput, ValidationMode,
    build_report,
};

#[derive(Parser, Debug)]
#[command(
    name = "inflation-gap",
    about = "Compare money invested at a compounding return with money eroded by inflation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the web calculator and the JSON projection API
    Serve(ServeArgs),
    /// Print a projection to stdout
    Project(ProjectArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, default_value = "₪", help = "Currency symbol used in labels and summaries")]
    pub currency_symbol: String,
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[arg(
        long,
        default_value_t = 1000.0,
        allow_negative_numbers = true,
        help = "Amount at year zero"
    )]
    pub initial_amount: f64,
    #[arg(
        long,
        default_value_t = 10.0,
        allow_negative_numbers = true,
        help = "Horizon in years; truncated and clamped to 1..=50 unless --strict"
    )]
    pub years: f64,
    #[arg(
        long,
        default_value_t = 2.5,
        allow_negative_numbers = true,
        help = "Expected annual inflation in percent"
    )]
    pub inflation_rate: f64,
    #[arg(
        long,
        default_value_t = 7.5,
        allow_negative_numbers = true,
        help = "Expected annual investment return in percent"
    )]
    pub investment_return: f64,
    #[arg(long, help = "Reject malformed inputs instead of substituting defaults")]
    pub strict: bool,
    #[arg(long, help = "Print the full report as JSON")]
    pub json: bool,
    #[arg(long, default_value = "₪", help = "Currency symbol used in the output")]
    pub currency_symbol: String,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectArgs {
    fn raw_input(&self) -> RawProjectionInput {
        RawProjectionInput {
            initial_amount: self.initial_amount,
            years: self.years,
            inflation_rate_percent: self.inflation_rate,
            investment_return_percent: self.investment_return,
        }
    }

    fn mode(&self) -> ValidationMode {
        if self.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }
}

pub async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Serve(args) => {
            let config = ServerConfig {
                currency: CurrencyFormat::new(args.currency_symbol),
            };
            run_http_server(&args.host, args.port, config).await?;
        }
        Command::Project(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_project(&args, &mut out)?;
        }
    }
    Ok(())
}

pub fn run_project<W: Write>(args: &ProjectArgs, out: &mut W) -> Result<(), CliError> {
    let currency = CurrencyFormat::new(args.currency_symbol.clone());
    let report = build_report(&args.raw_input(), args.mode(), &currency)?;
    tracing::debug!(years = report.input.years, "projection computed");

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write_text_report(&report, &currency, out)?;
    }
    Ok(())
}

fn write_text_report<W: Write>(
    report: &ProjectionReport,
    currency: &CurrencyFormat,
    out: &mut W,
) -> std::io::Result<()> {
    for line in &report.summary_lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{:>5}  {:>16}  {:>16}",
        "Year", "Invested", "Uninvested"
    )?;
    let rows = report
        .projection
        .time_points
        .iter()
        .zip(&report.projection.invested)
        .zip(&report.projection.uninvested);
    for ((year, invested), uninvested) in rows {
        writeln!(
            out,
            "{:>5}  {:>16}  {:>16}",
            year,
            currency.format(*invested),
            currency.format(*uninvested)
        )?;
    }
    Ok(())
}
