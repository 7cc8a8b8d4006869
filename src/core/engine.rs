use super::types::{
    DEFAULT_INFLATION_RATE_PERCENT, DEFAULT_INITIAL_AMOUNT, DEFAULT_INVESTMENT_RETURN_PERCENT,
    DEFAULT_YEARS, MAX_YEARS, MIN_YEARS, ProjectionError, ProjectionInput, ProjectionResult,
    ProjectionSummary, RawProjectionInput, ValidationMode,
};

pub fn validate_input(
    raw: &RawProjectionInput,
    mode: ValidationMode,
) -> Result<ProjectionInput, ProjectionError> {
    match mode {
        ValidationMode::Lenient => Ok(lenient_input(raw)),
        ValidationMode::Strict => strict_input(raw),
    }
}

fn lenient_input(raw: &RawProjectionInput) -> ProjectionInput {
    let initial_amount = if raw.initial_amount.is_finite() && raw.initial_amount > 0.0 {
        raw.initial_amount
    } else {
        DEFAULT_INITIAL_AMOUNT
    };

    let years = if raw.years.is_finite() && raw.years >= 1.0 {
        raw.years.trunc().clamp(MIN_YEARS as f64, MAX_YEARS as f64) as u32
    } else {
        DEFAULT_YEARS
    };

    let inflation_rate_percent = if raw.inflation_rate_percent.is_finite() {
        raw.inflation_rate_percent
    } else {
        DEFAULT_INFLATION_RATE_PERCENT
    };

    let investment_return_percent = if raw.investment_return_percent.is_finite() {
        raw.investment_return_percent
    } else {
        DEFAULT_INVESTMENT_RETURN_PERCENT
    };

    ProjectionInput {
        initial_amount,
        years,
        inflation_rate_percent,
        investment_return_percent,
    }
}

fn strict_input(raw: &RawProjectionInput) -> Result<ProjectionInput, ProjectionError> {
    if !raw.initial_amount.is_finite() || raw.initial_amount <= 0.0 {
        return Err(ProjectionError::InvalidInitialAmount(raw.initial_amount));
    }

    if !raw.years.is_finite() || raw.years < MIN_YEARS as f64 {
        return Err(ProjectionError::InvalidYears(raw.years));
    }
    let years = raw.years.trunc();
    if years > MAX_YEARS as f64 {
        return Err(ProjectionError::InvalidYears(raw.years));
    }

    if !is_valid_rate(raw.inflation_rate_percent) {
        return Err(ProjectionError::InvalidInflationRate(
            raw.inflation_rate_percent,
        ));
    }

    if !is_valid_rate(raw.investment_return_percent) {
        return Err(ProjectionError::InvalidInvestmentReturn(
            raw.investment_return_percent,
        ));
    }

    Ok(ProjectionInput {
        initial_amount: raw.initial_amount,
        years: years as u32,
        inflation_rate_percent: raw.inflation_rate_percent,
        investment_return_percent: raw.investment_return_percent,
    })
}

// A rate of -100% or less leaves a non-positive base for the yearly factor.
fn is_valid_rate(rate_percent: f64) -> bool {
    rate_percent.is_finite() && rate_percent > -100.0
}

// Each term is computed on its own with `powf`, never by repeated multiplication.
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let growth = 1.0 + input.investment_return_percent / 100.0;
    let erosion = 1.0 + input.inflation_rate_percent / 100.0;

    let time_points: Vec<u32> = (0..=input.years).collect();
    let invested = time_points
        .iter()
        .map(|&year| input.initial_amount * growth.powf(year as f64))
        .collect();
    let uninvested = time_points
        .iter()
        .map(|&year| input.initial_amount / erosion.powf(year as f64))
        .collect();

    ProjectionResult {
        time_points,
        invested,
        uninvested,
    }
}

pub fn summarize(input: &ProjectionInput, result: &ProjectionResult) -> ProjectionSummary {
    let final_invested = result.final_invested();
    let final_uninvested = result.final_uninvested();

    ProjectionSummary {
        years: input.years,
        initial_amount: input.initial_amount,
        final_invested,
        final_uninvested,
        difference: final_invested - final_uninvested,
        invested_multiplier: final_invested / input.initial_amount,
        uninvested_multiplier: final_uninvested / input.initial_amount,
    }
}
