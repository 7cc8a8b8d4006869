use super::types::ProjectionSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub group_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₪".to_string(),
            group_separator: ',',
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    // Zero decimals, halves away from zero: -12345.5 -> "-₪12,346".
    pub fn format(&self, amount: f64) -> String {
        if let Some((sign, text)) = non_finite_parts(amount) {
            return format!("{sign}{}{text}", self.symbol);
        }

        let rounded = amount.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", rounded.abs());
        format!(
            "{sign}{}{}",
            self.symbol,
            group_digits(&digits, self.group_separator)
        )
    }
}

fn non_finite_parts(value: f64) -> Option<(&'static str, &'static str)> {
    if value.is_nan() {
        Some(("", "NaN"))
    } else if value.is_infinite() {
        Some((if value < 0.0 { "-" } else { "" }, "∞"))
    } else {
        None
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

pub fn format_multiplier(ratio: f64) -> String {
    match non_finite_parts(ratio) {
        Some((sign, text)) => format!("{sign}{text}x"),
        None => format!("{ratio:.2}x"),
    }
}

pub fn summary_lines(summary: &ProjectionSummary, currency: &CurrencyFormat) -> Vec<String> {
    vec![
        format!("After {} years:", summary.years),
        format!("Invested Money: {}", currency.format(summary.final_invested)),
        format!(
            "Inflation-Adjusted Uninvested: {}",
            currency.format(summary.final_uninvested)
        ),
        format!("Difference: {}", currency.format(summary.difference)),
        format!(
            "Your money multiplied by: {}",
            format_multiplier(summary.invested_multiplier)
        ),
        format!(
            "Initial investment purchasing power changed by: {}",
            format_multiplier(summary.uninvested_multiplier)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_amounts_with_grouping() {
        let currency = CurrencyFormat::default();
        assert_eq!(currency.format(0.0), "₪0");
        assert_eq!(currency.format(999.0), "₪999");
        assert_eq!(currency.format(1000.0), "₪1,000");
        assert_eq!(currency.format(1_234_567.0), "₪1,234,567");
        assert_eq!(currency.format(100_000.0), "₪100,000");
    }

    #[test]
    fn rounds_to_zero_decimals() {
        let currency = CurrencyFormat::default();
        assert_eq!(currency.format(2061.03), "₪2,061");
        assert_eq!(currency.format(781.5), "₪782");
        assert_eq!(currency.format(-0.4), "₪0");
    }

    #[test]
    fn places_sign_before_symbol() {
        let currency = CurrencyFormat::new("$");
        assert_eq!(currency.format(-12_345.5), "-$12,346");
    }

    #[test]
    fn renders_non_finite_amounts() {
        let currency = CurrencyFormat::default();
        assert_eq!(currency.format(f64::NAN), "₪NaN");
        assert_eq!(currency.format(f64::INFINITY), "₪∞");
        assert_eq!(currency.format(f64::NEG_INFINITY), "-₪∞");
    }

    #[test]
    fn multiplier_uses_two_decimals() {
        assert_eq!(format_multiplier(2.0610315), "2.06x");
        assert_eq!(format_multiplier(0.64), "0.64x");
    }

    #[test]
    fn multiplier_renders_non_finite_like_currency() {
        assert_eq!(format_multiplier(f64::INFINITY), "∞x");
        assert_eq!(format_multiplier(f64::NEG_INFINITY), "-∞x");
        assert_eq!(format_multiplier(f64::NAN), "NaNx");
    }

    #[test]
    fn total_inflation_loss_summary_uses_infinity_sign_throughout() {
        let summary = ProjectionSummary {
            years: 10,
            initial_amount: 1000.0,
            final_invested: 2061.0,
            final_uninvested: f64::INFINITY,
            difference: f64::NEG_INFINITY,
            invested_multiplier: 2.061,
            uninvested_multiplier: f64::INFINITY,
        };
        let lines = summary_lines(&summary, &CurrencyFormat::default());
        assert_eq!(lines[2], "Inflation-Adjusted Uninvested: ₪∞");
        assert_eq!(lines[3], "Difference: -₪∞");
        assert_eq!(
            lines[5],
            "Initial investment purchasing power changed by: ∞x"
        );
        assert!(lines.iter().all(|line| !line.contains("inf")));
    }

    #[test]
    fn summary_lines_follow_display_order() {
        let summary = ProjectionSummary {
            years: 2,
            initial_amount: 1000.0,
            final_invested: 2250.0,
            final_uninvested: 640.0,
            difference: 1610.0,
            invested_multiplier: 2.25,
            uninvested_multiplier: 0.64,
        };
        let lines = summary_lines(&summary, &CurrencyFormat::default());
        assert_eq!(
            lines,
            vec![
                "After 2 years:",
                "Invested Money: ₪2,250",
                "Inflation-Adjusted Uninvested: ₪640",
                "Difference: ₪1,610",
                "Your money multiplied by: 2.25x",
                "Initial investment purchasing power changed by: 0.64x",
            ]
        );
    }
}
