//! Number and result formatting.

use fincalc_core::{Recommendation, Scenario, VariableSpec};

use crate::styles::{render_bold, render_solved, render_warn};

/// Formats `value` with `precision` decimals, adding `%` for percentage
/// variables when `percent_suffix` is on.
pub fn format_value(value: f64, percentage: bool, precision: usize, percent_suffix: bool) -> String {
    let mut out = format!("{value:.precision$}");
    // -0.0, and negatives that round to zero, print unsigned.
    if out.starts_with('-') && out[1..].chars().all(|c| c == '0' || c == '.') {
        out.remove(0);
    }
    if percentage && percent_suffix {
        out.push('%');
    }
    out
}

/// Display settings shared by every printed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub precision: usize,
    pub percent_suffix: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            percent_suffix: true,
        }
    }
}

impl NumberFormat {
    /// Formats a value of `var`.
    pub fn value(&self, var: &VariableSpec, value: f64) -> String {
        format_value(value, var.percentage, self.precision, self.percent_suffix)
    }

    /// Formats a plain amount (no percentage handling).
    pub fn amount(&self, value: f64) -> String {
        format_value(value, false, self.precision, false)
    }

    /// The `Label: value` line printed after a solve.
    pub fn result_line(&self, var: &VariableSpec, value: f64) -> String {
        format!("{}: {}", var.label, render_solved(&self.value(var, value)))
    }

    /// Human-readable lines describing a transfer pricing recommendation.
    pub fn recommendation_lines(&self, scenario: Scenario, rec: &Recommendation) -> Vec<String> {
        let heading = render_bold(&scenario_heading(scenario));
        let mut lines = Vec::new();
        match *rec {
            Recommendation::FixedPrice { value } => {
                lines.push(format!(
                    "In {heading}, the optimal internal transfer price is: {}",
                    render_solved(&self.amount(value))
                ));
            }
            Recommendation::Range { low, high, .. } | Recommendation::RangeInvalid { low, high } => {
                lines.push(format!(
                    "In {heading}, the optimal internal transfer price should be between: {} and {}",
                    render_bold(&self.amount(low)),
                    render_bold(&self.amount(high))
                ));
            }
        }
        lines.push(rec.explanation().to_string());

        if let Recommendation::Range { midpoint, .. } = *rec {
            lines.push(format!(
                "Recommendation: A balanced approach would be to set the price at the midpoint: {}",
                render_solved(&self.amount(midpoint))
            ));
        }
        if let Some(warning) = rec.warning() {
            lines.push(render_warn(&format!("Warning: {warning}")));
        }
        lines
    }
}

/// `Scenario 1: NO available capacity` -> `Scenario 1 (NO available capacity)`.
fn scenario_heading(scenario: Scenario) -> String {
    match scenario.label().split_once(": ") {
        Some((head, detail)) => format!("{head} ({detail})"),
        None => scenario.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::set_color_mode;
    use fincalc_config::ColorMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_decimals() {
        assert_eq!(format_value(50.0, false, 2, true), "50.00");
        assert_eq!(format_value(1.0 / 3.0, false, 4, true), "0.3333");
        assert_eq!(format_value(-4.3, false, 0, true), "-4");
    }

    #[test]
    fn percentage_suffix() {
        assert_eq!(format_value(25.0, true, 2, true), "25.00%");
        assert_eq!(format_value(25.0, true, 2, false), "25.00");
        assert_eq!(format_value(25.0, false, 2, true), "25.00");
    }

    #[test]
    fn zero_is_never_signed() {
        assert_eq!(format_value(-0.0, true, 2, true), "0.00%");
        assert_eq!(format_value(-0.0, false, 0, true), "0");
        assert_eq!(format_value(-0.001, false, 2, true), "0.00");
        assert_eq!(format_value(-0.01, false, 2, true), "-0.01");
    }

    #[test]
    fn result_line_uses_label() {
        set_color_mode(ColorMode::Never);
        let var = VariableSpec::number("operatingProfitMargin", "Operating Profit Margin (%)")
            .percent();
        let fmt = NumberFormat::default();
        assert_eq!(
            fmt.result_line(&var, 25.0),
            "Operating Profit Margin (%): 25.00%"
        );
    }

    #[test]
    fn recommendation_range() {
        set_color_mode(ColorMode::Never);
        let rec = Recommendation::Range {
            low: 40.0,
            high: 60.0,
            midpoint: 50.0,
        };
        let lines = NumberFormat::default().recommendation_lines(Scenario::SpareCapacity, &rec);
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "In Scenario 2 (HAS available capacity), the optimal internal transfer price should be between: 40.00 and 60.00"
        );
        assert!(lines[2].ends_with("midpoint: 50.00"));
    }

    #[test]
    fn recommendation_fixed_and_invalid() {
        set_color_mode(ColorMode::Never);
        let fmt = NumberFormat::default();

        let fixed = fmt.recommendation_lines(
            Scenario::NoSpareCapacity,
            &Recommendation::FixedPrice { value: 120.0 },
        );
        assert_eq!(
            fixed[0],
            "In Scenario 1 (NO available capacity), the optimal internal transfer price is: 120.00"
        );
        assert_eq!(fixed.len(), 2);

        let invalid = fmt.recommendation_lines(
            Scenario::SpareCapacity,
            &Recommendation::RangeInvalid {
                low: 70.0,
                high: 60.0,
            },
        );
        assert_eq!(invalid.len(), 3);
        assert!(invalid[2].starts_with("Warning: The supplier's variable cost exceeds"));
    }
}
