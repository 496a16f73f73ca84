use serde::Serialize;

use crate::error::ValidationError;

/// Average number of weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Savings projected over each horizon. All fields are written together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SavingsResult {
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
    pub six_months: f64,
    pub five_years: f64,
}

impl SavingsResult {
    pub const CHART_LABELS: [&'static str; 3] = ["Weekly", "Monthly", "Yearly"];

    /// The points fed to the chart, in `CHART_LABELS` order.
    pub fn chart_series(&self) -> [f64; 3] {
        [self.weekly, self.monthly, self.yearly]
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Derives the six projections from the raw field contents.
///
/// Costs parse as floats and the frequency as a base-10 integer, both taking
/// the longest numeric prefix. A negative difference is allowed and carries
/// its sign through every output.
pub fn calculate(
    old_habit_cost: &str,
    new_habit_cost: &str,
    frequency: &str,
) -> Result<SavingsResult, ValidationError> {
    let old_cost = parse_float_prefix(old_habit_cost).ok_or(ValidationError)?;
    let new_cost = parse_float_prefix(new_habit_cost).ok_or(ValidationError)?;
    let frequency = parse_int_prefix(frequency).ok_or(ValidationError)?;

    let weekly = (old_cost - new_cost) * frequency;
    let daily = weekly / DAYS_PER_WEEK;
    let monthly = weekly * WEEKS_PER_MONTH;
    let yearly = weekly * WEEKS_PER_YEAR;
    let six_months = monthly * 6.0;
    let five_years = yearly * 5.0;

    Ok(SavingsResult {
        daily,
        weekly,
        monthly,
        yearly,
        six_months,
        five_years,
    })
}

fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_int_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
