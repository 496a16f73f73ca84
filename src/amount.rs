use std::fmt;

/// Currency prefix shown in front of every displayed amount.
pub const CURRENCY_PREFIX: &str = "Rp. ";

const GROUP_SEPARATOR: char = '.';

/// A currency amount as typed by the user, in whole Rupiah.
///
/// Holds decimal digits only. An empty value means the field is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    /// Keeps only the ASCII digits of `text`. Signs, separators and decimal
    /// points are dropped, so fractional and negative input is not representable.
    pub fn sanitize(text: &str) -> Self {
        Self(text.chars().filter(|c| c.is_ascii_digit()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    /// The grouped display form, e.g. `1.250.000`.
    pub fn formatted(&self) -> String {
        format_display(&self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CURRENCY_PREFIX, self.formatted())
    }
}

/// Formats a raw digit string with `id-ID` grouping. Unset formats as `0`.
pub fn format_display(raw_digits: &str) -> String {
    let digits = raw_digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }
    group_digits(digits)
}

/// Formats a computed value: rounded half away from zero to a whole number,
/// then grouped. Anything that rounds to zero prints as `0`; overflowed
/// projections print as `∞` or `-∞`.
pub fn format_value(value: f64) -> String {
    let rounded = value.round();
    if rounded.is_nan() {
        return "NaN".to_string();
    }
    if rounded.is_infinite() {
        return if rounded > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    if rounded == 0.0 {
        return "0".to_string();
    }
    let digits = format!("{:.0}", rounded.abs());
    if rounded < 0.0 {
        format!("-{}", group_digits(&digits))
    } else {
        group_digits(&digits)
    }
}

/// `format_value` with the currency prefix.
pub fn format_currency(value: f64) -> String {
    format!("{}{}", CURRENCY_PREFIX, format_value(value))
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
