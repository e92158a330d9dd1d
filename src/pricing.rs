//! Currency text helpers for price inputs.
//!
//! Users type amounts with thousands separators (`1,234,567`) and expect a
//! short Korean magnitude label (`1억 2345만`) echoed underneath. None of these
//! functions fail; bad input degrades to `0`, an empty string, or
//! [`PLACEHOLDER`].

use serde::{Deserialize, Serialize};

/// Shown when there is no positive amount to describe
pub const PLACEHOLDER: &str = "-";

const HUNDRED_MILLION: i64 = 100_000_000;
const TEN_THOUSAND: i64 = 10_000;

/// Strip every non-digit character and parse what is left.
///
/// Empty input gives `0`. Values too large for `u64` saturate.
pub fn parse_digits_only(text: &str) -> u64 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d))
        })
}

/// Insert `,` every three digits. Non-digits are stripped first and leading
/// zeros dropped, so re-applying to the output changes nothing.
pub fn format_with_thousands_separators(text: &str) -> String {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Two-tier Korean magnitude label: `억` (10^8) and `만` (10^4).
///
/// Anything below 만 is dropped once a 억 component is present, so
/// `123_456_789` becomes `1억 2345만`.
pub fn format_abbreviated_magnitude(value: Option<i64>) -> String {
    let Some(value) = value.filter(|v| *v > 0) else {
        return PLACEHOLDER.to_string();
    };

    if value >= HUNDRED_MILLION {
        let eok = value / HUNDRED_MILLION;
        let man = (value % HUNDRED_MILLION) / TEN_THOUSAND;
        if man > 0 {
            format!("{eok}억 {man}만")
        } else {
            format!("{eok}억")
        }
    } else if value >= TEN_THOUSAND {
        format!("{}만", value / TEN_THOUSAND)
    } else {
        value.to_string()
    }
}

/// Magnitude label for raw input text, as shown under a price field.
pub fn abbreviate_input(text: &str) -> String {
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return PLACEHOLDER.to_string();
    }
    let value = i64::try_from(parse_digits_only(text)).unwrap_or(i64::MAX);
    format_abbreviated_magnitude(Some(value))
}

/// Inclusive amount bounds; `max: None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: i64,
    pub max: Option<i64>,
}

impl AmountRange {
    pub fn new(min: i64, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// Build bounds from the two free-text inputs of a range field.
    ///
    /// An empty or zero maximum is unbounded.
    pub fn parse(min_text: &str, max_text: &str) -> Self {
        let min = i64::try_from(parse_digits_only(min_text)).unwrap_or(i64::MAX);
        let max = match parse_digits_only(max_text) {
            0 => None,
            n => Some(i64::try_from(n).unwrap_or(i64::MAX)),
        };
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min <= 0 && self.max.is_none()
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    /// An absent value never fails the range.
    pub fn admits(&self, value: Option<i64>) -> bool {
        value.map_or(true, |v| self.contains(v))
    }
}
