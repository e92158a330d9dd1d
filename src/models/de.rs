//! Lenient deserializers for backend rows.
//!
//! Rows come from a hand-edited table, so numbers show up as strings with
//! thousands separators, flags as `"O"`/`"X"`, and usage as either a string
//! or a list. None of that should fail a bulk read.

use super::{TradeType, UsageCategories};
use crate::pricing;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum UsageField {
    Many(Vec<Option<String>>),
    One(String),
    Missing(()),
}

impl From<UsageField> for UsageCategories {
    fn from(field: UsageField) -> Self {
        match field {
            UsageField::Many(items) => UsageCategories::new(items.into_iter().flatten()),
            UsageField::One(single) => UsageCategories::new([single]),
            UsageField::Missing(()) => UsageCategories::default(),
        }
    }
}

pub(crate) fn unknown_trade_type() -> TradeType {
    TradeType::Other(String::new())
}

/// Any string maps through [`TradeType::from`]; null or a non-string value
/// becomes an unknown trade type.
pub(crate) fn loose_trade_type<'de, D>(deserializer: D) -> Result<TradeType, D::Error>
where
    D: Deserializer<'de>,
{
    let trade = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => TradeType::from(s),
        _ => unknown_trade_type(),
    };
    Ok(trade)
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Number, numeric string (separators allowed), empty string or null.
///
/// Strings follow numbers: the sign is kept and a fractional part is
/// truncated, so `"12.9"` and `12.9` both read as 12.
pub(crate) fn loose_amount<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => amount_from_text(&s),
        _ => None,
    };
    Ok(amount)
}

fn amount_from_text(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let whole = unsigned.split('.').next().unwrap_or_default();
    if !whole.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let magnitude = i64::try_from(pricing::parse_digits_only(whole)).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Boolean, or the legacy `"O"` / `"X"` markers.
pub(crate) fn loose_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(s.trim(), "O" | "o" | "true" | "가능"),
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    };
    Ok(flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "loose_amount")]
        amount: Option<i64>,
        #[serde(default, deserialize_with = "loose_flag")]
        flag: bool,
    }

    fn row(value: Value) -> Row {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn amounts_accept_numbers_and_formatted_strings() {
        assert_eq!(row(json!({"amount": 1500})).amount, Some(1500));
        assert_eq!(row(json!({"amount": "1,500"})).amount, Some(1500));
        assert_eq!(row(json!({"amount": 12.9})).amount, Some(12));
    }

    #[test]
    fn amount_strings_keep_sign_and_truncate_like_numbers() {
        assert_eq!(row(json!({"amount": "12.9"})).amount, Some(12));
        assert_eq!(row(json!({"amount": "1,234.5"})).amount, Some(1234));
        assert_eq!(row(json!({"amount": "-500"})).amount, Some(-500));
        assert_eq!(row(json!({"amount": " -1,000 "})).amount, Some(-1000));
        assert_eq!(row(json!({"amount": ".5"})).amount, None);
    }

    #[test]
    fn blank_amounts_are_absent_not_zero() {
        assert_eq!(row(json!({"amount": ""})).amount, None);
        assert_eq!(row(json!({"amount": null})).amount, None);
        assert_eq!(row(json!({})).amount, None);
        assert_eq!(row(json!({"amount": 0})).amount, Some(0));
    }

    #[test]
    fn flags_accept_legacy_markers() {
        assert!(row(json!({"flag": "O"})).flag);
        assert!(!row(json!({"flag": "X"})).flag);
        assert!(row(json!({"flag": true})).flag);
        assert!(!row(json!({})).flag);
    }

    #[test]
    fn usage_list_skips_nulls() {
        let usage: UsageCategories = serde_json::from_value(json!(["상가", null, "사무실"])).unwrap();
        assert_eq!(usage.as_slice(), &["상가".to_string(), "사무실".to_string()]);
        let missing: UsageCategories = serde_json::from_value(json!(null)).unwrap();
        assert!(missing.is_empty());
    }
}
