//! Lenient decoders for API payloads.
//!
//! The report API is loose about nulls, id types and date formats. These
//! helpers normalise those quirks at the decoding boundary so aggregation
//! code only ever sees well-formed values.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl AmountRepr {
    fn into_decimal(self) -> Result<Option<Decimal>, String> {
        match self {
            Self::Int(n) => Ok(Some(Decimal::from(n))),
            Self::UInt(n) => Ok(Some(Decimal::from(n))),
            // Shortest round-trip text, so 12.34 stays 12.34.
            Self::Float(f) => Decimal::from_str(&f.to_string())
                .or_else(|_| Decimal::from_scientific(&format!("{:e}", f)))
                .map(Some)
                .map_err(|e| format!("invalid amount {}: {}", f, e)),
            Self::Text(s) if s.trim().is_empty() => Ok(None),
            Self::Text(s) => Decimal::from_str(s.trim())
                .map(Some)
                .map_err(|e| format!("invalid amount {:?}: {}", s, e)),
        }
    }
}

/// Amount sent as a JSON number or a numeric string. `null` and an empty
/// string become `None`.
pub fn optional_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<AmountRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(repr) => repr.into_decimal().map_err(de::Error::custom),
    }
}

/// Amount that may be `null` or absent; both become zero.
///
/// Use together with `#[serde(default)]` so an absent field also lands here.
pub fn amount_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_amount(deserializer)?.unwrap_or(Decimal::ZERO))
}

/// `null` becomes `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    UInt(u64),
}

/// Identifier sent either as a string or as an integer.
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::UInt(n) => n.to_string(),
    })
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 timestamps.
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date())
}

/// Optional date in any of the forms [`parse_api_date`] understands.
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_api_date(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw))),
    }
}
