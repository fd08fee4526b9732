//! Lenient deserializers for fields the API may send as null, empty strings,
//! numbers, or strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de::Error};

use super::types::SocialStatus;

/// `null` or a missing field becomes an empty collection.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` becomes the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` becomes the empty string.
pub fn null_as_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional free text: `null` and blank strings both become `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Social status: blank strings count as not recorded.
pub fn optional_status<'de, D>(deserializer: D) -> Result<Option<SocialStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.map(SocialStatus::from))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

/// Record identifiers arrive as strings or integers; both are kept as text.
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) if s.trim().is_empty() => None,
        Some(RawId::Text(s)) => Some(s),
        Some(RawId::Number(n)) => Some(n.to_string()),
        None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Value(Decimal),
    Text(String),
}

/// Optional money value: a number, a numeric string, an empty string, or `null`.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDecimal>::deserialize(deserializer)? {
        Some(RawDecimal::Value(d)) => Ok(Some(d)),
        Some(RawDecimal::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawDecimal::Text(s)) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid amount '{s}'"))),
        None => Ok(None),
    }
}

/// Parse a disbursement timestamp: RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS`
/// (taken as UTC), or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

pub fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_all_timestamp_shapes() {
        let rfc = parse_timestamp("2024-06-01T10:30:00.000Z").unwrap();
        assert_eq!((rfc.month(), rfc.day(), rfc.hour()), (6, 1, 10));

        let naive = parse_timestamp("2024-06-01T10:30:00").unwrap();
        assert_eq!(naive, rfc);

        let date = parse_timestamp("2024-06-01").unwrap();
        assert_eq!(date.hour(), 0);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let dt = parse_timestamp("2024-06-01T01:00:00+02:00").unwrap();
        assert_eq!((dt.month(), dt.day(), dt.hour()), (5, 31, 23));
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-02-30").is_none());
    }
}
