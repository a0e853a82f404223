//! Wire shapes shared by every collection, plus value parsing helpers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use catalog_core::{EntityKind, ExternalId};

/// One page of a remote collection.
///
/// `results` stays raw so that a record of the wrong shape can be skipped
/// without losing the rest of the page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPage {
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Option<Vec<serde_json::Value>>,
}

/// Scalar text field. Numbers and booleans are kept as their text; other
/// non-string values are dropped.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }))
}

/// Integer field given either as a number or as numeric text.
pub(crate) fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match &value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number.as_i64().and_then(|n| i32::try_from(n).ok()),
        Some(Value::String(text)) => text.trim().parse().ok(),
        Some(_) => None,
    };
    if parsed.is_none() {
        tracing::warn!("Ignoring non-integer value {value:?}");
    }
    Ok(parsed)
}

/// List of resource references. Non-string elements are kept as `None` so the
/// linker counts them as malformed; a non-list value counts as one malformed
/// element and `null` as an empty list.
pub(crate) fn reference_list<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().map(reference).collect(),
        Some(other) => vec![reference(other)],
    })
}

/// Single resource reference. `null` means no reference; any other non-string
/// value becomes `Some(None)`, a malformed reference.
pub(crate) fn single_reference<'de, D>(
    deserializer: D,
) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(value) => Some(reference(value)),
    })
}

fn reference(value: Value) -> Option<String> {
    match value {
        Value::String(url) => Some(url),
        _ => None,
    }
}

/// Owned copy of an optional text field.
pub(crate) fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Parse an RFC 3339 timestamp. Unparseable values are logged and dropped.
pub(crate) fn parse_timestamp(
    value: Option<&str>,
    field: &str,
    kind: EntityKind,
    external_id: ExternalId,
) -> Option<DateTime<Utc>> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!("Ignoring {kind} {external_id} {field} '{value}': {e}");
            None
        }
    }
}

/// Parse a `YYYY-MM-DD` date. Unparseable values are logged and dropped.
pub(crate) fn parse_date(
    value: Option<&str>,
    field: &str,
    kind: EntityKind,
    external_id: ExternalId,
) -> Option<NaiveDate> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Ignoring {kind} {external_id} {field} '{value}': {e}");
            None
        }
    }
}
