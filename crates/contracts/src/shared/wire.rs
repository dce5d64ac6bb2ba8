//! Lenient field decoders for rows coming from the spreadsheet.
//!
//! Sheet cells arrive as strings or numbers depending on how they were typed,
//! so these accept either.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a cell as text. Numbers keep their JSON spelling, `null` is empty.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Decode a quantity cell.
///
/// Fractions round up (a ticket loop over `0 <= i < 2.5` emits three tickets);
/// anything non-numeric counts as zero.
pub fn quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number
        .filter(|n| n.is_finite())
        .map(|n| n.ceil() as i64)
        .unwrap_or(0))
}
