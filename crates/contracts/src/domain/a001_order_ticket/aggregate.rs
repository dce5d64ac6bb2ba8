use crate::enums::OrderStatus;
use crate::shared::{labels, wire};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of an order row.
///
/// The sheet may send it as a number or a string; both normalize to text so
/// `12` and `"12"` refer to the same row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for OrderId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        wire::string_or_number(deserializer).map(OrderId)
    }
}

/// Naive timestamp layouts the sheet is known to produce, read as local time
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// One spreadsheet row. A row with `quantity = n` stands for `n` identical
/// physical tickets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "ID", default)]
    pub id: OrderId,
    /// Raw timestamp as sent by the sheet
    #[serde(rename = "日時", default, deserialize_with = "wire::string_or_number")]
    pub placed_at: String,
    /// Table number, or `Takeout`
    #[serde(rename = "テーブル番号", default, deserialize_with = "wire::string_or_number")]
    pub table: String,
    #[serde(rename = "商品名", default, deserialize_with = "wire::string_or_number")]
    pub product_name: String,
    #[serde(rename = "数量", default, deserialize_with = "wire::quantity")]
    pub quantity: i64,
    #[serde(rename = "ステータス", default)]
    pub status: OrderStatus,
}

impl Order {
    /// Parsed order time in `tz`, or `None` if the sheet value is not a date
    pub fn placed_at_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        parse_timestamp(&self.placed_at, tz)
    }

    pub fn is_takeout(&self) -> bool {
        self.table == labels::TAKEOUT_SENTINEL
    }

    /// "テイクアウト" or "テーブル: N"
    pub fn location_label(&self) -> String {
        if self.is_takeout() {
            labels::TAKEOUT.to_string()
        } else {
            format!("{}{}", labels::TABLE_PREFIX, self.table)
        }
    }

    /// Number of ticket cards this row expands to
    pub fn ticket_count(&self) -> usize {
        usize::try_from(self.quantity).unwrap_or(0)
    }
}

fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }

    // Epoch milliseconds
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw
            .parse::<i64>()
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.with_timezone(tz));
    }

    NAIVE_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(raw, format)
            .ok()
            .and_then(|naive| tz.from_local_datetime(&naive).earliest())
    })
}

/// `HH:MM` in 24-hour form, or a placeholder for unparseable timestamps
pub fn format_time_of_day<Tz>(placed_at: Option<&DateTime<Tz>>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    placed_at
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| labels::UNKNOWN_TIME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};
    use serde_json::json;

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn test_deserialize_sheet_row() {
        let order: Order = serde_json::from_value(json!({
            "ID": 17,
            "日時": "2024-05-01T03:12:00.000Z",
            "テーブル番号": 5,
            "商品名": "唐揚げ",
            "数量": 2,
            "ステータス": "pending"
        }))
        .unwrap();

        assert_eq!(order.id, OrderId::from("17"));
        assert_eq!(order.table, "5");
        assert_eq!(order.product_name, "唐揚げ");
        assert_eq!(order.quantity, 2);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_missing_status_is_unknown() {
        let order: Order = serde_json::from_value(json!({
            "ID": "a1",
            "日時": "2024-05-01T03:12:00.000Z",
            "テーブル番号": "Takeout",
            "商品名": "ラーメン",
            "数量": 1
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::default());
        assert_eq!(order.status.display_name(), "不明");
    }

    #[test]
    fn test_location_label() {
        let mut order: Order = serde_json::from_value(json!({"ID": 1, "テーブル番号": "Takeout"})).unwrap();
        assert!(order.is_takeout());
        assert_eq!(order.location_label(), "テイクアウト");

        order.table = "12".to_string();
        assert_eq!(order.location_label(), "テーブル: 12");
    }

    #[test]
    fn test_ticket_count_clamps_negative() {
        let order: Order = serde_json::from_value(json!({"ID": 1, "数量": -2})).unwrap();
        assert_eq!(order.ticket_count(), 0);
    }

    #[test]
    fn test_parse_rfc3339_into_local_zone() {
        let dt = parse_timestamp("2024-05-01T03:12:00.000Z", &jst()).unwrap();
        assert_eq!((dt.hour(), dt.minute()), (12, 12));
        assert_eq!(format_time_of_day(Some(&dt)), "12:12");
    }

    #[test]
    fn test_parse_naive_as_local_time() {
        let dt = parse_timestamp("2024/05/01 09:05:00", &jst()).unwrap();
        assert_eq!(format_time_of_day(Some(&dt)), "09:05");

        let dt = parse_timestamp("2024-05-01 18:30", &jst()).unwrap();
        assert_eq!(format_time_of_day(Some(&dt)), "18:30");
    }

    #[test]
    fn test_parse_epoch_millis() {
        let dt = parse_timestamp("0", &jst()).unwrap();
        assert_eq!(format_time_of_day(Some(&dt)), "09:00");
    }

    #[test]
    fn test_unparseable_timestamp() {
        assert!(parse_timestamp("yesterday", &jst()).is_none());
        assert!(parse_timestamp("", &jst()).is_none());
        assert_eq!(format_time_of_day::<FixedOffset>(None), "--:--");
    }
}
