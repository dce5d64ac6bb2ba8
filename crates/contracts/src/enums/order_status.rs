use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fulfillment status of an order row.
///
/// The remote sheet stores a free-form string; anything outside the three
/// known codes is kept verbatim in `Unknown` so it can still be shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Delivered,
    Cancelled,
    Unknown(String),
}

impl OrderStatus {
    /// Wire code of the status
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Human-readable label shown on a ticket
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "未提供",
            OrderStatus::Delivered => "提供済み",
            OrderStatus::Cancelled => "キャンセル",
            OrderStatus::Unknown(_) => "不明",
        }
    }

    /// Parse a wire code. Never fails: unknown codes become `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => OrderStatus::Pending,
            "delivered" => OrderStatus::Delivered,
            "cancelled" => OrderStatus::Cancelled,
            other => OrderStatus::Unknown(other.to_string()),
        }
    }

    /// Next status in the click cycle pending -> delivered -> cancelled -> pending.
    /// Unknown values restart the cycle at pending.
    pub fn rotate(&self) -> OrderStatus {
        match self {
            OrderStatus::Pending => OrderStatus::Delivered,
            OrderStatus::Delivered => OrderStatus::Cancelled,
            OrderStatus::Cancelled | OrderStatus::Unknown(_) => OrderStatus::Pending,
        }
    }

    /// CSS class used to color a ticket card
    pub fn css_class(&self) -> String {
        format!("status-{}", self.code())
    }
}

impl Default for OrderStatus {
    /// A missing status column is treated as unknown.
    fn default() -> Self {
        OrderStatus::Unknown(String::new())
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = crate::shared::wire::string_or_number(deserializer)?;
        Ok(OrderStatus::from_code(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_cycle() {
        assert_eq!(OrderStatus::Pending.rotate(), OrderStatus::Delivered);
        assert_eq!(OrderStatus::Delivered.rotate(), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::Cancelled.rotate(), OrderStatus::Pending);
    }

    #[test]
    fn test_rotate_unknown_goes_to_pending() {
        assert_eq!(
            OrderStatus::Unknown("served".to_string()).rotate(),
            OrderStatus::Pending
        );
        assert_eq!(OrderStatus::default().rotate(), OrderStatus::Pending);
    }

    #[test]
    fn test_three_rotations_return_to_start() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.rotate().rotate().rotate(), status);
        }
    }

    #[test]
    fn test_from_code_keeps_unknown_raw_value() {
        let status = OrderStatus::from_code("Pending");
        assert_eq!(status, OrderStatus::Unknown("Pending".to_string()));
        assert_eq!(status.display_name(), "不明");
        assert_eq!(status.css_class(), "status-Pending");
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");

        let parsed: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);

        let parsed: OrderStatus = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, OrderStatus::default());
    }
}
