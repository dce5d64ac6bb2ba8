use super::aggregate::Order;
use crate::shared::GatewayError;
use serde::Deserialize;

/// Envelope returned by the read endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<Order>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OrdersEnvelope {
    /// Rows of a successful envelope; a missing `data` field counts as empty.
    pub fn into_orders(self) -> Result<Vec<Order>, GatewayError> {
        if self.success {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(GatewayError::Rejected(self.error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::OrderStatus;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let envelope: OrdersEnvelope = serde_json::from_value(json!({
            "success": true,
            "data": [
                {"ID": 1, "日時": "2024-05-01T10:00:00Z", "テーブル番号": 2, "商品名": "枝豆", "数量": 1, "ステータス": "delivered"}
            ]
        }))
        .unwrap();

        let orders = envelope.into_orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Delivered);
    }

    #[test]
    fn test_success_without_data() {
        let envelope: OrdersEnvelope = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(envelope.into_orders().unwrap(), Vec::new());
    }

    #[test]
    fn test_rejected_envelope() {
        let envelope: OrdersEnvelope =
            serde_json::from_value(json!({"success": false, "error": "Sheet not found"})).unwrap();
        assert_eq!(
            envelope.into_orders(),
            Err(GatewayError::Rejected(Some("Sheet not found".to_string())))
        );
    }
}
