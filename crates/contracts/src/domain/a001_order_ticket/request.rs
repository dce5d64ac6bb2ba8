use super::aggregate::OrderId;
use crate::enums::OrderStatus;
use serde::{Deserialize, Serialize};

pub const GET_ORDERS_ACTION: &str = "getOrders";
pub const UPDATE_STATUS_ACTION: &str = "updateStatus";

/// Query string of the read endpoint: `?action=getOrders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersQuery {
    pub action: String,
}

impl Default for OrdersQuery {
    fn default() -> Self {
        Self {
            action: GET_ORDERS_ACTION.to_string(),
        }
    }
}

/// Body of the write endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub action: String,
    pub unique_id: OrderId,
    pub new_status: OrderStatus,
}

impl UpdateStatusRequest {
    pub fn new(unique_id: OrderId, new_status: OrderStatus) -> Self {
        Self {
            action: UPDATE_STATUS_ACTION.to_string(),
            unique_id,
            new_status,
        }
    }
}
