//! Helpers shared by the gateway calls

use contracts::domain::a001_order_ticket::OrdersQuery;
use contracts::shared::GatewayError;

/// URL of the read endpoint: `<base>?action=getOrders`
pub fn orders_url(base_url: &str) -> Result<String, GatewayError> {
    let query = serde_qs::to_string(&OrdersQuery::default())
        .map_err(|e| GatewayError::Encode(e.to_string()))?;
    let separator = if base_url.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", base_url, separator, query))
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
