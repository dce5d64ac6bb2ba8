//! Gateway to the order spreadsheet web app

use crate::shared::api_utils::orders_url;
use contracts::domain::a001_order_ticket::{Order, OrderId, OrdersEnvelope, UpdateStatusRequest};
use contracts::enums::OrderStatus;
use contracts::shared::GatewayError;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;

/// Fetch the full order snapshot
pub async fn fetch_orders(base_url: &str) -> Result<Vec<Order>, GatewayError> {
    let url = orders_url(base_url)?;
    log::debug!("Fetching orders from {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| GatewayError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(GatewayError::Http(response.status()));
    }

    let envelope: OrdersEnvelope = response
        .json()
        .await
        .map_err(|e| GatewayError::Parse(e.to_string()))?;

    let orders = envelope.into_orders()?;
    log::info!("Received {} orders", orders.len());
    Ok(orders)
}

/// Ask the service to change the status of one order.
///
/// Sent in `no-cors` mode, so the response is opaque: only a failure of the
/// fetch itself is reported. An HTTP-level rejection looks like success.
pub async fn request_status_update(
    base_url: &str,
    id: &OrderId,
    new_status: &OrderStatus,
) -> Result<(), GatewayError> {
    use web_sys::{Request as WebRequest, RequestInit, RequestMode};

    let body = serde_json::to_string(&UpdateStatusRequest::new(id.clone(), new_status.clone()))
        .map_err(|e| GatewayError::Encode(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::NoCors);
    opts.set_body(&JsValue::from_str(&body));

    let request = WebRequest::new_with_str_and_init(base_url, &opts)
        .map_err(|e| GatewayError::Network(format!("{e:?}")))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| GatewayError::Network(format!("{e:?}")))?;

    let window = web_sys::window().ok_or_else(|| GatewayError::Network("no window".to_string()))?;
    wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| GatewayError::Network(format!("{e:?}")))?;

    log::info!("Requested status update {} -> {}", id, new_status);
    Ok(())
}
