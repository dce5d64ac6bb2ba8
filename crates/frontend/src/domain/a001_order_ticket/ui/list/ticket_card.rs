use contracts::domain::a001_order_ticket::{DisplayCard, OrderId};
use leptos::prelude::*;

/// One physical ticket. Clicking it cycles the status of its order.
#[component]
pub fn TicketCard(card: DisplayCard, on_click: Callback<OrderId>) -> impl IntoView {
    let order_id = card.order_id.clone();

    view! {
        <div
            class=format!("order-management-item {}", card.status_class)
            data-unique-id=card.order_id.to_string()
            on:click=move |_| on_click.run(order_id.clone())
        >
            <div class="item-header">
                <span class="item-time">{card.time_label}</span>
                <span class="item-table">{card.location_label}</span>
            </div>
            <div class="item-details">
                <span class="item-name">{card.product_name}</span>
                <span class="item-status-text">{card.status_label}</span>
            </div>
        </div>
    }
}
