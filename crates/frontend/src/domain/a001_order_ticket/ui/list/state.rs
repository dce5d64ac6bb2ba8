use contracts::domain::a001_order_ticket::OrderBoard;
use leptos::prelude::*;

/// Create state signal
pub fn create_state() -> RwSignal<OrderBoard> {
    RwSignal::new(OrderBoard::default())
}

/// Board state provided by `OrderTicketList`
pub fn use_board() -> RwSignal<OrderBoard> {
    use_context::<RwSignal<OrderBoard>>().expect("OrderBoard context not found")
}
