pub mod filter_bar;
pub mod state;
pub mod ticket_card;

use crate::domain::a001_order_ticket::api;
use crate::shared::api_utils::alert;
use crate::shared::config::Config;
use chrono::Local;
use contracts::domain::a001_order_ticket::{LoadPhase, OrderId, ToggleOutcome};
use contracts::shared::labels;
use filter_bar::FilterBar;
use leptos::prelude::*;
use state::create_state;
use ticket_card::TicketCard;

/// Order management board: loads the snapshot once, renders one card per
/// physical ticket and cycles an order's status when a card is clicked.
#[component]
pub fn OrderTicketList() -> impl IntoView {
    let board = create_state();
    provide_context(board);

    let config = use_context::<Config>().expect("Config context not found");
    let base_url = config.gateway.base_url;

    // Initial load, exactly once per page
    let load_url = base_url.clone();
    Effect::new(move |_| {
        let load_url = load_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_orders(&load_url).await;
            if let Err(e) = &result {
                log::error!("Failed to load orders: {}", e);
            }
            board.update(|b| b.finish_load(result));
        });
    });

    let on_ticket_click = Callback::new(move |id: OrderId| {
        // Clicks during the initial load find an empty store
        let Some(change) = board.with_untracked(|b| b.plan_toggle(&id)) else {
            return;
        };
        let base_url = base_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::request_status_update(&base_url, &change.id, &change.to).await;
            match board.try_update_untracked(|b| b.complete_toggle(change, result)) {
                Some(ToggleOutcome::Applied(change)) => {
                    log::debug!("Order {} is now {}", change.id, change.to);
                    board.notify();
                }
                Some(ToggleOutcome::Failed(e)) => {
                    log::error!("Status update request failed: {}", e);
                    alert(labels::UPDATE_FAILED);
                }
                Some(ToggleOutcome::Stale) | None => {}
            }
        });
    });

    let list = move || {
        board.with(|b| match b.phase() {
            LoadPhase::Loading => view! { <p>{labels::LOADING}</p> }.into_any(),
            LoadPhase::Failed(_) => view! { <p class="error">{labels::LOAD_FAILED}</p> }.into_any(),
            LoadPhase::Ready => {
                let ticket_view = b.view(&Local);
                if ticket_view.is_empty() {
                    view! { <p>{labels::NO_ORDERS}</p> }.into_any()
                } else {
                    ticket_view
                        .cards
                        .into_iter()
                        .map(|card| view! { <TicketCard card=card on_click=on_ticket_click /> })
                        .collect_view()
                        .into_any()
                }
            }
        })
    };

    view! {
        <div class="order-management">
            <FilterBar />
            <div id="orderManagementList" class="order-management-list">
                {list}
            </div>
        </div>
    }
}
