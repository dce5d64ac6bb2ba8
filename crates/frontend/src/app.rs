use crate::domain::a001_order_ticket::ui::list::OrderTicketList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::load_config;
use contracts::shared::labels;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Menu open/close state for the whole page
    provide_context(AppGlobalContext::new());

    let content = match load_config() {
        Ok(config) => {
            log::info!("Order gateway: {}", config.gateway.base_url);
            provide_context(config);
            view! { <OrderTicketList /> }.into_any()
        }
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            view! { <p class="error">{labels::LOAD_FAILED}</p> }.into_any()
        }
    };

    view! {
        <Shell>
            {content}
        </Shell>
    }
}
