use super::state::use_board;
use contracts::enums::StatusFilter;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Status filter buttons. The selected value comes from each button's
/// `data-filter` attribute; switching re-renders from the held snapshot.
#[component]
pub fn FilterBar() -> impl IntoView {
    let board = use_board();

    let select = move |ev: MouseEvent| {
        let code = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("data-filter"));

        match code.as_deref().and_then(StatusFilter::from_code) {
            Some(filter) => board.update(|b| b.set_filter(filter)),
            None => log::warn!("Unknown filter value: {:?}", code),
        }
    };

    view! {
        <div class="filter-buttons">
            {StatusFilter::all()
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class="filter-btn"
                            class:active=move || board.with(|b| b.filter()) == filter
                            data-filter=filter.code()
                            on:click=select
                        >
                            {filter.display_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
