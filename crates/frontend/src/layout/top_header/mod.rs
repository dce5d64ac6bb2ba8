//! Top bar with the hamburger button and the page title

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::labels;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="top-header">
            <button
                id="hamburgerMenu"
                class="hamburger-menu"
                on:click=move |_| ctx.toggle_menu()
                title="メニュー"
            >
                {icon("menu")}
            </button>
            <span class="top-header__title">{labels::PAGE_TITLE}</span>
        </div>
    }
}
