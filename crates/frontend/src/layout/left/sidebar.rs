//! Slide-in side menu and the overlay that closes it

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::labels;
use leptos::prelude::*;

/// (href, label, icon)
const MENU_ITEMS: &[(&str, &str, &str)] = &[("./", labels::PAGE_TITLE, "orders")];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav id="sideMenu" class="side-menu" class:open=move || ctx.menu_open.get()>
            <ul>
                {MENU_ITEMS
                    .iter()
                    .map(|(href, label, icon_name)| {
                        view! {
                            <li>
                                <a href=*href on:click=move |_| ctx.close_menu()>
                                    {icon(icon_name)}
                                    <span>{*label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
pub fn Overlay() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div
            id="overlay"
            class="overlay"
            class:active=move || ctx.menu_open.get()
            on:click=move |_| ctx.close_menu()
        ></div>
    }
}
