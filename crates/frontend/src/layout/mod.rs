pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use left::{Overlay, Sidebar};
use top_header::TopHeader;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// | [=] TopHeader                             |
/// +------------------------------------------+
/// |                 content                   |
/// +------------------------------------------+
/// ```
///
/// The side menu slides over the content; the overlay behind it closes it.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <Sidebar />
            <Overlay />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
