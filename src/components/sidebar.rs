//! Navigation sidebar for the authenticated admin shell.

use leptos::prelude::*;
use leptos_router::components::A;

/// Fixed left-hand navigation over the five admin routes.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <span class="sidebar__brand">"CropDesk"</span>
            <A attr:class="sidebar__link" href="/">"Dashboard"</A>
            <A attr:class="sidebar__link" href="/tips">"Crop Tips"</A>
            <A attr:class="sidebar__link" href="/diseases">"Diseases"</A>
            <A attr:class="sidebar__link" href="/news">"News"</A>
            <A attr:class="sidebar__link" href="/history">"User History"</A>
        </nav>
    }
}
