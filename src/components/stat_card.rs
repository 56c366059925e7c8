//! Count card for the dashboard grid.

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;

use leptos::prelude::*;

/// Render a count, or a placeholder when the joined fetch failed. A
/// failed fetch must never be mislabeled as "0 records".
fn stat_display(value: Option<usize>) -> String {
    value.map_or_else(|| "—".to_owned(), |v| v.to_string())
}

/// One titled count card.
#[component]
pub fn StatCard(#[prop(into)] title: String, value: Option<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{title}</span>
            <span class="stat-card__value">{stat_display(value)}</span>
        </div>
    }
}
