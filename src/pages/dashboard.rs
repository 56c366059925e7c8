//! Dashboard page: record counts across tips, diseases, and news.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The three list calls go out
//! concurrently and are joined before any state update; if one fails the
//! whole update is aborted with a single notice, so a failed fetch can
//! never masquerade as an empty collection.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::http::ApiError;
use crate::net::http::HttpClient;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Disease, NewsArticle, Tip};
use crate::state::collection::Phase;
use crate::state::dashboard::{DashboardAction, DashboardState};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::dashboard::DashboardStats;
#[cfg(feature = "hydrate")]
use crate::state::ui::NoticeKind;
use crate::state::ui::UiState;

/// All-or-nothing join: the first failure wins and no partial counts
/// survive it.
#[cfg(any(test, feature = "hydrate"))]
fn join_counts(
    tips: Result<Vec<Tip>, ApiError>,
    diseases: Result<Vec<Disease>, ApiError>,
    news: Result<Vec<NewsArticle>, ApiError>,
) -> Result<DashboardStats, ApiError> {
    let tips = tips?;
    let diseases = diseases?;
    let news = news?;
    Ok(DashboardStats {
        total_tips: tips.len(),
        total_diseases: diseases.len(),
        total_news: news.len(),
    })
}

fn load_stats(api: HttpClient, dashboard: RwSignal<DashboardState>, ui: RwSignal<UiState>) {
    dashboard.update(|s| s.apply(DashboardAction::FetchStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (tips, diseases, news) = futures::join!(
            crate::net::api::fetch_tips(&api),
            crate::net::api::fetch_diseases(&api),
            crate::net::api::fetch_news(&api),
        );
        match join_counts(tips, diseases, news) {
            Ok(stats) => dashboard.update(|s| s.apply(DashboardAction::FetchSucceeded(stats))),
            Err(e) => {
                dashboard.update(|s| s.apply(DashboardAction::FetchFailed(e.to_string())));
                ui.update(|u| {
                    u.push_notice(NoticeKind::Error, "Failed to fetch dashboard stats");
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, ui);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<HttpClient>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let requested = RwSignal::new(false);
    {
        let api = api.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            load_stats(api.clone(), dashboard, ui);
        });
    }

    view! {
        <div class="page dashboard-page">
            <Show when=move || dashboard.get().phase == Phase::Failed>
                <p class="page__error">{move || dashboard.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !dashboard.get().is_loading()
                fallback=move || view! { <p class="page__loading">"Loading dashboard..."</p> }
            >
                <div class="dashboard-page__grid">
                    {move || {
                        let stats = dashboard.get().stats;
                        view! {
                            <StatCard
                                title="Total Crop Tips"
                                value=stats.map(|s| s.total_tips)
                            />
                            <StatCard
                                title="Total Diseases"
                                value=stats.map(|s| s.total_diseases)
                            />
                            <StatCard
                                title="Total News Articles"
                                value=stats.map(|s| s.total_news)
                            />
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
