//! User prediction-history page (read-only).

use leptos::prelude::*;

use crate::net::http::HttpClient;
use crate::net::types::HistoryRecord;
use crate::state::collection::{CollectionAction, CollectionState, Phase};
use crate::util::format::format_timestamp;

fn load_history(api: HttpClient, history: RwSignal<CollectionState<HistoryRecord>>) {
    history.update(|s| s.apply(CollectionAction::FetchStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_history(&api).await {
            Ok(items) => history.update(|s| s.apply(CollectionAction::FetchSucceeded(items))),
            Err(e) => history.update(|s| s.apply(CollectionAction::FetchFailed(e.to_string()))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let api = expect_context::<HttpClient>();
    let history = expect_context::<RwSignal<CollectionState<HistoryRecord>>>();

    let requested = RwSignal::new(false);
    {
        let api = api.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            load_history(api.clone(), history);
        });
    }

    view! {
        <div class="page history-page">
            <h2 class="page__title">"User History"</h2>

            <Show when=move || history.get().phase == Phase::Failed>
                <p class="page__error">{move || history.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !history.get().is_loading()
                fallback=move || view! { <p class="page__loading">"Loading history..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Username"</th>
                            <th>"Summary"</th>
                            <th>"Model Chosen"</th>
                            <th>"Crop Name"</th>
                            <th>"Image"</th>
                            <th>"Created At"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            history
                                .get()
                                .items
                                .into_iter()
                                .map(|record| {
                                    view! {
                                        <tr>
                                            <td>{record.image_id}</td>
                                            <td>{record.username.clone()}</td>
                                            <td>{record.summary.clone()}</td>
                                            <td>{record.model_chosen.clone()}</td>
                                            <td>{record.crop_name.clone()}</td>
                                            <td>
                                                {match record.processed_image_url.clone() {
                                                    Some(url) => view! {
                                                        <a
                                                            class="history-page__image-link"
                                                            href=url
                                                            target="_blank"
                                                        >
                                                            "View"
                                                        </a>
                                                    }
                                                        .into_any(),
                                                    None => view! {
                                                        <span class="history-page__no-image">
                                                            "No image"
                                                        </span>
                                                    }
                                                        .into_any(),
                                                }}
                                            </td>
                                            <td>{format_timestamp(&record.created_at)}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
