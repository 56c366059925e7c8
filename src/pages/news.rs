//! News articles page: table, add modal, per-row delete.
//!
//! The add payload is a [`NewsDraft`]; the backend stamps the publication
//! timestamp, which is why the table shows it but the form never asks.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use leptos::prelude::*;

use crate::net::http::HttpClient;
use crate::net::types::{NewsArticle, NewsDraft};
use crate::state::collection::{CollectionAction, CollectionState, Phase};
#[cfg(feature = "hydrate")]
use crate::state::ui::NoticeKind;
use crate::state::ui::UiState;
use crate::util::format::format_timestamp;

fn validate_news_input(
    title: &str,
    subtitle: &str,
    content: &str,
    author_name: &str,
) -> Result<NewsDraft, &'static str> {
    let title = title.trim();
    let subtitle = subtitle.trim();
    let content = content.trim();
    let author_name = author_name.trim();
    if title.is_empty() || subtitle.is_empty() || content.is_empty() || author_name.is_empty() {
        return Err("All article fields are required.");
    }
    Ok(NewsDraft {
        title: title.to_owned(),
        subtitle: subtitle.to_owned(),
        content: content.to_owned(),
        author_name: author_name.to_owned(),
    })
}

fn load_news(api: HttpClient, news: RwSignal<CollectionState<NewsArticle>>) {
    news.update(|s| s.apply(CollectionAction::FetchStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_news(&api).await {
            Ok(items) => news.update(|s| s.apply(CollectionAction::FetchSucceeded(items))),
            Err(e) => news.update(|s| s.apply(CollectionAction::FetchFailed(e.to_string()))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;
}

fn submit_news(
    api: HttpClient,
    news: RwSignal<CollectionState<NewsArticle>>,
    ui: RwSignal<UiState>,
    draft: NewsDraft,
) {
    news.update(|s| s.apply(CollectionAction::MutationStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::add_news(&api, &draft).await {
            Ok(()) => {
                news.update(|s| s.apply(CollectionAction::MutationSucceeded));
                ui.update(|u| u.push_notice(NoticeKind::Success, "News added successfully"));
                load_news(api, news);
            }
            Err(e) => {
                news.update(|s| s.apply(CollectionAction::MutationFailed(e.to_string())));
                ui.update(|u| u.push_notice(NoticeKind::Error, "Failed to add news"));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, ui, draft);
}

fn remove_news(
    api: HttpClient,
    news: RwSignal<CollectionState<NewsArticle>>,
    ui: RwSignal<UiState>,
    title: String,
) {
    news.update(|s| s.apply(CollectionAction::MutationStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_news(&api, &title).await {
            Ok(()) => {
                news.update(|s| s.apply(CollectionAction::MutationSucceeded));
                ui.update(|u| u.push_notice(NoticeKind::Success, "News deleted successfully"));
                load_news(api, news);
            }
            Err(e) => {
                news.update(|s| s.apply(CollectionAction::MutationFailed(e.to_string())));
                ui.update(|u| u.push_notice(NoticeKind::Error, "Failed to delete news"));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, ui, title);
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let api = expect_context::<HttpClient>();
    let news = expect_context::<RwSignal<CollectionState<NewsArticle>>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let requested = RwSignal::new(false);
    {
        let api = api.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            load_news(api.clone(), news);
        });
    }

    let show_add = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<String>);

    let on_add_cancel = Callback::new(move |_| show_add.set(false));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));

    let submit_api = api.clone();
    let on_add_submit = Callback::new(move |draft: NewsDraft| {
        show_add.set(false);
        submit_news(submit_api.clone(), news, ui, draft);
    });

    let delete_api = api.clone();
    let on_delete_confirm = Callback::new(move |_| {
        let Some(title) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        remove_news(delete_api.clone(), news, ui, title);
    });

    view! {
        <div class="page news-page">
            <div class="page__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || news.get().is_loading()
                    on:click=move |_| show_add.set(true)
                >
                    "Add News Article"
                </button>
            </div>

            <Show when=move || news.get().phase == Phase::Failed>
                <p class="page__error">{move || news.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !news.get().is_loading()
                fallback=move || view! { <p class="page__loading">"Loading news..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Subtitle"</th>
                            <th>"Author"</th>
                            <th>"Published"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            news.get()
                                .items
                                .into_iter()
                                .map(|article| {
                                    let title = article.title.clone();
                                    view! {
                                        <tr>
                                            <td>{article.title.clone()}</td>
                                            <td>{article.subtitle.clone()}</td>
                                            <td>{article.author_name.clone()}</td>
                                            <td>{format_timestamp(&article.timestamp)}</td>
                                            <td>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        delete_target.set(Some(title.clone()));
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || show_add.get()>
                <AddNewsDialog on_cancel=on_add_cancel on_submit=on_add_submit/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| on_delete_cancel.run(())>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete News"</h2>
                        <p class="dialog__danger">
                            {move || {
                                format!(
                                    "This will permanently delete \"{}\".",
                                    delete_target.get().unwrap_or_default()
                                )
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| on_delete_cancel.run(())>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=move |_| on_delete_confirm.run(())>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Modal form for a new article. No timestamp field by design.
#[component]
fn AddNewsDialog(on_cancel: Callback<()>, on_submit: Callback<NewsDraft>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let subtitle = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let author_name = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let Ok(draft) =
            validate_news_input(&title.get(), &subtitle.get(), &content.get(), &author_name.get())
        else {
            return;
        };
        on_submit.run(draft);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add News Article"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Subtitle"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || subtitle.get()
                        on:input=move |ev| subtitle.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Content"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Author"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || author_name.get()
                        on:input=move |ev| author_name.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add Article"
                    </button>
                </div>
            </div>
        </div>
    }
}
