//! Crop tips page: table, add modal, per-row delete.

#[cfg(test)]
#[path = "tips_test.rs"]
mod tips_test;

use leptos::prelude::*;

use crate::net::http::HttpClient;
use crate::net::types::Tip;
use crate::state::collection::{CollectionAction, CollectionState, Phase};
#[cfg(feature = "hydrate")]
use crate::state::ui::NoticeKind;
use crate::state::ui::UiState;

/// Required-field presence only; duplicate keys are the backend's call.
fn validate_tip_input(crop_name: &str, crop_tips: &str) -> Result<Tip, &'static str> {
    let crop_name = crop_name.trim();
    let crop_tips = crop_tips.trim();
    if crop_name.is_empty() || crop_tips.is_empty() {
        return Err("Enter both crop name and tips.");
    }
    Ok(Tip { crop_name: crop_name.to_owned(), crop_tips: crop_tips.to_owned() })
}

fn load_tips(api: HttpClient, tips: RwSignal<CollectionState<Tip>>) {
    tips.update(|s| s.apply(CollectionAction::FetchStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_tips(&api).await {
            Ok(items) => tips.update(|s| s.apply(CollectionAction::FetchSucceeded(items))),
            Err(e) => tips.update(|s| s.apply(CollectionAction::FetchFailed(e.to_string()))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;
}

fn submit_tip(
    api: HttpClient,
    tips: RwSignal<CollectionState<Tip>>,
    ui: RwSignal<UiState>,
    tip: Tip,
) {
    tips.update(|s| s.apply(CollectionAction::MutationStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::add_tip(&api, &tip).await {
            Ok(()) => {
                tips.update(|s| s.apply(CollectionAction::MutationSucceeded));
                ui.update(|u| u.push_notice(NoticeKind::Success, "Tip added successfully"));
                load_tips(api, tips);
            }
            Err(e) => {
                tips.update(|s| s.apply(CollectionAction::MutationFailed(e.to_string())));
                ui.update(|u| u.push_notice(NoticeKind::Error, "Failed to add tip"));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, ui, tip);
}

fn remove_tip(
    api: HttpClient,
    tips: RwSignal<CollectionState<Tip>>,
    ui: RwSignal<UiState>,
    crop_name: String,
) {
    tips.update(|s| s.apply(CollectionAction::MutationStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_tip(&api, &crop_name).await {
            Ok(()) => {
                tips.update(|s| s.apply(CollectionAction::MutationSucceeded));
                ui.update(|u| u.push_notice(NoticeKind::Success, "Tip deleted successfully"));
                load_tips(api, tips);
            }
            Err(e) => {
                tips.update(|s| s.apply(CollectionAction::MutationFailed(e.to_string())));
                ui.update(|u| u.push_notice(NoticeKind::Error, "Failed to delete tip"));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, ui, crop_name);
}

#[component]
pub fn TipsPage() -> impl IntoView {
    let api = expect_context::<HttpClient>();
    let tips = expect_context::<RwSignal<CollectionState<Tip>>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Fetch once on mount.
    let requested = RwSignal::new(false);
    {
        let api = api.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            load_tips(api.clone(), tips);
        });
    }

    let show_add = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<String>);

    let on_add_cancel = Callback::new(move |_| show_add.set(false));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));

    let submit_api = api.clone();
    let on_add_submit = Callback::new(move |tip: Tip| {
        show_add.set(false);
        submit_tip(submit_api.clone(), tips, ui, tip);
    });

    let delete_api = api.clone();
    let on_delete_confirm = Callback::new(move |_| {
        let Some(crop_name) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        remove_tip(delete_api.clone(), tips, ui, crop_name);
    });

    view! {
        <div class="page tips-page">
            <div class="page__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || tips.get().is_loading()
                    on:click=move |_| show_add.set(true)
                >
                    "Add New Tip"
                </button>
            </div>

            <Show when=move || tips.get().phase == Phase::Failed>
                <p class="page__error">{move || tips.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !tips.get().is_loading()
                fallback=move || view! { <p class="page__loading">"Loading tips..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Crop Name"</th>
                            <th>"Tips"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            tips.get()
                                .items
                                .into_iter()
                                .map(|tip| {
                                    let crop_name = tip.crop_name.clone();
                                    view! {
                                        <tr>
                                            <td>{tip.crop_name.clone()}</td>
                                            <td>{tip.crop_tips.clone()}</td>
                                            <td>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        delete_target.set(Some(crop_name.clone()));
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
                <AddTipDialog on_cancel=on_add_cancel on_submit=on_add_submit/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <ConfirmDeleteDialog
                    target=delete_target
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}

/// Modal form for a new crop tip.
#[component]
fn AddTipDialog(on_cancel: Callback<()>, on_submit: Callback<Tip>) -> impl IntoView {
    let crop_name = RwSignal::new(String::new());
    let crop_tips = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let Ok(tip) = validate_tip_input(&crop_name.get(), &crop_tips.get()) else {
            return;
        };
        on_submit.run(tip);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Crop Tip"</h2>
                <label class="dialog__label">
                    "Crop Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || crop_name.get()
                        on:input=move |ev| crop_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Crop Tips"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || crop_tips.get()
                        on:input=move |ev| crop_tips.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add Tip"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog shared shape for row deletion.
#[component]
fn ConfirmDeleteDialog(
    target: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Tip"</h2>
                <p class="dialog__danger">
                    {move || {
                        format!(
                            "This will permanently delete the tip for \"{}\".",
                            target.get().unwrap_or_default()
                        )
                    }}
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
