//! Crop diseases page: table, add modal, per-row delete.

#[cfg(test)]
#[path = "diseases_test.rs"]
mod diseases_test;

use leptos::prelude::*;

use crate::net::http::HttpClient;
use crate::net::types::Disease;
use crate::state::collection::{CollectionAction, CollectionState, Phase};
#[cfg(feature = "hydrate")]
use crate::state::ui::NoticeKind;
use crate::state::ui::UiState;

fn validate_disease_input(
    disease_name: &str,
    crop_name: &str,
    cure: &str,
    commonness: &str,
) -> Result<Disease, &'static str> {
    let disease_name = disease_name.trim();
    let crop_name = crop_name.trim();
    let cure = cure.trim();
    let commonness = commonness.trim();
    if disease_name.is_empty() || crop_name.is_empty() || cure.is_empty() || commonness.is_empty() {
        return Err("All disease fields are required.");
    }
    Ok(Disease {
        disease_name: disease_name.to_owned(),
        crop_name: crop_name.to_owned(),
        cure: cure.to_owned(),
        commonness: commonness.to_owned(),
    })
}

fn load_diseases(api: HttpClient, diseases: RwSignal<CollectionState<Disease>>) {
    diseases.update(|s| s.apply(CollectionAction::FetchStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_diseases(&api).await {
            Ok(items) => diseases.update(|s| s.apply(CollectionAction::FetchSucceeded(items))),
            Err(e) => diseases.update(|s| s.apply(CollectionAction::FetchFailed(e.to_string()))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;
}

fn submit_disease(
    api: HttpClient,
    diseases: RwSignal<CollectionState<Disease>>,
    ui: RwSignal<UiState>,
    disease: Disease,
) {
    diseases.update(|s| s.apply(CollectionAction::MutationStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::add_disease(&api, &disease).await {
            Ok(()) => {
                diseases.update(|s| s.apply(CollectionAction::MutationSucceeded));
                ui.update(|u| u.push_notice(NoticeKind::Success, "Disease added successfully"));
                load_diseases(api, diseases);
            }
            Err(e) => {
                diseases.update(|s| s.apply(CollectionAction::MutationFailed(e.to_string())));
                ui.update(|u| u.push_notice(NoticeKind::Error, "Failed to add disease"));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, ui, disease);
}

fn remove_disease(
    api: HttpClient,
    diseases: RwSignal<CollectionState<Disease>>,
    ui: RwSignal<UiState>,
    disease_name: String,
) {
    diseases.update(|s| s.apply(CollectionAction::MutationStarted));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_disease(&api, &disease_name).await {
            Ok(()) => {
                diseases.update(|s| s.apply(CollectionAction::MutationSucceeded));
                ui.update(|u| u.push_notice(NoticeKind::Success, "Disease deleted successfully"));
                load_diseases(api, diseases);
            }
            Err(e) => {
                diseases.update(|s| s.apply(CollectionAction::MutationFailed(e.to_string())));
                ui.update(|u| u.push_notice(NoticeKind::Error, "Failed to delete disease"));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, ui, disease_name);
}

#[component]
pub fn DiseasesPage() -> impl IntoView {
    let api = expect_context::<HttpClient>();
    let diseases = expect_context::<RwSignal<CollectionState<Disease>>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let requested = RwSignal::new(false);
    {
        let api = api.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            load_diseases(api.clone(), diseases);
        });
    }

    let show_add = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<String>);

    let on_add_cancel = Callback::new(move |_| show_add.set(false));
    let on_delete_cancel = Callback::new(move |_| delete_target.set(None));

    let submit_api = api.clone();
    let on_add_submit = Callback::new(move |disease: Disease| {
        show_add.set(false);
        submit_disease(submit_api.clone(), diseases, ui, disease);
    });

    let delete_api = api.clone();
    let on_delete_confirm = Callback::new(move |_| {
        let Some(disease_name) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        remove_disease(delete_api.clone(), diseases, ui, disease_name);
    });

    view! {
        <div class="page diseases-page">
            <div class="page__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || diseases.get().is_loading()
                    on:click=move |_| show_add.set(true)
                >
                    "Add New Disease"
                </button>
            </div>

            <Show when=move || diseases.get().phase == Phase::Failed>
                <p class="page__error">{move || diseases.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !diseases.get().is_loading()
                fallback=move || view! { <p class="page__loading">"Loading diseases..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Disease"</th>
                            <th>"Crop"</th>
                            <th>"Cure"</th>
                            <th>"Commonness"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            diseases
                                .get()
                                .items
                                .into_iter()
                                .map(|disease| {
                                    let disease_name = disease.disease_name.clone();
                                    view! {
                                        <tr>
                                            <td>{disease.disease_name.clone()}</td>
                                            <td>{disease.crop_name.clone()}</td>
                                            <td>{disease.cure.clone()}</td>
                                            <td>{disease.commonness.clone()}</td>
                                            <td>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        delete_target.set(Some(disease_name.clone()));
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
                <AddDiseaseDialog on_cancel=on_add_cancel on_submit=on_add_submit/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| on_delete_cancel.run(())>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete Disease"</h2>
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

/// Modal form for a new disease record.
#[component]
fn AddDiseaseDialog(on_cancel: Callback<()>, on_submit: Callback<Disease>) -> impl IntoView {
    let disease_name = RwSignal::new(String::new());
    let crop_name = RwSignal::new(String::new());
    let cure = RwSignal::new(String::new());
    let commonness = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let Ok(disease) = validate_disease_input(
            &disease_name.get(),
            &crop_name.get(),
            &cure.get(),
            &commonness.get(),
        ) else {
            return;
        };
        on_submit.run(disease);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Disease"</h2>
                <label class="dialog__label">
                    "Disease Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || disease_name.get()
                        on:input=move |ev| disease_name.set(event_target_value(&ev))
                    />
                </label>
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
                    "Cure"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || cure.get()
                        on:input=move |ev| cure.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Commonness"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || commonness.get()
                        on:input=move |ev| commonness.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add Disease"
                    </button>
                </div>
            </div>
        </div>
    }
}
