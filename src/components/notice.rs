//! Transient notice toast.
//!
//! Watches `UiState.notice` and clears it after a few seconds, keyed on
//! the notice sequence so a newer notice is never clobbered by an old
//! timer. Observability chrome only; it never drives control flow.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

#[cfg(feature = "hydrate")]
const NOTICE_TTL_SECS: u64 = 4;

/// Toast host rendered once by the shell.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        let state = ui.get();
        if state.notice.is_none() {
            return;
        }
        let seq = state.notice_seq;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(NOTICE_TTL_SECS)).await;
            ui.update(|u| u.clear_notice_if(seq));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    });

    let css_class = move || match ui.get().notice.map(|n| n.kind) {
        Some(NoticeKind::Error) => "notice notice--error",
        _ => "notice notice--success",
    };

    view! {
        <Show when=move || ui.get().notice.is_some()>
            <div class=css_class>
                {move || ui.get().notice.map(|n| n.text).unwrap_or_default()}
            </div>
        </Show>
    }
}
