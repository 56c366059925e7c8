//! Top bar: title, dark-mode toggle, signed-in admin, logout.

use leptos::prelude::*;

use crate::net::http::HttpClient;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Header for the authenticated shell.
#[component]
pub fn Header() -> impl IntoView {
    let api = expect_context::<HttpClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = move || {
        auth.get().user.map(|u| u.username).unwrap_or_else(|| "admin".to_owned())
    };

    let on_logout = move |_| {
        log_out(api.clone(), auth);
    };

    view! {
        <header class="header">
            <h2 class="header__title">"Admin Dashboard"</h2>
            <span class="header__spacer"></span>
            <button
                class="btn header__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
            <span class="header__user">{username}</span>
            <button class="btn btn--danger header__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}

/// End the session and return to the login screen. The backend clears the
/// session cookie; the local user is dropped regardless of the outcome.
fn log_out(api: HttpClient, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&api).await;
            auth.update(|a| a.user = None);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, auth);
    }
}
