//! Admin login page.
//!
//! A successful login leaves the session and `csrftoken` cookies in the
//! browser store; navigation is a full reload so the shell re-runs its
//! `/auth/me` bootstrap against the fresh session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::http::HttpClient;

/// Required-field check only; the backend is the authority on the
/// credentials themselves.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

fn submit_login(
    api: HttpClient,
    username: String,
    password: String,
    info: RwSignal<String>,
    busy: RwSignal<bool>,
) {
    busy.set(true);
    info.set("Signing in...".to_owned());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::admin_login(&api, &username, &password).await {
            Ok(()) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            }
            Err(_) => {
                info.set("Invalid admin credentials".to_owned());
                busy.set(false);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, username, password);
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<HttpClient>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&username.get(), &password.get()) {
            Ok((username_value, password_value)) => {
                submit_login(api.clone(), username_value, password_value, info, busy);
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Admin Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Username"
                        <input
                            class="login-input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
