//! # cropdesk
//!
//! Leptos + WASM admin client for the crop-advisory platform. Lets an
//! authenticated administrator manage crop tips, crop diseases, and news
//! articles, and review user prediction history, all through REST calls
//! to the external backend service.
//!
//! The backend owns every record and the session itself; this crate holds
//! no state beyond the latest fetched collection per view. Authentication
//! rides on a backend-issued session cookie plus a `csrftoken` cookie that
//! is echoed back in the `X-CSRFToken` header on unsafe methods.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
