//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::header::Header;
use crate::components::notice::NoticeHost;
use crate::components::sidebar::Sidebar;
use crate::net::http::{DEFAULT_BASE_URL, HttpClient};
use crate::net::types::{Disease, HistoryRecord, NewsArticle, Tip};
use crate::pages::{
    dashboard::DashboardPage, diseases::DiseasesPage, history::HistoryPage, login::LoginPage,
    news::NewsPage, tips::TipsPage,
};
use crate::state::auth::AuthState;
use crate::state::collection::CollectionState;
use crate::state::dashboard::DashboardState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Ask the backend who is signed in, then leave the loading phase. Runs
/// once per full page load; login navigates with a reload so a fresh
/// session always passes through here.
fn bootstrap_session(api: HttpClient, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user(&api).await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, auth);
    }
}

/// Root application component.
///
/// Provides the session HTTP client and all shared state contexts, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = HttpClient::new(DEFAULT_BASE_URL);
    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let tips = RwSignal::new(CollectionState::<Tip>::default());
    let diseases = RwSignal::new(CollectionState::<Disease>::default());
    let news = RwSignal::new(CollectionState::<NewsArticle>::default());
    let history = RwSignal::new(CollectionState::<HistoryRecord>::default());
    let dashboard = RwSignal::new(DashboardState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(api.clone());
    provide_context(auth);
    provide_context(tips);
    provide_context(diseases);
    provide_context(news);
    provide_context(history);
    provide_context(dashboard);
    provide_context(ui);

    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    bootstrap_session(api, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/cropdesk.css"/>
        <Title text="CropDesk Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=AdminShell>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("tips") view=TipsPage/>
                    <Route path=StaticSegment("diseases") view=DiseasesPage/>
                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Authenticated layout: sidebar, header, notice host, routed content.
/// Redirects to `/login` whenever the session is gone.
#[component]
fn AdminShell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="shell">
                        <p class="shell__pending">
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="shell">
                <Sidebar/>
                <div class="shell__main">
                    <Header/>
                    <main class="shell__content">
                        <Outlet/>
                    </main>
                </div>
                <NoticeHost/>
            </div>
        </Show>
    }
}
