//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup resolves the session synchronously from stored credentials, then
//! asks the backend about a cookie-only session when nothing local was found.
//! Every page reaches the shared `AppClient` through `use_client`.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::net::browser::{AppClient, app_client};
use crate::net::session;
use crate::pages::{
    board::BoardPage, board_detail::BoardDetailPage, board_write::BoardWritePage, home::HomePage,
    likes::LikesPage, login::LoginPage, pantry::BoxPage, ranking::RankingPage, receipts::ReceiptsPage,
    recommend_result::RecommendResultPage, register::RegisterPage, settings::SettingsPage,
};
use crate::state::auth::AuthState;
use crate::state::recommend::RecommendState;
use crate::util::dates::now_unix_secs;

/// Context handle for the shared client. The client is single-threaded, so it
/// lives in local arena storage.
pub type ClientHandle = StoredValue<AppClient, LocalStorage>;

/// Handle to the shared client provided by `App`. The handle is `Copy`, so
/// view closures capture it freely; async tasks take the client out with
/// `get_value()`.
pub fn use_client() -> ClientHandle {
    expect_context::<ClientHandle>()
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = app_client();
    let auth = RwSignal::new(AuthState::from_bootstrap(session::bootstrap(client.credentials(), now_unix_secs())));
    if auth.with_untracked(|a| a.loading) {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match session::verify(&client).await {
                Ok(found) => auth.update(|a| a.signed_in(found)),
                Err(err) => {
                    log::debug!("[auth] no server session: {err}");
                    auth.update(AuthState::signed_out);
                }
            }
        });
    }

    provide_context::<ClientHandle>(StoredValue::new_local(client));
    provide_context(auth);
    provide_context(RwSignal::new(RecommendState::default()));

    view! {
        <Title text="FoodThing"/>

        <Router>
            <main class="app-shell">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=|| view! { <RequireAuth><HomePage/></RequireAuth> }/>
                    <Route
                        path=(StaticSegment("recommend"), StaticSegment("result"))
                        view=|| view! { <RequireAuth><RecommendResultPage/></RequireAuth> }
                    />
                    <Route path=StaticSegment("board") view=|| view! { <RequireAuth><BoardPage/></RequireAuth> }/>
                    <Route
                        path=(StaticSegment("board"), StaticSegment("write"))
                        view=|| view! { <RequireAuth><BoardWritePage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("board"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><BoardDetailPage/></RequireAuth> }
                    />
                    <Route path=StaticSegment("rank") view=|| view! { <RequireAuth><RankingPage/></RequireAuth> }/>
                    <Route path=StaticSegment("box") view=|| view! { <RequireAuth><BoxPage/></RequireAuth> }/>
                    <Route path=StaticSegment("receipts") view=|| view! { <RequireAuth><ReceiptsPage/></RequireAuth> }/>
                    <Route path=StaticSegment("likes") view=|| view! { <RequireAuth><LikesPage/></RequireAuth> }/>
                    <Route path=StaticSegment("settings") view=|| view! { <RequireAuth><SettingsPage/></RequireAuth> }/>
                </Routes>
            </main>
        </Router>
    }
}
