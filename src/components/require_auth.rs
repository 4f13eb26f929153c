//! Route guard for screens that need a session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Render `children` once a session exists; redirect to `/login` once auth
/// has settled without one.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=|| view! { <p class="page-loading">"Checking your session..."</p> }
        >
            {children()}
        </Show>
    }
}
