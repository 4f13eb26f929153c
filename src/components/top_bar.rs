//! Brand header with the signed-in user's name.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[component]
pub fn TopBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || auth.with(|a| a.display_name().to_owned());

    view! {
        <header class="topbar" aria-label="FoodThing">
            <A href="/" attr:class="brand">"FoodThing"</A>
            <span class="topbar__user">{name}</span>
        </header>
    }
}
