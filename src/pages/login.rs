//! Login page: email + password against `/users/log-in`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::use_client;
use crate::net::session;
use crate::state::auth::AuthState;
use crate::util::dates::now_unix_secs;
use crate::util::validation::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = move || auth.with(|a| a.loading);

    // Already signed in (token bootstrap or cookie verify): go home.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.with(AuthState::is_authenticated) {
            navigate_home("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(e) = validate_login(&email_value, &password_value) {
            info.set(e.to_string());
            return;
        }
        auth.update(AuthState::begin_login);
        info.set("Signing in...".to_owned());

        let client = client.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session::login(&client, &email_value, &password_value, now_unix_secs()).await {
                Ok(found) => {
                    info.set(String::new());
                    auth.update(|a| a.signed_in(found));
                    navigate("/", NavigateOptions::default());
                }
                Err(e) if e.is_canceled() => auth.update(AuthState::login_failed),
                Err(e) => {
                    log::debug!("[auth] login failed: {e}");
                    info.set(e.user_message());
                    auth.update(AuthState::login_failed);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"FoodThing"</h1>
                <p class="login-card__subtitle">"Cook with what you have"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        "Log In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <A href="/register" attr:class="login-link">"Create an account"</A>
            </div>
        </div>
    }
}
