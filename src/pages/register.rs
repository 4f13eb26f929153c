//! Registration page.
//!
//! Phone and birth inputs are sanitized to digits as the user types; the
//! whole form is validated on submit and the first problem is shown.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::use_client;
use crate::net::api;
use crate::net::types::Gender;
use crate::util::validation::{BIRTH_DIGITS, PHONE_MAX_DIGITS, SignUpForm, digits_only};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = use_client();
    let navigate = use_navigate();

    let form = RwSignal::new(SignUpForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match form.with(SignUpForm::validate) {
            Ok(payload) => payload,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let client = client.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::sign_up(&client, &payload).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => {
                    log::debug!("[auth] sign-up rejected: {e}");
                    info.set(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let gender_button = move |gender: Gender, label: &'static str| {
        let class = move || {
            if form.with(|f| f.gender == Some(gender)) { "gender-option gender-option--selected" } else { "gender-option" }
        };
        view! {
            <button type="button" class=class on:click=move |_| form.update(|f| f.gender = Some(gender))>
                {label}
            </button>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign Up"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (8 to 20 characters)"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.confirm.clone())
                        on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Nickname"
                        prop:value=move || form.with(|f| f.nickname.clone())
                        on:input=move |ev| form.update(|f| f.nickname = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="tel"
                        inputmode="numeric"
                        placeholder="Phone (digits only)"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| {
                            form.update(|f| f.phone = digits_only(&event_target_value(&ev), PHONE_MAX_DIGITS));
                        }
                    />
                    <input
                        class="login-input"
                        type="text"
                        inputmode="numeric"
                        placeholder="Birth date (YYYYMMDD)"
                        prop:value=move || form.with(|f| f.birth8.clone())
                        on:input=move |ev| {
                            form.update(|f| f.birth8 = digits_only(&event_target_value(&ev), BIRTH_DIGITS));
                        }
                    />
                    <div class="gender-picker">
                        {gender_button(Gender::Male, "Male")}
                        {gender_button(Gender::Female, "Female")}
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <A href="/login" attr:class="login-link">"Already have an account? Log in"</A>
            </div>
        </div>
    }
}
