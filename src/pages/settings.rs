//! Settings: profile name, notification toggle, logout.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::tab_bar::TabBar;
use crate::components::top_bar::TopBar;
use crate::net::session;
use crate::state::auth::AuthState;
use crate::util::ui_persistence::{load_notify, save_notify};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client();

    let notify = RwSignal::new(load_notify());
    let confirming = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let toggle_notify = move |_| {
        let enabled = !notify.get();
        notify.set(enabled);
        save_notify(enabled);
    };

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let client = client.get_value();
        // The route guard sends the user to the login screen once this lands.
        leptos::task::spawn_local(async move {
            let session = session::logout(&client).await;
            auth.set(AuthState { session, loading: false });
        });
    };

    view! {
        <TopBar/>
        <section class="settings-page">
            <h2>"Settings"</h2>
            <div class="settings-row">
                <span class="settings-row__label">"Name"</span>
                <span class="settings-row__value">{move || auth.with(|a| a.display_name().to_owned())}</span>
            </div>
            <div class="settings-row">
                <span class="settings-row__label">"Notifications"</span>
                <button
                    class="toggle"
                    class:toggle--on=move || notify.get()
                    role="switch"
                    aria-checked=move || notify.get().to_string()
                    on:click=toggle_notify
                >
                    {move || if notify.get() { "On" } else { "Off" }}
                </button>
            </div>
            <Show
                when=move || confirming.get()
                fallback=move || view! {
                    <button class="logout-button" on:click=move |_| confirming.set(true)>"Log out"</button>
                }
            >
                <div class="confirm-box">
                    <p>"Log out of FoodThing?"</p>
                    <button class="confirm-box__cancel" on:click=move |_| confirming.set(false)>"Cancel"</button>
                    <button class="confirm-box__ok" disabled=move || busy.get() on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </Show>
        </section>
        <TabBar/>
    }
}
