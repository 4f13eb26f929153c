//! Pantry ("box") page: what is in the fridge and what has gone off.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page loads `/ingredients` once and keeps a local `PantryState`.
//! Quantity changes stay local; removal and adding go to the backend first and
//! only touch the local lists once the backend accepted them.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::tab_bar::TabBar;
use crate::components::top_bar::TopBar;
use crate::net::api;
use crate::net::types::PantryItem;
use crate::state::auth::AuthState;
use crate::state::pantry::{PantryDraft, PantryState, Shelf, ViewMode};
use crate::util::auth::note_api_error;
use crate::util::dates;

#[component]
pub fn BoxPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client();

    let pantry = RwSignal::new(PantryState::default());
    let loading = RwSignal::new(true);
    let info = RwSignal::new(String::new());
    let show_add = RwSignal::new(false);
    let draft = RwSignal::new(PantryDraft::default());

    {
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match api::list_pantry(&client, dates::today()).await {
                Ok(items) => {
                    pantry.try_set(PantryState::from_items(items));
                }
                Err(e) => {
                    note_api_error(auth, &e);
                    info.try_set(e.user_message());
                }
            }
            loading.try_set(false);
        });
    }

    let remove = move |id: String, shelf: Shelf| {
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match api::delete_ingredient(&client, &id).await {
                Ok(()) => {
                    pantry.try_update(|p| p.remove(&id, shelf));
                }
                Err(e) => {
                    note_api_error(auth, &e);
                    info.try_set(e.user_message());
                }
            }
        });
    };

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        let request = match current.to_request() {
            Ok(request) => request,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let today = dates::today();
            match api::add_ingredient(&client, &request, today).await {
                Ok(stored) => {
                    // Backends that answer with an empty body still stored the item.
                    let item = stored.map_or_else(|| current.to_local_item(today), Ok);
                    if let Ok(item) = item {
                        pantry.try_update(|p| p.add(item));
                    }
                    draft.try_set(PantryDraft::default());
                    show_add.try_set(false);
                    info.try_set(String::new());
                }
                Err(e) => {
                    note_api_error(auth, &e);
                    info.try_set(e.user_message());
                }
            }
        });
    };

    let toggle_label = move || match pantry.with(|p| p.view) {
        ViewMode::Grid => "List view",
        ViewMode::List => "Grid view",
    };
    let list_class = move || match pantry.with(|p| p.view) {
        ViewMode::Grid => "pantry-items pantry-items--grid",
        ViewMode::List => "pantry-items pantry-items--list",
    };

    view! {
        <TopBar/>
        <section class="pantry-page">
            <div class="pantry-toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search ingredients"
                    prop:value=move || pantry.with(|p| p.query.clone())
                    on:input=move |ev| pantry.update(|p| p.query = event_target_value(&ev))
                />
                <button class="view-toggle" on:click=move |_| pantry.update(|p| p.view = p.view.toggled())>
                    {toggle_label}
                </button>
                <button class="add-button" on:click=move |_| show_add.set(true)>"Add"</button>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-loading">"Loading your box..."</p> }>
                <h3>"In the box"</h3>
                <ul class=list_class>
                    {move || {
                        pantry
                            .with(|p| p.visible().into_iter().cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|item| view! { <PantryRow item=item shelf=Shelf::Active pantry=pantry on_remove=remove/> })
                            .collect_view()
                    }}
                </ul>
                <Show when=move || pantry.with(|p| !p.expired.is_empty())>
                    <h3 class="pantry-expired__title">"Expired"</h3>
                    <ul class="pantry-items pantry-items--expired">
                        {move || {
                            pantry
                                .with(|p| p.expired.clone())
                                .into_iter()
                                .map(|item| view! { <PantryRow item=item shelf=Shelf::Expired pantry=pantry on_remove=remove/> })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </Show>
            <Show when=move || show_add.get()>
                <div class="dialog-backdrop" on:click=move |_| show_add.set(false)>
                    <form class="dialog" on:click=|ev| ev.stop_propagation() on:submit=on_add>
                        <h3>"Add ingredient"</h3>
                        <input
                            class="dialog-input"
                            type="text"
                            placeholder="Name"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                        <input
                            class="dialog-input"
                            type="text"
                            placeholder="Category"
                            prop:value=move || draft.with(|d| d.category.clone())
                            on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                        />
                        <input
                            class="dialog-input"
                            type="date"
                            prop:value=move || draft.with(|d| d.date.clone())
                            on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                        />
                        <input
                            class="dialog-input"
                            type="number"
                            min="1"
                            placeholder="Quantity"
                            prop:value=move || draft.with(|d| d.qty.clone())
                            on:input=move |ev| draft.update(|d| d.qty = event_target_value(&ev))
                        />
                        <div class="dialog-actions">
                            <button type="button" on:click=move |_| show_add.set(false)>"Cancel"</button>
                            <button type="submit">"Save"</button>
                        </div>
                    </form>
                </div>
            </Show>
        </section>
        <TabBar/>
    }
}

#[component]
fn PantryRow<F>(item: PantryItem, shelf: Shelf, pantry: RwSignal<PantryState>, on_remove: F) -> impl IntoView
where
    F: Fn(String, Shelf) + Copy + Send + Sync + 'static,
{
    let id = StoredValue::new(item.id.clone());
    let class = if item.alert { "pantry-item pantry-item--alert" } else { "pantry-item" };
    let qty = move || {
        pantry.with(|p| {
            let shelf_items = match shelf {
                Shelf::Active => &p.active,
                Shelf::Expired => &p.expired,
            };
            id.with_value(|id| shelf_items.iter().find(|i| &i.id == id).map_or(0, |i| i.qty))
        })
    };

    view! {
        <li class=class>
            <span class="pantry-item__name">{item.name}</span>
            <span class="pantry-item__category">{item.category.unwrap_or_default()}</span>
            <span class="pantry-item__date">{item.expires_on.unwrap_or_default()}</span>
            <div class="pantry-item__qty">
                <button on:click=move |_| id.with_value(|id| pantry.update(|p| p.decrement(id, shelf)))>"-"</button>
                <span>{qty}</span>
                <button on:click=move |_| id.with_value(|id| pantry.update(|p| p.increment(id, shelf)))>"+"</button>
            </div>
            <button class="pantry-item__remove" on:click=move |_| on_remove(id.get_value(), shelf)>"Remove"</button>
        </li>
    }
}
