//! Home page: recommendation search by ingredients or dish, plus a daily
//! suggestion.
//!
//! SYSTEM CONTEXT
//! ==============
//! A search resets the shared `RecommendState`, navigates to the result page
//! right away, and settles the state when the backend answers. The result
//! page only renders what is in the state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_client;
use crate::components::tab_bar::TabBar;
use crate::components::top_bar::TopBar;
use crate::components::top_nav::TopNav;
use crate::net::api;
use crate::net::browser::AppClient;
use crate::state::auth::AuthState;
use crate::state::recommend::{RecommendState, SearchKind, split_ingredients};
use crate::util::auth::note_api_error;

pub const RESULT_ROUTE: &str = "/recommend/result";

/// Start `search` in the background and record its outcome in `recommend`.
pub fn start_search(
    client: AppClient,
    auth: RwSignal<AuthState>,
    recommend: RwSignal<RecommendState>,
    search: SearchKind,
) {
    recommend.update(|r| r.begin(search.clone()));
    leptos::task::spawn_local(async move {
        let outcome = match &search {
            SearchKind::Ingredients(names) => api::search_recipes(&client, names).await,
            SearchKind::Dish(food) => api::recipe_for_food(&client, food).await,
            SearchKind::Suggestion => api::suggest_recipe(&client).await.map(|r| r.into_iter().collect()),
        };
        if let Err(e) = &outcome {
            note_api_error(auth, e);
        }
        recommend.update(|r| r.settle(outcome));
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let recommend = expect_context::<RwSignal<RecommendState>>();
    let client = use_client();
    let navigate = use_navigate();

    let ingredients = RwSignal::new(String::new());
    let dish = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let run = move |search: SearchKind| {
        info.set(String::new());
        start_search(client.get_value(), auth, recommend, search);
        navigate(RESULT_ROUTE, NavigateOptions::default());
    };

    let run_ingredients = run.clone();
    let on_ingredients = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let names = split_ingredients(&ingredients.get());
        if names.is_empty() {
            info.set("Enter at least one ingredient, separated by commas.".to_owned());
            return;
        }
        run_ingredients(SearchKind::Ingredients(names));
    };

    let run_dish = run.clone();
    let on_dish = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let food = dish.get().trim().to_owned();
        if food.is_empty() {
            info.set("Enter a dish name.".to_owned());
            return;
        }
        run_dish(SearchKind::Dish(food));
    };

    view! {
        <TopBar/>
        <TopNav/>
        <section class="home-page">
            <h2>"What should I cook?"</h2>
            <form class="search-form" on:submit=on_ingredients>
                <input
                    class="search-input"
                    type="text"
                    placeholder="egg, milk, onion"
                    prop:value=move || ingredients.get()
                    on:input=move |ev| ingredients.set(event_target_value(&ev))
                />
                <button class="search-button" type="submit">"Find recipes"</button>
            </form>
            <form class="search-form" on:submit=on_dish>
                <input
                    class="search-input"
                    type="text"
                    placeholder="Kimchi stew"
                    prop:value=move || dish.get()
                    on:input=move |ev| dish.set(event_target_value(&ev))
                />
                <button class="search-button" type="submit">"Get the recipe"</button>
            </form>
            <button class="suggest-button" on:click=move |_| run(SearchKind::Suggestion)>
                "Surprise me"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
        </section>
        <TabBar/>
    }
}
