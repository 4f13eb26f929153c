//! Liked recipes. Opening one shows it on the result page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_client;
use crate::components::tab_bar::TabBar;
use crate::components::top_bar::TopBar;
use crate::net::api;
use crate::net::types::LikeEntry;
use crate::pages::home::RESULT_ROUTE;
use crate::state::auth::AuthState;
use crate::state::recommend::{RecommendState, SearchKind};
use crate::util::auth::note_api_error;

const SKELETON_ROWS: usize = 3;

#[component]
pub fn LikesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let recommend = expect_context::<RwSignal<RecommendState>>();
    let client = use_client().get_value();
    let navigate = use_navigate();

    let likes = RwSignal::new(None::<Vec<LikeEntry>>);
    let error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        match api::liked_recipes(&client).await {
            Ok(entries) => {
                likes.try_set(Some(entries));
            }
            Err(e) => {
                note_api_error(auth, &e);
                error.try_set(Some(e.user_message()));
            }
        }
    });

    let open = move |entry: LikeEntry| {
        let food = entry.recipe.food.clone();
        recommend.update(|r| {
            r.begin(SearchKind::Dish(food.clone()));
            r.mark_liked(&food);
            r.settle(Ok(vec![entry.recipe]));
        });
        navigate(RESULT_ROUTE, NavigateOptions::default());
    };
    let open = StoredValue::new_local(open);

    view! {
        <TopBar/>
        <section class="likes-page">
            <h2>"Liked recipes"</h2>
            {move || {
                if let Some(message) = error.get() {
                    return view! { <p class="form-message form-message--error">{message}</p> }.into_any();
                }
                match likes.get() {
                    None => (0..SKELETON_ROWS)
                        .map(|_| view! { <div class="like-card like-card--skeleton"></div> })
                        .collect_view()
                        .into_any(),
                    Some(entries) if entries.is_empty() => {
                        view! { <p class="empty-state">"Recipes you like will show up here."</p> }.into_any()
                    }
                    Some(entries) => entries
                        .into_iter()
                        .map(|entry| {
                            let preview = entry.preview_ingredients().join(", ");
                            let food = entry.recipe.food.clone();
                            view! {
                                <button class="like-card" on:click=move |_| open.with_value(|open| open(entry.clone()))>
                                    <span class="like-card__food">{food}</span>
                                    <span class="like-card__ingredients">{preview}</span>
                                </button>
                            }
                        })
                        .collect_view()
                        .into_any(),
                }
            }}
        </section>
        <TabBar/>
    }
}
