//! Recommendation results with per-recipe like buttons.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_client;
use crate::components::tab_bar::TabBar;
use crate::components::top_bar::TopBar;
use crate::net::api;
use crate::net::types::Recipe;
use crate::state::auth::AuthState;
use crate::state::recommend::RecommendState;
use crate::util::auth::note_api_error;

#[component]
pub fn RecommendResultPage() -> impl IntoView {
    let recommend = expect_context::<RwSignal<RecommendState>>();
    let navigate = use_navigate();

    let heading = move || {
        recommend.with(|r| r.search.as_ref().map_or_else(|| "Recommendations".to_owned(), |s| s.label()))
    };
    let back = move |_| navigate("/", NavigateOptions::default());

    view! {
        <TopBar/>
        <section class="result-page">
            <h2>{heading}</h2>
            <Show
                when=move || !recommend.with(|r| r.loading)
                fallback=|| view! { <p class="page-loading">"Finding recipes..."</p> }
            >
                {move || {
                    if let Some(error) = recommend.with(|r| r.error.clone()) {
                        view! { <p class="form-message form-message--error">{error}</p> }.into_any()
                    } else if recommend.with(|r| r.results.is_empty()) {
                        view! { <p class="empty-state">"No recipes found. Try other ingredients."</p> }.into_any()
                    } else {
                        recommend
                            .with(|r| r.results.clone())
                            .into_iter()
                            .map(|recipe| view! { <RecipeCard recipe=recipe/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </Show>
            <button class="back-button" on:click=back>"Back to search"</button>
        </section>
        <TabBar/>
    }
}

#[component]
fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let recommend = expect_context::<RwSignal<RecommendState>>();
    let client = use_client();
    let busy = RwSignal::new(false);

    let food = recipe.food.clone();
    let liked = {
        let food = food.clone();
        move || recommend.with(|r| r.is_liked(&food))
    };
    let recipe = StoredValue::new(recipe);

    let on_like = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let client = client.get_value();
        let recipe = recipe.get_value();
        leptos::task::spawn_local(async move {
            match api::like_recipe(&client, &recipe).await {
                Ok(()) => recommend.update(|r| r.mark_liked(&recipe.food)),
                Err(e) => {
                    note_api_error(auth, &e);
                    leptos::logging::warn!("like failed for {}: {e}", recipe.food);
                }
            }
            busy.set(false);
        });
    };

    let meta = recipe.with_value(|r| {
        [r.difficulty.clone(), r.cooking_time.clone()].into_iter().flatten().collect::<Vec<_>>().join(" · ")
    });
    let ingredients = recipe.with_value(|r| r.ingredients.join(", "));
    let steps = recipe.with_value(|r| r.steps.clone());
    let tip = recipe.with_value(|r| r.tip.clone());
    let video = recipe.with_value(|r| r.video.clone());
    let liked_for_label = liked.clone();

    view! {
        <article class="recipe-card">
            <header class="recipe-card__header">
                <h3>{food}</h3>
                <button
                    class="like-button"
                    class:like-button--on=liked
                    disabled=move || busy.get()
                    on:click=on_like
                >
                    {move || if liked_for_label() { "Liked" } else { "Like" }}
                </button>
            </header>
            <p class="recipe-card__meta">{meta}</p>
            <p class="recipe-card__ingredients">{ingredients}</p>
            <ol class="recipe-card__steps">
                {steps.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
            </ol>
            {tip.map(|tip| view! { <p class="recipe-card__tip">{tip}</p> })}
            {video.map(|href| view! { <a class="recipe-card__video" href=href target="_blank" rel="noopener">"Watch video"</a> })}
        </article>
    }
}
