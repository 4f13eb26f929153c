//! Single board post.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::app::use_client;
use crate::components::top_bar::TopBar;
use crate::net::api;
use crate::net::types::BoardPost;
use crate::state::auth::AuthState;
use crate::util::auth::note_api_error;

#[component]
pub fn BoardDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client();
    let params = use_params_map();

    let post = RwSignal::new(None::<BoardPost>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        post.set(None);
        error.set(None);
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            match api::fetch_post(&client, &id).await {
                Ok(found) => {
                    post.try_set(Some(found));
                }
                Err(e) => {
                    note_api_error(auth, &e);
                    error.try_set(Some(e.user_message()));
                }
            }
        });
    });

    view! {
        <TopBar/>
        <section class="post-page">
            <A href="/board" attr:class="back-link">"Back to board"</A>
            {move || {
                if let Some(message) = error.get() {
                    return view! { <p class="form-message form-message--error">{message}</p> }.into_any();
                }
                match post.get() {
                    None => view! { <p class="page-loading">"Loading post..."</p> }.into_any(),
                    Some(post) => view! {
                        <article class="post">
                            <h2 class="post__title">{post.title}</h2>
                            <p class="post__meta">
                                {post.author} " · " {post.created_at.unwrap_or_default()} " · ♥ " {post.likes}
                            </p>
                            {post
                                .images
                                .into_iter()
                                .map(|src| view! { <img class="post__image" src=src alt=""/> })
                                .collect_view()}
                            <p class="post__content">{post.content}</p>
                        </article>
                    }
                        .into_any(),
                }
            }}
        </section>
    }
}
