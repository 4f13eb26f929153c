//! Board feed with title search.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the newest fetch may settle the feed: starting a search or leaving
//! the page aborts the previous request, which then resolves `Canceled` and
//! is ignored by `BoardFeed::settle`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_client;
use crate::components::tab_bar::TabBar;
use crate::components::top_bar::TopBar;
use crate::components::top_nav::TopNav;
use crate::net::api;
use crate::net::client::RequestOptions;
use crate::net::types::{BoardPost, BoardQuery};
use crate::state::auth::AuthState;
use crate::state::board::{BoardFeed, LatestFetch};
use crate::util::auth::note_api_error;

#[component]
pub fn BoardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client();

    let feed = RwSignal::new(BoardFeed::default());
    let search = RwSignal::new(String::new());
    let latest = StoredValue::new(LatestFetch::default());

    let load = move || {
        let registration = latest.try_update_value(LatestFetch::start);
        let Some(registration) = registration else {
            return;
        };
        feed.update(BoardFeed::begin);
        let query = BoardQuery { title: Some(search.get_untracked()), ..BoardQuery::default() };
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            let outcome = api::list_board(&client, &query, RequestOptions::with_signal(registration)).await;
            if let Err(e) = &outcome {
                note_api_error(auth, e);
            }
            // The page may be gone; a disposed signal just drops the result.
            feed.try_update(|f| f.settle(outcome));
        });
    };

    load();
    on_cleanup(move || {
        latest.try_update_value(LatestFetch::cancel);
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load();
    };
    let retry = move |_| load();

    view! {
        <TopBar/>
        <TopNav/>
        <section class="board-page">
            <div class="board-toolbar">
                <form class="search-form" on:submit=on_search>
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search titles"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="search-button" type="submit">"Search"</button>
                </form>
                <A href="/board/write" attr:class="write-button">"Write"</A>
            </div>
            {move || {
                let state = feed.get();
                if let Some(error) = state.error {
                    view! {
                        <div class="board-error">
                            <p>{error}</p>
                            <button class="retry-button" on:click=retry>"Retry"</button>
                        </div>
                    }
                        .into_any()
                } else if state.loading {
                    view! { <p class="page-loading">"Loading posts..."</p> }.into_any()
                } else if state.posts.is_empty() {
                    view! { <p class="empty-state">"No posts yet. Be the first to write one."</p> }.into_any()
                } else {
                    view! {
                        <ul class="board-list">
                            {state.posts.into_iter().map(|post| view! { <PostRow post=post/> }).collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
        <TabBar/>
    }
}

#[component]
fn PostRow(post: BoardPost) -> impl IntoView {
    let href = format!("/board/{}", post.id);
    view! {
        <li class="board-row">
            <A href=href attr:class="board-row__link">
                <span class="board-row__title">{post.title}</span>
                <span class="board-row__meta">
                    {post.author} " · " {post.created_at.unwrap_or_default()} " · ♥ " {post.likes}
                </span>
            </A>
        </li>
    }
}
