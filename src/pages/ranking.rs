//! Most-liked recipes.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::tab_bar::TabBar;
use crate::components::top_bar::TopBar;
use crate::components::top_nav::TopNav;
use crate::net::api;
use crate::net::types::RankingEntry;
use crate::state::auth::AuthState;
use crate::util::auth::note_api_error;

#[component]
pub fn RankingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client().get_value();

    let entries = RwSignal::new(None::<Vec<RankingEntry>>);
    let error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        match api::ranking(&client).await {
            Ok(list) => {
                entries.try_set(Some(list));
            }
            Err(e) => {
                note_api_error(auth, &e);
                error.try_set(Some(e.user_message()));
            }
        }
    });

    view! {
        <TopBar/>
        <TopNav/>
        <section class="ranking-page">
            <h2>"Ranking"</h2>
            {move || {
                if let Some(message) = error.get() {
                    return view! { <p class="form-message form-message--error">{message}</p> }.into_any();
                }
                match entries.get() {
                    None => view! { <p class="page-loading">"Loading ranking..."</p> }.into_any(),
                    Some(list) if list.is_empty() => {
                        view! { <p class="empty-state">"No ranking yet."</p> }.into_any()
                    }
                    Some(list) => view! {
                        <ol class="ranking-list">
                            {list
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <li class="ranking-row">
                                            <span class="ranking-row__rank">{entry.rank}</span>
                                            <span class="ranking-row__name">{entry.name}</span>
                                            <span class="ranking-row__likes">"♥ " {entry.likes}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    }
                        .into_any(),
                }
            }}
        </section>
        <TabBar/>
    }
}
