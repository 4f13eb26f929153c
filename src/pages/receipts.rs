//! Purchased ingredients grouped by receipt date.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::tab_bar::TabBar;
use crate::components::top_bar::TopBar;
use crate::net::api;
use crate::net::types::ReceiptGroup;
use crate::state::auth::AuthState;
use crate::state::receipts::group_receipts;
use crate::util::auth::note_api_error;

#[component]
pub fn ReceiptsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client().get_value();

    let groups = RwSignal::new(None::<Vec<ReceiptGroup>>);
    let error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        match api::list_receipt_rows(&client).await {
            Ok(rows) => {
                groups.try_set(Some(group_receipts(rows)));
            }
            Err(e) => {
                note_api_error(auth, &e);
                error.try_set(Some(e.user_message()));
            }
        }
    });

    view! {
        <TopBar/>
        <section class="receipts-page">
            <h2>"Receipts"</h2>
            {move || {
                if let Some(message) = error.get() {
                    return view! { <p class="form-message form-message--error">{message}</p> }.into_any();
                }
                match groups.get() {
                    None => view! { <p class="page-loading">"Loading receipts..."</p> }.into_any(),
                    Some(list) if list.is_empty() => {
                        view! { <p class="empty-state">"No purchases recorded yet."</p> }.into_any()
                    }
                    Some(list) => list
                        .into_iter()
                        .map(|group| {
                            let heading = if group.date.is_empty() { "Undated".to_owned() } else { group.date };
                            view! {
                                <div class="receipt-group">
                                    <h3 class="receipt-group__date">{heading}</h3>
                                    <ul class="receipt-group__items">
                                        {group.items.into_iter().map(|item| view! { <li>{item.name}</li> }).collect_view()}
                                    </ul>
                                </div>
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
