//! Bottom tab bar linking the personal screens.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::top_nav::is_active;

const TABS: &[(&str, &str)] = &[
    ("Box", "/box"),
    ("Receipts", "/receipts"),
    ("Home", "/"),
    ("Likes", "/likes"),
    ("Settings", "/settings"),
];

#[component]
pub fn TabBar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <footer class="tabbar" aria-label="Tabs">
            <div class="tab-inner">
                {TABS
                    .iter()
                    .map(|(label, href)| {
                        let class = move || {
                            if is_active(&pathname.get(), href) { "tab-item active" } else { "tab-item" }
                        };
                        view! { <A href=*href attr:class=class>{*label}</A> }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
