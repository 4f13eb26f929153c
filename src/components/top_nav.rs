//! Section tabs shown under the brand bar on discovery screens.

#[cfg(test)]
#[path = "top_nav_test.rs"]
mod top_nav_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("What should I cook?", "/"),
    ("Board", "/board"),
    ("Ranking", "/rank"),
];

/// Whether the tab for `href` is the current one. `/` only matches itself;
/// other tabs also match their sub-routes.
pub fn is_active(path: &str, href: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn TopNav() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="topnav-bar" aria-label="Sections">
            <div class="topnav" role="tablist">
                {NAV_ITEMS
                    .iter()
                    .map(|(label, href)| {
                        let active = move || is_active(&pathname.get(), href);
                        view! {
                            <A href=*href attr:class=move || {
                                if active() { "topnav-item active" } else { "topnav-item" }
                            }>{*label}</A>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
