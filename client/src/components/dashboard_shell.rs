//! Authenticated layout: sidebar navigation, header, routed content.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{Shell, nav_entries};
use crate::state::books::BooksState;
use crate::state::session::SessionState;
use crate::util::auth::{install_unauth_redirect, sign_out};

#[component]
pub fn DashboardShell() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let books = expect_context::<RwSignal<BooksState>>();
    let pathname = use_location().pathname;
    install_unauth_redirect(session, use_navigate());

    // Clearing the session trips the redirect above.
    let on_logout = move |_| sign_out(session, books);

    let nav = nav_entries(Shell::Dashboard)
        .map(|(path, label)| {
            let class = move || {
                if pathname.get() == path {
                    "sidebar__link sidebar__link--active"
                } else {
                    "sidebar__link"
                }
            };
            view! { <a href=path class=class>{label}</a> }
        })
        .collect_view();

    view! {
        <div class="dashboard">
            <aside class="sidebar">
                <div class="sidebar__brand">"bookdesk"</div>
                <nav class="sidebar__nav">{nav}</nav>
            </aside>
            <div class="dashboard__main">
                <header class="dashboard__header">
                    <span class="dashboard__spacer"></span>
                    <button class="btn btn--outline btn--sm" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <main class="dashboard__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
