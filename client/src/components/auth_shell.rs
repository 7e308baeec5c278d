//! Unauthenticated layout wrapping the login and registration screens.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::install_authed_redirect;

#[component]
pub fn AuthShell() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_authed_redirect(session, use_navigate());

    view! {
        <div class="auth-shell">
            <Outlet/>
        </div>
    }
}
