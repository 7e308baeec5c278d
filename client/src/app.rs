//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::{auth_shell::AuthShell, dashboard_shell::DashboardShell, toast_host::ToastHost};
use crate::pages::{
    books::BooksPage, create_book::CreateBookPage, home::HomePage, login::LoginPage, register::RegisterPage,
};
use crate::routes::{
    BOOKS_SEGMENT, CREATE_SEGMENT, HOME_PATH, HOME_SEGMENT, LOGIN_SEGMENT, REGISTER_SEGMENT, Shell,
};
use crate::state::{books::BooksState, session::SessionState, toast::ToastQueue};
use crate::util::auth::install_session_restore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session, toast and books signals and mounts every
/// screen under its layout shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restoring());
    let toasts = RwSignal::new(ToastQueue::default());
    let books = RwSignal::new(BooksState::default());

    provide_context(session);
    provide_context(toasts);
    provide_context(books);

    install_session_restore(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/bookdesk.css"/>
        <Title text="bookdesk"/>

        <ToastHost/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                <ParentRoute path=StaticSegment(Shell::Dashboard.segment()) view=DashboardShell>
                    <Route path=StaticSegment(HOME_SEGMENT) view=HomePage/>
                    <Route path=StaticSegment(BOOKS_SEGMENT) view=BooksPage/>
                    <Route path=(StaticSegment(BOOKS_SEGMENT), StaticSegment(CREATE_SEGMENT)) view=CreateBookPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment(Shell::Auth.segment()) view=AuthShell>
                    <Route path=StaticSegment(LOGIN_SEGMENT) view=LoginPage/>
                    <Route path=StaticSegment(REGISTER_SEGMENT) view=RegisterPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
