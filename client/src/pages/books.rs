//! Book list backed by the `books` cache partition.

use leptos::prelude::*;

use crate::net::types::Book;
use crate::routes::{CREATE_BOOK_PATH, HOME_PATH};
use crate::state::books::BooksState;
use crate::state::session::SessionState;

/// Fetch the catalog whenever the partition is stale.
fn install_books_fetch(session: RwSignal<SessionState>, books: RwSignal<BooksState>) {
    Effect::new(move || {
        if !books.with(BooksState::needs_fetch) {
            return;
        }
        if !books.try_update(BooksState::begin_fetch).unwrap_or(false) {
            return;
        }
        let token = session.with_untracked(|s| s.token().map(str::to_owned));
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_books(token).await.map_err(|e| {
                leptos::logging::warn!("book list failed: {e}");
                e.to_string()
            });
            books.try_update(|b| b.finish_fetch(result));
        });
    });
}

#[component]
pub fn BooksPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let books = expect_context::<RwSignal<BooksState>>();
    install_books_fetch(session, books);

    view! {
        <section class="books">
            <div class="page-header">
                <nav class="breadcrumb">
                    <a href=HOME_PATH>"Home"</a>
                    <span class="breadcrumb__sep">"/"</span>
                    <span class="breadcrumb__current">"Books"</span>
                </nav>
                <div class="page-header__actions">
                    <a href=CREATE_BOOK_PATH class="btn btn--primary btn--sm">"Add book"</a>
                </div>
            </div>
            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"Books"</h2>
                    <p class="card__description">"All books in the catalog."</p>
                    <Show when=move || books.with(|b| b.error.is_some())>
                        <p class="form-banner form-banner--error">"Could not load books."</p>
                    </Show>
                </div>
                <div class="card__content">
                    <Show when=move || books.with(|b| b.loading)>
                        <p class="books__loading">"Loading…"</p>
                    </Show>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Genre"</th>
                                <th>"Cover"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || books.with(|b| b.items.clone())
                                key=|book| book.id.clone()
                                children=move |book: Book| {
                                    view! {
                                        <tr>
                                            <td>{book.title}</td>
                                            <td>{book.genre}</td>
                                            <td>
                                                {book
                                                    .cover_image
                                                    .map(|url| view! { <a href=url target="_blank">"View"</a> })}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </section>
    }
}
