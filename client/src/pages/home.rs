//! Dashboard landing page.

use leptos::prelude::*;

use crate::routes::{BOOKS_PATH, CREATE_BOOK_PATH};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1 class="page-title">"Dashboard"</h1>
            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"Catalog"</h2>
                    <p class="card__description">"Manage the books published in your catalog."</p>
                </div>
                <div class="card__content home__actions">
                    <a href=BOOKS_PATH class="btn btn--outline">"Browse books"</a>
                    <a href=CREATE_BOOK_PATH class="btn btn--primary">"Add book"</a>
                </div>
            </div>
        </section>
    }
}
