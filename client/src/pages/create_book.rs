//! Book creation form: metadata fields plus cover image and book file upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form validates client-side against `BookDraftInput`'s schema and only
//! a fully valid draft reaches the multipart upload. Success invalidates the
//! `books` partition so the list refetches, then returns to it.

#[cfg(test)]
#[path = "create_book_test.rs"]
mod create_book_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use validator::{Validate, ValidationError};

use crate::components::field_message::FieldMessage;
use crate::net::submission::{Outcome, SubmissionState, run, submit};
use crate::net::types::{ApiError, Book, BookDraft, SelectedFile};
use crate::routes::{BOOKS_PATH, HOME_PATH};
use crate::state::books::BooksState;
use crate::state::session::SessionState;
use crate::state::toast::{GENERIC_ERROR_MESSAGE, ToastLevel, ToastQueue, notify, notify_failure};
use crate::util::validation::{FieldErrors, error_with_message, is_single};

pub const COVER_IMAGE_REQUIRED_MESSAGE: &str = "Cover Image is required";
pub const BOOK_FILE_REQUIRED_MESSAGE: &str = "Book PDF is required";
pub const CREATE_BOOK_SUCCESS_MESSAGE: &str = "Book Created Successfully.";

/// Field order used for inline messages.
pub const BOOK_FIELDS: [&str; 5] = ["title", "genre", "description", "cover_image", "file"];

/// Raw form state captured at submit time.
#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct BookDraftInput {
    #[validate(length(min = 2, message = "Title must be at least 2 Character"))]
    pub title: String,
    #[validate(length(min = 2, message = "Genre must be at least 2 Character"))]
    pub genre: String,
    #[validate(length(min = 2, message = "description must be at least 2 Character"))]
    pub description: String,
    #[validate(custom(function = "cover_image_selected"))]
    pub cover_image: Vec<SelectedFile>,
    #[validate(custom(function = "book_file_selected"))]
    pub file: Vec<SelectedFile>,
}

fn cover_image_selected(files: &[SelectedFile]) -> Result<(), ValidationError> {
    if is_single(files) {
        return Ok(());
    }
    Err(error_with_message("required", COVER_IMAGE_REQUIRED_MESSAGE))
}

fn book_file_selected(files: &[SelectedFile]) -> Result<(), ValidationError> {
    if is_single(files) {
        return Ok(());
    }
    Err(error_with_message("required", BOOK_FILE_REQUIRED_MESSAGE))
}

/// Validate captured input into a draft ready for upload.
///
/// # Errors
///
/// Returns every failing field, in form order.
pub fn validate_book_input(input: BookDraftInput) -> Result<BookDraft, FieldErrors> {
    if let Err(errors) = input.validate() {
        return Err(FieldErrors::from_validation(&errors, &BOOK_FIELDS));
    }
    let BookDraftInput { title, genre, description, cover_image, file } = input;
    match (<[SelectedFile; 1]>::try_from(cover_image), <[SelectedFile; 1]>::try_from(file)) {
        (Ok([cover_image]), Ok([file])) => Ok(BookDraft { title, genre, description, cover_image, file }),
        (cover, book) => {
            let mut errors = FieldErrors::default();
            if cover.is_err() {
                errors.push("cover_image", COVER_IMAGE_REQUIRED_MESSAGE);
            }
            if book.is_err() {
                errors.push("file", BOOK_FILE_REQUIRED_MESSAGE);
            }
            Err(errors)
        }
    }
}

/// Validate captured input and prepare one upload attempt.
///
/// Field errors are published to `errors` either way. Returns `None` without
/// calling `request` while an attempt is pending or when validation fails.
pub fn start_book_upload<F, Fut>(
    input: BookDraftInput,
    submission: RwSignal<SubmissionState>,
    errors: RwSignal<FieldErrors>,
    request: F,
) -> Option<impl Future<Output = Outcome<Book, ApiError>>>
where
    F: FnOnce(BookDraft) -> Fut,
    Fut: Future<Output = Result<Book, ApiError>>,
{
    if submission.with_untracked(SubmissionState::is_pending) {
        return None;
    }
    let draft = match validate_book_input(input) {
        Ok(draft) => draft,
        Err(field_errors) => {
            errors.set(field_errors);
            return None;
        }
    };
    errors.set(FieldErrors::default());
    Some(async move { run(&submission, move || request(draft)).await })
}

/// Route a settled upload to its side effects.
pub fn handle_create_outcome<F>(
    outcome: Outcome<Book, ApiError>,
    books: RwSignal<BooksState>,
    toasts: RwSignal<ToastQueue>,
    navigate: &F,
) where
    F: Fn(&str, NavigateOptions),
{
    match outcome {
        Outcome::Succeeded(book) => {
            leptos::logging::log!("created book {}", book.id);
            books.update(BooksState::invalidate);
            notify(toasts, ToastLevel::Success, CREATE_BOOK_SUCCESS_MESSAGE);
            navigate(BOOKS_PATH, NavigateOptions::default());
        }
        Outcome::Failed(error) => notify_failure(toasts, &error),
        // The view is gone but the upload may have landed.
        Outcome::Abandoned => books.update(BooksState::invalidate),
        Outcome::Skipped => {}
    }
}

fn selected_files(input: NodeRef<leptos::html::Input>) -> Vec<SelectedFile> {
    #[cfg(feature = "hydrate")]
    {
        let Some(list) = input.get_untracked().and_then(|el| el.files()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(SelectedFile::from)
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Vec::new()
    }
}

#[component]
pub fn CreateBookPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let books = expect_context::<RwSignal<BooksState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let genre = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let cover_ref = NodeRef::<leptos::html::Input>::new();
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let errors = RwSignal::new(FieldErrors::default());
    let attempted = RwSignal::new(false);
    let submission = RwSignal::new(SubmissionState::default());

    let capture = move || BookDraftInput {
        title: title.get_untracked(),
        genre: genre.get_untracked(),
        description: description.get_untracked(),
        cover_image: selected_files(cover_ref),
        file: selected_files(file_ref),
    };

    // Inline messages follow edits once the user has tried to submit.
    let revalidate = move || {
        if attempted.get_untracked() {
            errors.set(validate_book_input(capture()).err().unwrap_or_default());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        attempted.set(true);
        let token = session.with_untracked(|s| s.token().map(str::to_owned));
        let attempt = start_book_upload(capture(), submission, errors, move |draft| {
            crate::net::api::create_book(draft, token)
        });
        let Some(attempt) = attempt else {
            return;
        };
        let navigate = navigate.clone();
        submit(attempt, move |outcome| handle_create_outcome(outcome, books, toasts, &navigate));
    };

    view! {
        <section class="create-book">
            <form on:submit=on_submit>
                <div class="page-header">
                    <nav class="breadcrumb">
                        <a href=HOME_PATH>"Home"</a>
                        <span class="breadcrumb__sep">"/"</span>
                        <a href=BOOKS_PATH>"Books"</a>
                        <span class="breadcrumb__sep">"/"</span>
                        <span class="breadcrumb__current">"Create Book"</span>
                    </nav>
                    <div class="page-header__actions">
                        <a href=BOOKS_PATH class="btn btn--outline btn--sm">"Cancel"</a>
                        <button
                            class="btn btn--primary btn--sm"
                            type="submit"
                            disabled=move || submission.with(SubmissionState::is_pending)
                        >
                            <Show when=move || submission.with(SubmissionState::is_pending)>
                                <span class="spinner"></span>
                            </Show>
                            <span>"Submit"</span>
                        </button>
                    </div>
                </div>
                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Create Book"</h2>
                        <p class="card__description">"Fill out the form below to create a new book."</p>
                        <Show when=move || submission.with(SubmissionState::is_error)>
                            <p class="form-banner form-banner--error">{GENERIC_ERROR_MESSAGE}</p>
                        </Show>
                    </div>
                    <div class="card__content">
                        <label class="field">
                            <span class="field__label">"Title"</span>
                            <input
                                class="field__input"
                                type="text"
                                prop:value=move || title.get()
                                on:input=move |ev| {
                                    title.set(event_target_value(&ev));
                                    revalidate();
                                }
                            />
                            <FieldMessage errors=errors field="title"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Genre"</span>
                            <input
                                class="field__input"
                                type="text"
                                prop:value=move || genre.get()
                                on:input=move |ev| {
                                    genre.set(event_target_value(&ev));
                                    revalidate();
                                }
                            />
                            <FieldMessage errors=errors field="genre"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Description"</span>
                            <textarea
                                class="field__input field__input--area"
                                prop:value=move || description.get()
                                on:input=move |ev| {
                                    description.set(event_target_value(&ev));
                                    revalidate();
                                }
                            ></textarea>
                            <FieldMessage errors=errors field="description"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Cover Image"</span>
                            <input
                                class="field__input"
                                type="file"
                                accept="image/*"
                                node_ref=cover_ref
                                on:change=move |_| revalidate()
                            />
                            <FieldMessage errors=errors field="cover_image"/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Book File"</span>
                            <input
                                class="field__input"
                                type="file"
                                accept="application/pdf"
                                node_ref=file_ref
                                on:change=move |_| revalidate()
                            />
                            <FieldMessage errors=errors field="file"/>
                        </label>
                    </div>
                </div>
            </form>
        </section>
    }
}
