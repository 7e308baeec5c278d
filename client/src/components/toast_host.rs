//! Top-center stack rendering the shared toast queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once in `App`, outside the router, so toasts pushed right before a
//! navigation survive the route change.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastQueue};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toast-stack toast-stack--top-center" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|q| q.visible().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.level.css_modifier())
                            on:click=move |_| {
                                toasts.update(|q| {
                                    q.dismiss(id);
                                });
                            }
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
