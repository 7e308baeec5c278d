//! Push-only notification queue.
//!
//! DESIGN
//! ======
//! Pages push leveled messages and move on; `components::toast_host` is the
//! only reader. Several toasts can be visible at once, each dismissed by id
//! (timer or click) independently of the others.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_LIFETIME_MS: u32 = 5_000;

/// Generic message for any failed request.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Severity of a toast; drives its styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Warning => "toast--warning",
            Self::Error => "toast--error",
        }
    }
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Currently visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, level, message: message.into() });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn visible(&self) -> &[Toast] {
        &self.items
    }
}

/// Push a toast into the shared queue and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastQueue>, level: ToastLevel, message: impl Into<String>) {
    let Some(id) = toasts.try_update(|q| q.push(level, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        toasts.try_update(|q| q.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Log a failed request and show the generic error toast.
pub fn notify_failure(toasts: RwSignal<ToastQueue>, error: &dyn std::fmt::Display) {
    leptos::logging::warn!("request failed: {error}");
    notify(toasts, ToastLevel::Error, GENERIC_ERROR_MESSAGE);
}
