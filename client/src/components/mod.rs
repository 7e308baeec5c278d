//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome and shared form/notification surfaces while
//! reading and writing state from Leptos context providers.

pub mod auth_shell;
pub mod dashboard_shell;
pub mod field_message;
pub mod toast_host;
