//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `toast`, `books`) so each page can
//! depend on the small model it actually touches. `App` creates one signal per
//! module and provides it through context.

pub mod books;
pub mod session;
pub mod toast;
