//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and submission pipeline and delegates
//! shared chrome to `components`.

pub mod books;
pub mod create_book;
pub mod home;
pub mod login;
pub mod register;
