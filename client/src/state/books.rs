//! The `books` cache partition.
//!
//! DESIGN
//! ======
//! The books page fetches whenever this partition is stale and no fetch is
//! in flight. Creating a book marks it stale, so returning to the list
//! always shows the new entry without a manual reload.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use crate::net::types::Book;

/// Cached catalog listing shared by dashboard pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooksState {
    pub items: Vec<Book>,
    pub loading: bool,
    pub error: Option<String>,
    pub stale: bool,
}

impl Default for BooksState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None, stale: true }
    }
}

impl BooksState {
    /// Mark the cached list as outdated.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Whether a fetch should start now.
    pub fn needs_fetch(&self) -> bool {
        self.stale && !self.loading
    }

    /// Claim the next fetch. Returns `false` if one is already running or
    /// the cache is fresh.
    pub fn begin_fetch(&mut self) -> bool {
        if !self.needs_fetch() {
            return false;
        }
        self.loading = true;
        self.stale = false;
        true
    }

    /// Apply a finished fetch. Failed fetches keep the previous items.
    pub fn finish_fetch(&mut self, result: Result<Vec<Book>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }
}
