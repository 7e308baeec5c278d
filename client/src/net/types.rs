//! Request/response DTOs for the catalog REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Request payloads also
//! carry their validation schema so pages can check them before any network
//! call is issued.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body. Both fields must be non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Registration request body. All fields must be non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistrationInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Body returned by the login and register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
}

/// A catalog book as returned by the books endpoints. Every field is lenient
/// so an id-only creation receipt still decodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
    /// Public URL of the uploaded cover image.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Public URL of the uploaded book file.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A file picked in a file input. Browser builds keep the DOM handle so the
/// file can be streamed into a multipart body; only the name serializes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectedFile {
    pub name: String,
    #[cfg(feature = "hydrate")]
    #[serde(skip)]
    pub handle: web_sys::File,
}

#[cfg(not(feature = "hydrate"))]
impl SelectedFile {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(feature = "hydrate")]
impl From<web_sys::File> for SelectedFile {
    fn from(handle: web_sys::File) -> Self {
        Self { name: handle.name(), handle }
    }
}

/// Validated book payload, ready to be sent as multipart form data.
#[derive(Clone, Debug, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub genre: String,
    pub description: String,
    pub cover_image: SelectedFile,
    pub file: SelectedFile,
}

/// Value of one multipart part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PartValue<'a> {
    Text(&'a str),
    File(&'a SelectedFile),
}

impl BookDraft {
    /// Multipart parts in wire order.
    pub fn multipart_parts(&self) -> [(&'static str, PartValue<'_>); 5] {
        [
            ("title", PartValue::Text(&self.title)),
            ("genre", PartValue::Text(&self.genre)),
            ("description", PartValue::Text(&self.description)),
            ("coverImage", PartValue::File(&self.cover_image)),
            ("file", PartValue::File(&self.file)),
        ]
    }
}

/// Failure of a REST call. Pages collapse every variant into one generic
/// error phase; the detail only reaches the log.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}
