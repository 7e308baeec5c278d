use super::*;

// =============================================================
// Request payloads
// =============================================================

#[test]
fn credentials_serialize_as_plain_fields() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "secret1".to_owned() };
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "secret1" }));
}

#[test]
fn credentials_require_both_fields() {
    let missing_password = Credentials { email: "a@b.com".to_owned(), password: String::new() };
    assert!(missing_password.validate().is_err());
    let missing_email = Credentials { email: String::new(), password: "x".to_owned() };
    assert!(missing_email.validate().is_err());
}

#[test]
fn registration_input_accepts_single_char_password() {
    let input = RegistrationInput {
        name: "Max".to_owned(),
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    };
    assert!(input.validate().is_ok());
}

// =============================================================
// Responses
// =============================================================

#[test]
fn auth_response_reads_camel_case_token() {
    let resp: AuthResponse = serde_json::from_str(r#"{"accessToken":"tok-1","extra":1}"#).unwrap();
    assert_eq!(resp.access_token, "tok-1");
}

#[test]
fn book_accepts_mongo_style_id_and_missing_optionals() {
    let book: Book = serde_json::from_value(serde_json::json!({
        "_id": "b1",
        "title": "Dune",
        "genre": "Sci-fi",
        "coverImage": "https://cdn.example/dune.png"
    }))
    .unwrap();
    assert_eq!(book.id, "b1");
    assert_eq!(book.title, "Dune");
    assert_eq!(book.cover_image.as_deref(), Some("https://cdn.example/dune.png"));
    assert!(book.file.is_none());
    assert!(book.description.is_empty());
}

#[test]
fn book_decodes_id_only_creation_receipt() {
    let book: Book = serde_json::from_str(r#"{"id":"665f0c"}"#).unwrap();
    assert_eq!(book.id, "665f0c");
    assert!(book.title.is_empty());
}

#[test]
fn selected_file_serializes_name_only() {
    let json = serde_json::to_value(SelectedFile::named("dune.png")).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "dune.png" }));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(500).to_string(), "server responded with status 500");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

// =============================================================
// BookDraft
// =============================================================

#[test]
fn book_draft_multipart_parts_follow_wire_order() {
    let draft = BookDraft {
        title: "Dune".to_owned(),
        genre: "Sci-fi".to_owned(),
        description: "Spice".to_owned(),
        cover_image: SelectedFile::named("dune.png"),
        file: SelectedFile::named("dune.pdf"),
    };
    let parts = draft.multipart_parts();
    let names: Vec<_> = parts.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["title", "genre", "description", "coverImage", "file"]);
    assert_eq!(parts[0].1, PartValue::Text("Dune"));
    assert_eq!(parts[3].1, PartValue::File(&draft.cover_image));
    assert_eq!(parts[4].1, PartValue::File(&draft.file));
}
