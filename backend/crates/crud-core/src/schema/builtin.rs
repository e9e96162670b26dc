//! Record types shipped with the service.

use crate::{EntitySchema, FieldKind, FieldSpec};

pub const USERS: &str = "users";
pub const BOOKS: &str = "books";
pub const BLOGS: &str = "blogs";

/// Sign-up style user record: name, email, password.
pub fn users_schema(min_password_length: usize) -> EntitySchema {
    EntitySchema::new(USERS, "User")
        .field(
            FieldSpec::new("name", "Name", FieldKind::Text)
                .required()
                .max_length(100),
        )
        .field(
            FieldSpec::new("email", "Email", FieldKind::Email)
                .required()
                .email()
                .max_length(100),
        )
        .field(
            FieldSpec::new("password", "Password", FieldKind::Password)
                .required()
                .min_length(min_password_length),
        )
}

pub fn books_schema() -> EntitySchema {
    EntitySchema::new(BOOKS, "Book")
        .field(
            FieldSpec::new("title", "Title", FieldKind::Text)
                .required()
                .max_length(200),
        )
        .field(
            FieldSpec::new("author", "Author", FieldKind::Text)
                .required()
                .max_length(100),
        )
        .field(FieldSpec::new("description", "Description", FieldKind::LongText).max_length(1000))
}

pub fn blogs_schema() -> EntitySchema {
    EntitySchema::new(BLOGS, "Blog post")
        .field(
            FieldSpec::new("title", "Title", FieldKind::Text)
                .required()
                .max_length(100),
        )
        .field(
            FieldSpec::new("body", "Body", FieldKind::LongText)
                .required()
                .max_length(1000),
        )
}
