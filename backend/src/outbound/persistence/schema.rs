//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration and restore the docs.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        id -> Int8,
        /// Display name.
        name -> Text,
        /// Unique among live rows (`users_email_key`).
        email -> Text,
        /// bcrypt hash; never the plaintext.
        password_hash -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        /// Set when soft-deleted.
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Authors owning zero or more books.
    authors (id) {
        id -> Int8,
        /// Unique among live rows (`authors_full_name_key`).
        full_name -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Books, each owned by one author.
    books (id) {
        id -> Int8,
        title -> Text,
        /// Free-form year string.
        publication_year -> Text,
        /// References `authors.id` (`books_author_id_fkey`).
        author_id -> Int8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::joinable!(books -> authors (author_id));

diesel::allow_tables_to_appear_in_same_query!(authors, books, users);
