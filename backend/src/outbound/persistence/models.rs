//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain types live here
//! so repositories stay focused on queries.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Author, Book, PasswordHash, User};

use super::schema::{authors, books, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: PasswordHash::new(row.password_hash),
        }
    }
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Row struct for reading from the authors table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = authors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AuthorRow {
    pub id: i64,
    pub full_name: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
        }
    }
}

/// Insertable struct for creating author records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = authors)]
pub(crate) struct NewAuthorRow<'a> {
    pub full_name: &'a str,
}

/// Changeset for full-record author updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = authors)]
pub(crate) struct AuthorUpdate<'a> {
    pub full_name: &'a str,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading from the books table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: i64,
    pub title: String,
    pub publication_year: String,
    pub author_id: i64,
}

impl BookRow {
    /// Attach the owning author's name resolved by a join or lookup.
    pub(crate) fn into_book(self, author_name: Option<String>) -> Book {
        Book {
            id: self.id,
            title: self.title,
            publication_year: self.publication_year,
            author_id: self.author_id,
            author_name,
        }
    }
}

/// Insertable struct for creating book records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub title: &'a str,
    pub publication_year: &'a str,
    pub author_id: i64,
}

/// Changeset for full-record book updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = books)]
pub(crate) struct BookUpdate<'a> {
    pub title: &'a str,
    pub publication_year: &'a str,
    pub author_id: i64,
    pub updated_at: DateTime<Utc>,
}
