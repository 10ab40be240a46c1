//! Shared tables backing the in-memory repositories.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::domain::ports::PersistenceError;
use crate::domain::{Author, AuthorDraft, Book, BookDraft, NewUser, User};

const USERS_EMAIL_KEY: &str = "users_email_key";
const AUTHORS_FULL_NAME_KEY: &str = "authors_full_name_key";
const BOOKS_AUTHOR_ID_FKEY: &str = "books_author_id_fkey";

#[derive(Debug, Clone)]
struct Row<T> {
    value: T,
    deleted_at: Option<DateTime<Utc>>,
}

impl<T> Row<T> {
    fn live(value: T) -> Self {
        Self {
            value,
            deleted_at: None,
        }
    }

    fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<Row<User>>,
    authors: Vec<Row<Author>>,
    books: Vec<Row<Book>>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn author_name(&self, author_id: i64) -> Option<String> {
        self.authors
            .iter()
            .find(|row| row.value.id == author_id)
            .map(|row| row.value.full_name.clone())
    }

    fn with_author_name(&self, book: &Book) -> Book {
        Book {
            author_name: self.author_name(book.author_id),
            ..book.clone()
        }
    }

    fn ensure_author_exists(&self, author_id: i64) -> Result<(), PersistenceError> {
        if self.authors.iter().any(|row| row.value.id == author_id) {
            Ok(())
        } else {
            Err(PersistenceError::foreign_key_violation(BOOKS_AUTHOR_ID_FKEY))
        }
    }

    fn ensure_unique_author(
        &self,
        full_name: &str,
        except: Option<i64>,
    ) -> Result<(), PersistenceError> {
        let taken = self.authors.iter().any(|row| {
            row.is_live() && row.value.full_name == full_name && Some(row.value.id) != except
        });
        if taken {
            Err(PersistenceError::unique_violation(AUTHORS_FULL_NAME_KEY))
        } else {
            Ok(())
        }
    }
}

/// Mutex-guarded tables with soft-delete and constraint semantics matching
/// the SQL schema.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, PersistenceError> {
        self.tables
            .lock()
            .map_err(|_| PersistenceError::connection("in-memory store poisoned"))
    }

    pub(super) fn insert_user(&self, user: &NewUser) -> Result<User, PersistenceError> {
        let mut tables = self.lock()?;
        if tables
            .users
            .iter()
            .any(|row| row.is_live() && row.value.email == user.email)
        {
            return Err(PersistenceError::unique_violation(USERS_EMAIL_KEY));
        }
        let stored = User {
            id: tables.next_id(),
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
        };
        tables.users.push(Row::live(stored.clone()));
        Ok(stored)
    }

    pub(super) fn user_by_email(&self, email: &str) -> Result<Option<User>, PersistenceError> {
        let tables = self.lock()?;
        Ok(tables
            .users
            .iter()
            .find(|row| row.is_live() && row.value.email == email)
            .map(|row| row.value.clone()))
    }

    pub(super) fn insert_author(&self, draft: &AuthorDraft) -> Result<Author, PersistenceError> {
        let mut tables = self.lock()?;
        tables.ensure_unique_author(&draft.full_name, None)?;
        let stored = Author {
            id: tables.next_id(),
            full_name: draft.full_name.clone(),
        };
        tables.authors.push(Row::live(stored.clone()));
        Ok(stored)
    }

    pub(super) fn authors(&self) -> Result<Vec<Author>, PersistenceError> {
        let tables = self.lock()?;
        Ok(tables
            .authors
            .iter()
            .filter(|row| row.is_live())
            .map(|row| row.value.clone())
            .collect())
    }

    pub(super) fn author(&self, id: i64) -> Result<Option<Author>, PersistenceError> {
        let tables = self.lock()?;
        Ok(tables
            .authors
            .iter()
            .find(|row| row.is_live() && row.value.id == id)
            .map(|row| row.value.clone()))
    }

    pub(super) fn update_author(
        &self,
        id: i64,
        draft: &AuthorDraft,
    ) -> Result<Option<Author>, PersistenceError> {
        let mut tables = self.lock()?;
        if !tables
            .authors
            .iter()
            .any(|row| row.is_live() && row.value.id == id)
        {
            return Ok(None);
        }
        tables.ensure_unique_author(&draft.full_name, Some(id))?;
        Ok(tables
            .authors
            .iter_mut()
            .find(|row| row.is_live() && row.value.id == id)
            .map(|row| {
                row.value.full_name = draft.full_name.clone();
                row.value.clone()
            }))
    }

    pub(super) fn delete_author(&self, id: i64) -> Result<bool, PersistenceError> {
        let mut tables = self.lock()?;
        Ok(soft_delete(&mut tables.authors, |author| author.id == id))
    }

    pub(super) fn insert_book(&self, draft: &BookDraft) -> Result<Book, PersistenceError> {
        let mut tables = self.lock()?;
        tables.ensure_author_exists(draft.author_id)?;
        let stored = Book {
            id: tables.next_id(),
            title: draft.title.clone(),
            publication_year: draft.publication_year.clone(),
            author_id: draft.author_id,
            author_name: tables.author_name(draft.author_id),
        };
        tables.books.push(Row::live(stored.clone()));
        Ok(stored)
    }

    pub(super) fn books(&self) -> Result<Vec<Book>, PersistenceError> {
        let tables = self.lock()?;
        Ok(tables
            .books
            .iter()
            .filter(|row| row.is_live())
            .map(|row| tables.with_author_name(&row.value))
            .collect())
    }

    pub(super) fn book(&self, id: i64) -> Result<Option<Book>, PersistenceError> {
        let tables = self.lock()?;
        Ok(tables
            .books
            .iter()
            .find(|row| row.is_live() && row.value.id == id)
            .map(|row| tables.with_author_name(&row.value)))
    }

    pub(super) fn update_book(
        &self,
        id: i64,
        draft: &BookDraft,
    ) -> Result<Option<Book>, PersistenceError> {
        let mut tables = self.lock()?;
        let Some(index) = tables
            .books
            .iter()
            .position(|row| row.is_live() && row.value.id == id)
        else {
            return Ok(None);
        };
        tables.ensure_author_exists(draft.author_id)?;
        let author_name = tables.author_name(draft.author_id);
        Ok(tables.books.get_mut(index).map(|row| {
            row.value.title = draft.title.clone();
            row.value.publication_year = draft.publication_year.clone();
            row.value.author_id = draft.author_id;
            row.value.author_name = author_name;
            row.value.clone()
        }))
    }

    pub(super) fn delete_book(&self, id: i64) -> Result<bool, PersistenceError> {
        let mut tables = self.lock()?;
        Ok(soft_delete(&mut tables.books, |book| book.id == id))
    }
}

fn soft_delete<T>(rows: &mut [Row<T>], matches: impl Fn(&T) -> bool) -> bool {
    match rows
        .iter_mut()
        .find(|row| row.is_live() && matches(&row.value))
    {
        Some(row) => {
            row.deleted_at = Some(Utc::now());
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::PasswordHash;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryStore {
        InMemoryStore::new()
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test".to_owned(),
            email: email.to_owned(),
            password_hash: PasswordHash::new("hash"),
        }
    }

    #[rstest]
    fn duplicate_live_email_is_rejected(store: InMemoryStore) {
        store.insert_user(&new_user("a@example.com")).expect("first");
        let err = store
            .insert_user(&new_user("a@example.com"))
            .expect_err("duplicate");
        assert_eq!(err, PersistenceError::unique_violation(USERS_EMAIL_KEY));
    }

    #[rstest]
    fn soft_deleted_author_disappears_but_keeps_books_named(store: InMemoryStore) {
        let author = store
            .insert_author(&AuthorDraft::new("N. K. Jemisin"))
            .expect("author");
        let book = store
            .insert_book(&BookDraft::new("The Fifth Season", "2015", author.id))
            .expect("book");

        assert!(store.delete_author(author.id).expect("delete"));
        assert!(!store.delete_author(author.id).expect("second delete"));
        assert_eq!(store.author(author.id).expect("lookup"), None);

        let fetched = store.book(book.id).expect("lookup").expect("book present");
        assert_eq!(fetched.author_name.as_deref(), Some("N. K. Jemisin"));
    }

    #[rstest]
    fn book_requires_existing_author(store: InMemoryStore) {
        let err = store
            .insert_book(&BookDraft::new("Orphan", "2001", 77))
            .expect_err("fk");
        assert_eq!(
            err,
            PersistenceError::foreign_key_violation(BOOKS_AUTHOR_ID_FKEY)
        );
    }

    #[rstest]
    fn renaming_author_to_taken_name_is_rejected(store: InMemoryStore) {
        store.insert_author(&AuthorDraft::new("First")).expect("first");
        let second = store.insert_author(&AuthorDraft::new("Second")).expect("second");
        let err = store
            .update_author(second.id, &AuthorDraft::new("First"))
            .expect_err("duplicate");
        assert_eq!(err, PersistenceError::unique_violation(AUTHORS_FULL_NAME_KEY));
    }

    #[rstest]
    fn updating_missing_rows_reports_none(store: InMemoryStore) {
        assert_eq!(store.update_author(999, &AuthorDraft::new("X")).expect("ok"), None);
        assert_eq!(
            store
                .update_book(999, &BookDraft::new("Title", "2000", 1))
                .expect("ok"),
            None
        );
    }
}
