//! In-memory repositories for tests and local experiments.
//!
//! All three repositories share one [`InMemoryStore`] behind a mutex, so
//! uniqueness and foreign-key checks are atomic with the write they guard.
//! Constraint names mirror the PostgreSQL migrations.

mod store;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{AuthorRepository, BookRepository, PersistenceError, UserRepository};
use crate::domain::{Author, AuthorDraft, Book, BookDraft, NewUser, User};

pub use store::InMemoryStore;

/// `UserRepository` over an [`InMemoryStore`].
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryUserRepository {
    /// Repository sharing `store`.
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, PersistenceError> {
        self.store.insert_user(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PersistenceError> {
        self.store.user_by_email(email)
    }
}

/// `AuthorRepository` over an [`InMemoryStore`].
#[derive(Clone, Default)]
pub struct InMemoryAuthorRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryAuthorRepository {
    /// Repository sharing `store`.
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn create(&self, draft: &AuthorDraft) -> Result<Author, PersistenceError> {
        self.store.insert_author(draft)
    }

    async fn list(&self) -> Result<Vec<Author>, PersistenceError> {
        self.store.authors()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, PersistenceError> {
        self.store.author(id)
    }

    async fn update(
        &self,
        id: i64,
        draft: &AuthorDraft,
    ) -> Result<Option<Author>, PersistenceError> {
        self.store.update_author(id, draft)
    }

    async fn delete(&self, id: i64) -> Result<bool, PersistenceError> {
        self.store.delete_author(id)
    }
}

/// `BookRepository` over an [`InMemoryStore`].
#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryBookRepository {
    /// Repository sharing `store`.
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, draft: &BookDraft) -> Result<Book, PersistenceError> {
        self.store.insert_book(draft)
    }

    async fn list(&self) -> Result<Vec<Book>, PersistenceError> {
        self.store.books()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, PersistenceError> {
        self.store.book(id)
    }

    async fn update(&self, id: i64, draft: &BookDraft) -> Result<Option<Book>, PersistenceError> {
        self.store.update_book(id, draft)
    }

    async fn delete(&self, id: i64) -> Result<bool, PersistenceError> {
        self.store.delete_book(id)
    }
}
