//! Port abstraction for book persistence adapters.
use async_trait::async_trait;

use crate::domain::{Book, BookDraft};

use super::PersistenceError;

/// Storage for books. Reads resolve `author_name` from the owning author.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book and return the stored record.
    ///
    /// An unknown author yields [`PersistenceError::ForeignKeyViolation`].
    async fn create(&self, draft: &BookDraft) -> Result<Book, PersistenceError>;

    /// List live books ordered by id.
    async fn list(&self) -> Result<Vec<Book>, PersistenceError>;

    /// Fetch a live book by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, PersistenceError>;

    /// Overwrite a live book; `None` when no row matched.
    async fn update(&self, id: i64, draft: &BookDraft) -> Result<Option<Book>, PersistenceError>;

    /// Soft-delete a live book; `false` when no row matched.
    async fn delete(&self, id: i64) -> Result<bool, PersistenceError>;
}
