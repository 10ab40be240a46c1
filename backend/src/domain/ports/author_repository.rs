//! Port abstraction for author persistence adapters.
use async_trait::async_trait;

use crate::domain::{Author, AuthorDraft};

use super::PersistenceError;

/// Storage for authors. Every operation ignores soft-deleted rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Insert an author and return the stored record.
    async fn create(&self, draft: &AuthorDraft) -> Result<Author, PersistenceError>;

    /// List live authors ordered by id.
    async fn list(&self) -> Result<Vec<Author>, PersistenceError>;

    /// Fetch a live author by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, PersistenceError>;

    /// Overwrite a live author; `None` when no row matched.
    async fn update(&self, id: i64, draft: &AuthorDraft)
    -> Result<Option<Author>, PersistenceError>;

    /// Soft-delete a live author; `false` when no row matched.
    async fn delete(&self, id: i64) -> Result<bool, PersistenceError>;
}
