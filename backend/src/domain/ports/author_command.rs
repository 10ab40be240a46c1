//! Driving port for author mutations.

use async_trait::async_trait;

use crate::domain::{Author, AuthorDraft, Error};

/// Use-cases that change authors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorCommand: Send + Sync {
    /// Create an author from validated input.
    async fn create_author(&self, draft: AuthorDraft) -> Result<Author, Error>;

    /// Replace every writable field of author `id`.
    async fn update_author(&self, id: i64, draft: AuthorDraft) -> Result<Author, Error>;

    /// Soft-delete author `id`.
    async fn delete_author(&self, id: i64) -> Result<(), Error>;
}
