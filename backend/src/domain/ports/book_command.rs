//! Driving port for book mutations.

use async_trait::async_trait;

use crate::domain::{Book, BookDraft, Error};

/// Use-cases that change books.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCommand: Send + Sync {
    /// Create a book from validated input.
    async fn create_book(&self, draft: BookDraft) -> Result<Book, Error>;

    /// Replace every writable field of book `id`.
    async fn update_book(&self, id: i64, draft: BookDraft) -> Result<Book, Error>;

    /// Soft-delete book `id`.
    async fn delete_book(&self, id: i64) -> Result<(), Error>;
}
