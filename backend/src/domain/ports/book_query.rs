//! Driving port for book reads.

use async_trait::async_trait;

use crate::domain::{Book, Error};

/// Use-cases that read books.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookQuery: Send + Sync {
    /// Every live book.
    async fn list_books(&self) -> Result<Vec<Book>, Error>;

    /// Book `id`, or `NotFound`.
    async fn get_book(&self, id: i64) -> Result<Book, Error>;
}
