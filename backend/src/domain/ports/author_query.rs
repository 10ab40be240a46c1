//! Driving port for author reads.

use async_trait::async_trait;

use crate::domain::{Author, Error};

/// Use-cases that read authors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorQuery: Send + Sync {
    /// Every live author.
    async fn list_authors(&self) -> Result<Vec<Author>, Error>;

    /// Author `id`, or `NotFound`.
    async fn get_author(&self, id: i64) -> Result<Author, Error>;
}
