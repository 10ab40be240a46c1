//! Book use-cases.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::persistence_mapping::map_persistence_error;
use crate::domain::ports::{BookCommand, BookQuery, BookRepository, PersistenceError};
use crate::domain::{Book, BookDraft, Error};

/// Message returned when a book id matches no live row.
pub const BOOK_NOT_FOUND_MESSAGE: &str = "Book not found";

/// Book service implementing [`BookCommand`] and [`BookQuery`].
#[derive(Clone)]
pub struct BookService<R> {
    repository: Arc<R>,
}

impl<R> BookService<R> {
    /// Create a new service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_error(error: PersistenceError) -> Error {
    map_persistence_error(error, None)
}

#[async_trait]
impl<R> BookCommand for BookService<R>
where
    R: BookRepository,
{
    async fn create_book(&self, draft: BookDraft) -> Result<Book, Error> {
        self.repository.create(&draft).await.map_err(map_error)
    }

    async fn update_book(&self, id: i64, draft: BookDraft) -> Result<Book, Error> {
        self.repository
            .update(id, &draft)
            .await
            .map_err(map_error)?
            .ok_or_else(|| Error::not_found(BOOK_NOT_FOUND_MESSAGE))
    }

    async fn delete_book(&self, id: i64) -> Result<(), Error> {
        if self.repository.delete(id).await.map_err(map_error)? {
            Ok(())
        } else {
            Err(Error::not_found(BOOK_NOT_FOUND_MESSAGE))
        }
    }
}

#[async_trait]
impl<R> BookQuery for BookService<R>
where
    R: BookRepository,
{
    async fn list_books(&self) -> Result<Vec<Book>, Error> {
        self.repository.list().await.map_err(map_error)
    }

    async fn get_book(&self, id: i64) -> Result<Book, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_error)?
            .ok_or_else(|| Error::not_found(BOOK_NOT_FOUND_MESSAGE))
    }
}
