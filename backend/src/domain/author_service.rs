//! Author use-cases.
//!
//! Implements the author driving ports on top of any [`AuthorRepository`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::persistence_mapping::map_persistence_error;
use crate::domain::ports::{AuthorCommand, AuthorQuery, AuthorRepository, PersistenceError};
use crate::domain::{Author, AuthorDraft, Error};

/// Message returned when an author id matches no live row.
pub const AUTHOR_NOT_FOUND_MESSAGE: &str = "Author not found";

/// Author service implementing [`AuthorCommand`] and [`AuthorQuery`].
#[derive(Clone)]
pub struct AuthorService<R> {
    repository: Arc<R>,
}

impl<R> AuthorService<R> {
    /// Create a new service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_error(error: PersistenceError) -> Error {
    map_persistence_error(error, Some("full_name"))
}

#[async_trait]
impl<R> AuthorCommand for AuthorService<R>
where
    R: AuthorRepository,
{
    async fn create_author(&self, draft: AuthorDraft) -> Result<Author, Error> {
        self.repository.create(&draft).await.map_err(map_error)
    }

    async fn update_author(&self, id: i64, draft: AuthorDraft) -> Result<Author, Error> {
        self.repository
            .update(id, &draft)
            .await
            .map_err(map_error)?
            .ok_or_else(|| Error::not_found(AUTHOR_NOT_FOUND_MESSAGE))
    }

    async fn delete_author(&self, id: i64) -> Result<(), Error> {
        if self.repository.delete(id).await.map_err(map_error)? {
            Ok(())
        } else {
            Err(Error::not_found(AUTHOR_NOT_FOUND_MESSAGE))
        }
    }
}

#[async_trait]
impl<R> AuthorQuery for AuthorService<R>
where
    R: AuthorRepository,
{
    async fn list_authors(&self) -> Result<Vec<Author>, Error> {
        self.repository.list().await.map_err(map_error)
    }

    async fn get_author(&self, id: i64) -> Result<Author, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_error)?
            .ok_or_else(|| Error::not_found(AUTHOR_NOT_FOUND_MESSAGE))
    }
}
