//! PostgreSQL-backed `AuthorRepository` implementation using Diesel ORM.
//!
//! Deletes are soft: they stamp `deleted_at`, and every query here filters
//! stamped rows out.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AuthorRepository, PersistenceError};
use crate::domain::{Author, AuthorDraft};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AuthorRow, AuthorUpdate, NewAuthorRow};
use super::pool::DbPool;
use super::schema::authors;

/// Diesel-backed implementation of the `AuthorRepository` port.
#[derive(Clone)]
pub struct DieselAuthorRepository {
    pool: DbPool,
}

impl DieselAuthorRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for DieselAuthorRepository {
    async fn create(&self, draft: &AuthorDraft) -> Result<Author, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewAuthorRow {
            full_name: &draft.full_name,
        };

        diesel::insert_into(authors::table)
            .values(&new_row)
            .returning(AuthorRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Author::from)
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Author>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AuthorRow> = authors::table
            .filter(authors::deleted_at.is_null())
            .order(authors::id.asc())
            .select(AuthorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AuthorRow> = authors::table
            .filter(authors::id.eq(id))
            .filter(authors::deleted_at.is_null())
            .select(AuthorRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Author::from))
    }

    async fn update(
        &self,
        id: i64,
        draft: &AuthorDraft,
    ) -> Result<Option<Author>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = AuthorUpdate {
            full_name: &draft.full_name,
            updated_at: Utc::now(),
        };

        let row: Option<AuthorRow> = diesel::update(
            authors::table
                .filter(authors::id.eq(id))
                .filter(authors::deleted_at.is_null()),
        )
        .set(&changes)
        .returning(AuthorRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;

        Ok(row.map(Author::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(
            authors::table
                .filter(authors::id.eq(id))
                .filter(authors::deleted_at.is_null()),
        )
        .set(authors::deleted_at.eq(Some(Utc::now())))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
