//! PostgreSQL-backed `BookRepository` implementation using Diesel ORM.
//!
//! Reads left-join `authors` to fill `author_name`; writes look the name up
//! after the mutation returns.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{BookRepository, PersistenceError};
use crate::domain::{Book, BookDraft};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BookRow, BookUpdate, NewBookRow};
use super::pool::DbPool;
use super::schema::{authors, books};

/// Diesel-backed implementation of the `BookRepository` port.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

async fn author_name(
    conn: &mut AsyncPgConnection,
    author_id: i64,
) -> Result<Option<String>, PersistenceError> {
    authors::table
        .filter(authors::id.eq(author_id))
        .select(authors::full_name)
        .first::<String>(conn)
        .await
        .optional()
        .map_err(map_diesel_error)
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn create(&self, draft: &BookDraft) -> Result<Book, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewBookRow {
            title: &draft.title,
            publication_year: &draft.publication_year,
            author_id: draft.author_id,
        };

        let row: BookRow = diesel::insert_into(books::table)
            .values(&new_row)
            .returning(BookRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        let name = author_name(&mut conn, row.author_id).await?;

        Ok(row.into_book(name))
    }

    async fn list(&self) -> Result<Vec<Book>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(BookRow, Option<String>)> = books::table
            .left_join(authors::table)
            .filter(books::deleted_at.is_null())
            .order(books::id.asc())
            .select((BookRow::as_select(), authors::full_name.nullable()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(row, name)| row.into_book(name))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(BookRow, Option<String>)> = books::table
            .left_join(authors::table)
            .filter(books::id.eq(id))
            .filter(books::deleted_at.is_null())
            .select((BookRow::as_select(), authors::full_name.nullable()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|(row, name)| row.into_book(name)))
    }

    async fn update(&self, id: i64, draft: &BookDraft) -> Result<Option<Book>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = BookUpdate {
            title: &draft.title,
            publication_year: &draft.publication_year,
            author_id: draft.author_id,
            updated_at: Utc::now(),
        };

        let row: Option<BookRow> = diesel::update(
            books::table
                .filter(books::id.eq(id))
                .filter(books::deleted_at.is_null()),
        )
        .set(&changes)
        .returning(BookRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;

        match row {
            Some(row) => {
                let name = author_name(&mut conn, row.author_id).await?;
                Ok(Some(row.into_book(name)))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(
            books::table
                .filter(books::id.eq(id))
                .filter(books::deleted_at.is_null()),
        )
        .set(books::deleted_at.eq(Some(Utc::now())))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
