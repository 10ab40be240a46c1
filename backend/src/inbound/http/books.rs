//! Book handlers.
//!
//! ```text
//! POST   /book      {"title":"The Dispossessed","publication_year":"1974","author_id":1}
//! GET    /book
//! GET    /book/{id}
//! PUT    /book/{id} {"title":"...","publication_year":"...","author_id":1}
//! DELETE /book/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Book, TokenClaims};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::parse_id;
use crate::inbound::http::schemas::{ErrorResponse, MessageResponse};
use crate::inbound::http::state::HttpState;

/// Acknowledgement returned after a book is stored.
pub const BOOK_CREATED_MESSAGE: &str = "Book created";

/// Book payload for create and full-record update.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct BookRequest {
    #[schema(example = "The Dispossessed")]
    pub title: String,
    /// Free text; no format is enforced.
    #[schema(example = "1974")]
    pub publication_year: String,
    pub author_id: i64,
}

/// Book as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub publication_year: String,
    pub author_id: i64,
    /// Name of the referenced author when it could be resolved.
    pub author_name: Option<String>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            publication_year: book.publication_year,
            author_id: book.author_id,
            author_name: book.author_name,
        }
    }
}

/// Store a new book.
#[utoipa::path(
    post,
    path = "/book",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = MessageResponse),
        (status = 400, description = "Invalid data or unknown author", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["books"],
    operation_id = "createBook",
    security(("bearer_auth" = []))
)]
#[post("")]
pub async fn create_book(
    state: web::Data<HttpState>,
    claims: Option<web::ReqData<TokenClaims>>,
    payload: web::Json<BookRequest>,
) -> ApiResult<HttpResponse> {
    let draft = state.validator.book(&payload)?;
    let book = state.books.create_book(draft).await?;
    info!(
        book_id = book.id,
        actor = ?claims.map(|claims| claims.user_id),
        "book created"
    );
    Ok(HttpResponse::Created().json(MessageResponse::new(BOOK_CREATED_MESSAGE)))
}

/// List live books.
#[utoipa::path(
    get,
    path = "/book",
    responses(
        (status = 200, description = "Books", body = [BookResponse]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["books"],
    operation_id = "listBooks",
    security(("bearer_auth" = []))
)]
#[get("")]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BookResponse>>> {
    let books = state.books_query.list_books().await?;
    Ok(web::Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Fetch one book.
#[utoipa::path(
    get,
    path = "/book/{id}",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book", body = BookResponse),
        (status = 400, description = "Invalid book id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["books"],
    operation_id = "getBook",
    security(("bearer_auth" = []))
)]
#[get("/{id}")]
pub async fn get_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BookResponse>> {
    let id = parse_id(&path, "book")?;
    let book = state.books_query.get_book(id).await?;
    Ok(web::Json(book.into()))
}

/// Replace a book's writable fields.
#[utoipa::path(
    put,
    path = "/book/{id}",
    params(("id" = i64, Path, description = "Book id")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Updated book", body = BookResponse),
        (status = 400, description = "Invalid data, book id or author", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["books"],
    operation_id = "updateBook",
    security(("bearer_auth" = []))
)]
#[put("/{id}")]
pub async fn update_book(
    state: web::Data<HttpState>,
    claims: Option<web::ReqData<TokenClaims>>,
    path: web::Path<String>,
    payload: web::Json<BookRequest>,
) -> ApiResult<web::Json<BookResponse>> {
    let id = parse_id(&path, "book")?;
    let draft = state.validator.book(&payload)?;
    let book = state.books.update_book(id, draft).await?;
    info!(
        book_id = id,
        actor = ?claims.map(|claims| claims.user_id),
        "book updated"
    );
    Ok(web::Json(book.into()))
}

/// Soft-delete a book.
#[utoipa::path(
    delete,
    path = "/book/{id}",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Invalid book id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["books"],
    operation_id = "deleteBook",
    security(("bearer_auth" = []))
)]
#[delete("/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    claims: Option<web::ReqData<TokenClaims>>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path, "book")?;
    state.books.delete_book(id).await?;
    info!(
        book_id = id,
        actor = ?claims.map(|claims| claims.user_id),
        "book deleted"
    );
    Ok(HttpResponse::NoContent().finish())
}
