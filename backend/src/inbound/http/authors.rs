//! Author handlers.
//!
//! ```text
//! POST   /author      {"full_name":"Ursula K. Le Guin"}
//! GET    /author
//! GET    /author/{id}
//! PUT    /author/{id} {"full_name":"Ursula Le Guin"}
//! DELETE /author/{id}
//! ```
//!
//! Every route sits behind the bearer middleware; the verified claims are
//! only used to attribute writes in the logs.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Author, TokenClaims};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::parse_id;
use crate::inbound::http::schemas::{ErrorResponse, MessageResponse};
use crate::inbound::http::state::HttpState;

/// Acknowledgement returned after an author is stored.
pub const AUTHOR_CREATED_MESSAGE: &str = "Author created";

/// Author payload for create and full-record update.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct AuthorRequest {
    #[schema(example = "Ursula K. Le Guin")]
    pub full_name: String,
}

/// Author as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct AuthorResponse {
    pub id: i64,
    pub full_name: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            full_name: author.full_name,
        }
    }
}

fn actor(claims: Option<&web::ReqData<TokenClaims>>) -> Option<i64> {
    claims.map(|claims| claims.user_id)
}

/// Store a new author.
#[utoipa::path(
    post,
    path = "/author",
    request_body = AuthorRequest,
    responses(
        (status = 201, description = "Author created", body = MessageResponse),
        (status = 400, description = "Invalid data or duplicate name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["authors"],
    operation_id = "createAuthor",
    security(("bearer_auth" = []))
)]
#[post("")]
pub async fn create_author(
    state: web::Data<HttpState>,
    claims: Option<web::ReqData<TokenClaims>>,
    payload: web::Json<AuthorRequest>,
) -> ApiResult<HttpResponse> {
    let draft = state.validator.author(&payload)?;
    let author = state.authors.create_author(draft).await?;
    info!(author_id = author.id, actor = ?actor(claims.as_ref()), "author created");
    Ok(HttpResponse::Created().json(MessageResponse::new(AUTHOR_CREATED_MESSAGE)))
}

/// List live authors.
#[utoipa::path(
    get,
    path = "/author",
    responses(
        (status = 200, description = "Authors", body = [AuthorResponse]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["authors"],
    operation_id = "listAuthors",
    security(("bearer_auth" = []))
)]
#[get("")]
pub async fn list_authors(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<AuthorResponse>>> {
    let authors = state.authors_query.list_authors().await?;
    Ok(web::Json(
        authors.into_iter().map(AuthorResponse::from).collect(),
    ))
}

/// Fetch one author.
#[utoipa::path(
    get,
    path = "/author/{id}",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author", body = AuthorResponse),
        (status = 400, description = "Invalid author id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["authors"],
    operation_id = "getAuthor",
    security(("bearer_auth" = []))
)]
#[get("/{id}")]
pub async fn get_author(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AuthorResponse>> {
    let id = parse_id(&path, "author")?;
    let author = state.authors_query.get_author(id).await?;
    Ok(web::Json(author.into()))
}

/// Replace an author's writable fields.
#[utoipa::path(
    put,
    path = "/author/{id}",
    params(("id" = i64, Path, description = "Author id")),
    request_body = AuthorRequest,
    responses(
        (status = 200, description = "Updated author", body = AuthorResponse),
        (status = 400, description = "Invalid data or author id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["authors"],
    operation_id = "updateAuthor",
    security(("bearer_auth" = []))
)]
#[put("/{id}")]
pub async fn update_author(
    state: web::Data<HttpState>,
    claims: Option<web::ReqData<TokenClaims>>,
    path: web::Path<String>,
    payload: web::Json<AuthorRequest>,
) -> ApiResult<web::Json<AuthorResponse>> {
    let id = parse_id(&path, "author")?;
    let draft = state.validator.author(&payload)?;
    let author = state.authors.update_author(id, draft).await?;
    info!(author_id = id, actor = ?actor(claims.as_ref()), "author updated");
    Ok(web::Json(author.into()))
}

/// Soft-delete an author.
#[utoipa::path(
    delete,
    path = "/author/{id}",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 400, description = "Invalid author id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["authors"],
    operation_id = "deleteAuthor",
    security(("bearer_auth" = []))
)]
#[delete("/{id}")]
pub async fn delete_author(
    state: web::Data<HttpState>,
    claims: Option<web::ReqData<TokenClaims>>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path, "author")?;
    state.authors.delete_author(id).await?;
    info!(author_id = id, actor = ?actor(claims.as_ref()), "author deleted");
    Ok(HttpResponse::NoContent().finish())
}
