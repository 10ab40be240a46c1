//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every handler under `/auth`, `/author` and `/book`
//! - **Schemas**: the request and response bodies from the inbound layer
//! - **Security**: the `bearer_auth` HTTP bearer (JWT) scheme
//!
//! The generated document is served by Swagger UI under `/docs/` and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::auth::{LoginForm, SignupForm, TokenResponse};
use crate::inbound::http::authors::{AuthorRequest, AuthorResponse};
use crate::inbound::http::books::{BookRequest, BookResponse};
use crate::inbound::http::schemas::{ErrorResponse, MessageResponse};

/// Name of the bearer security scheme referenced by protected handlers.
pub const BEARER_SCHEME_NAME: &str = "bearer_auth";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME_NAME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /auth/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bookshelf API",
        description = "Authors and books behind signup, login and bearer tokens."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::login,
        crate::inbound::http::authors::create_author,
        crate::inbound::http::authors::list_authors,
        crate::inbound::http::authors::get_author,
        crate::inbound::http::authors::update_author,
        crate::inbound::http::authors::delete_author,
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
    ),
    components(schemas(
        SignupForm,
        LoginForm,
        TokenResponse,
        AuthorRequest,
        AuthorResponse,
        BookRequest,
        BookResponse,
        ErrorResponse,
        MessageResponse
    )),
    tags(
        (name = "auth", description = "Account signup and token issuance"),
        (name = "authors", description = "Author records"),
        (name = "books", description = "Book records")
    )
)]
pub struct ApiDoc;
