//! Server construction and middleware wiring.

pub mod config;
mod state_builders;

pub use config::{AppConfig, ConfigEnv, ConfigError, ProcessEnv};
pub use state_builders::{SecurityAdapters, build_diesel_http_state, build_http_state};

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::domain::ports::TokenService;
use crate::inbound::http::auth::{login, signup};
use crate::inbound::http::authors::{
    create_author, delete_author, get_author, list_authors, update_author,
};
use crate::inbound::http::books::{create_book, delete_book, get_book, list_books, update_book};
use crate::inbound::http::error::{endpoint_not_found, form_config, json_config};
use crate::inbound::http::state::HttpState;
use crate::middleware::{BearerAuth, RequestLog};

/// Build the application: public `/auth`, bearer-guarded `/author` and
/// `/book`, Swagger UI under `/docs/`, and a JSON 404 for everything else.
pub fn build_app(
    http_state: web::Data<HttpState>,
    tokens: Arc<dyn TokenService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let auth = web::scope("/auth").service(signup).service(login);

    let authors = web::scope("/author")
        .wrap(BearerAuth::new(Arc::clone(&tokens)))
        .service(create_author)
        .service(list_authors)
        .service(get_author)
        .service(update_author)
        .service(delete_author);

    let books = web::scope("/book")
        .wrap(BearerAuth::new(tokens))
        .service(create_book)
        .service(list_books)
        .service(get_book)
        .service(update_book)
        .service(delete_book);

    App::new()
        .app_data(http_state)
        .app_data(json_config())
        .app_data(form_config())
        .wrap(RequestLog)
        .service(auth)
        .service(authors)
        .service(books)
        .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .default_service(web::to(endpoint_not_found))
}

/// Construct an Actix HTTP server bound to `bind_addr`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    http_state: HttpState,
    tokens: Arc<dyn TokenService>,
    bind_addr: SocketAddr,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(http_state);
    let server = HttpServer::new(move || build_app(http_state.clone(), Arc::clone(&tokens)))
        .bind(bind_addr)?
        .run();
    Ok(server)
}
