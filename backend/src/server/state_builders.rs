//! Builders wiring repositories and security adapters into HTTP state.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    AuthorRepository, BookRepository, PasswordHasher, TokenService, UserRepository,
};
use crate::domain::{AuthService, AuthorService, BookService, UserService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::validation::RequestValidator;
use crate::outbound::persistence::{
    DbPool, DieselAuthorRepository, DieselBookRepository, DieselUserRepository,
};

/// Credential and token adapters shared by the auth services.
#[derive(Clone)]
pub struct SecurityAdapters {
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub clock: Arc<dyn Clock>,
}

/// Assemble handler state over any set of repositories.
///
/// Each author and book service instance backs both its command and query
/// port.
pub fn build_http_state<U, A, B>(
    users: Arc<U>,
    authors: Arc<A>,
    books: Arc<B>,
    security: &SecurityAdapters,
    validator: Arc<RequestValidator>,
) -> HttpState
where
    U: UserRepository + 'static,
    A: AuthorRepository + 'static,
    B: BookRepository + 'static,
{
    let author_service = Arc::new(AuthorService::new(authors));
    let book_service = Arc::new(BookService::new(books));
    HttpState::new(
        HttpStatePorts {
            signup: Arc::new(UserService::new(
                Arc::clone(&users),
                Arc::clone(&security.hasher),
            )),
            login: Arc::new(AuthService::new(
                users,
                Arc::clone(&security.hasher),
                Arc::clone(&security.tokens),
                Arc::clone(&security.clock),
            )),
            authors: author_service.clone(),
            authors_query: author_service,
            books: book_service.clone(),
            books_query: book_service,
        },
        validator,
    )
}

/// Handler state backed by the Diesel repositories sharing `pool`.
pub fn build_diesel_http_state(
    pool: &DbPool,
    security: &SecurityAdapters,
    validator: Arc<RequestValidator>,
) -> HttpState {
    build_http_state(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselAuthorRepository::new(pool.clone())),
        Arc::new(DieselBookRepository::new(pool.clone())),
        security,
        validator,
    )
}
