//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AuthorCommand, AuthorQuery, BookCommand, BookQuery, LoginService, SignupService,
};
use crate::inbound::http::validation::RequestValidator;

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub authors: Arc<dyn AuthorCommand>,
    pub authors_query: Arc<dyn AuthorQuery>,
    pub books: Arc<dyn BookCommand>,
    pub books_query: Arc<dyn BookQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub authors: Arc<dyn AuthorCommand>,
    pub authors_query: Arc<dyn AuthorQuery>,
    pub books: Arc<dyn BookCommand>,
    pub books_query: Arc<dyn BookQuery>,
    pub validator: Arc<RequestValidator>,
}

impl HttpState {
    /// Construct state from a ports bundle and the shared validator.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bookshelf::domain::{AuthService, AuthorService, BookService, UserService};
    /// use bookshelf::inbound::http::state::{HttpState, HttpStatePorts};
    /// use bookshelf::inbound::http::validation::RequestValidator;
    /// use bookshelf::outbound::memory::{
    ///     InMemoryAuthorRepository, InMemoryBookRepository, InMemoryStore, InMemoryUserRepository,
    /// };
    /// use bookshelf::outbound::security::{BcryptPasswordHasher, JwtTokenService};
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let users = Arc::new(InMemoryUserRepository::new(store.clone()));
    /// let hasher = Arc::new(BcryptPasswordHasher::new(4));
    /// let clock = Arc::new(DefaultClock);
    /// let tokens = Arc::new(JwtTokenService::new(b"secret", clock.clone()));
    /// let authors = Arc::new(AuthorService::new(Arc::new(InMemoryAuthorRepository::new(
    ///     store.clone(),
    /// ))));
    /// let books = Arc::new(BookService::new(Arc::new(InMemoryBookRepository::new(store))));
    ///
    /// let ports = HttpStatePorts {
    ///     signup: Arc::new(UserService::new(users.clone(), hasher.clone())),
    ///     login: Arc::new(AuthService::new(users, hasher, tokens, clock)),
    ///     authors: authors.clone(),
    ///     authors_query: authors,
    ///     books: books.clone(),
    ///     books_query: books,
    /// };
    /// let validator = RequestValidator::new().expect("validator");
    /// let state = HttpState::new(ports, Arc::new(validator));
    /// let _login = state.login.clone();
    /// ```
    pub fn new(ports: HttpStatePorts, validator: Arc<RequestValidator>) -> Self {
        let HttpStatePorts {
            signup,
            login,
            authors,
            authors_query,
            books,
            books_query,
        } = ports;
        Self {
            signup,
            login,
            authors,
            authors_query,
            books,
            books_query,
            validator,
        }
    }
}
