//! Domain primitives, ports and use-case services.
//!
//! Purpose: define the entities the HTTP and persistence layers exchange and
//! the services that orchestrate them. Nothing here knows about actix, Diesel
//! or any wire format.
//!
//! Public surface:
//! - Error / ErrorCode: the single failure channel between layers.
//! - Author, Book, User and their draft/new-record companions.
//! - LoginCredentials, TokenClaims, AccessToken: authentication values.
//! - AuthorService, BookService, UserService, AuthService: driving port
//!   implementations.

pub mod auth;
pub mod auth_service;
pub mod author;
pub mod author_service;
pub mod book;
pub mod book_service;
pub mod credentials;
pub mod error;
pub(crate) mod persistence_mapping;
pub mod ports;
pub mod user;
pub mod user_service;

pub use self::auth::{ACCESS_TOKEN_TTL_SECS, AccessToken, LoginCredentials, TokenClaims};
pub use self::auth_service::AuthService;
pub use self::author::{Author, AuthorDraft};
pub use self::author_service::AuthorService;
pub use self::book::{Book, BookDraft};
pub use self::book_service::BookService;
pub use self::error::{Error, ErrorCode};
pub use self::persistence_mapping::DATABASE_FAILURE_MESSAGE;
pub use self::user::{NewUser, PasswordHash, Registration, User};
pub use self::user_service::UserService;
