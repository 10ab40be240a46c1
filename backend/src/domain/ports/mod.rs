//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, hashing, tokens) are implemented in
//! `outbound`; driving ports (commands, queries, auth use-cases) are
//! implemented by the domain services and consumed by `inbound`.

mod macros;
pub(crate) use macros::define_port_error;

mod author_command;
mod author_query;
mod author_repository;
mod book_command;
mod book_query;
mod book_repository;
mod login_service;
mod password_hasher;
mod persistence_error;
mod signup_service;
mod token_service;
mod user_repository;

#[cfg(test)]
pub use author_command::MockAuthorCommand;
pub use author_command::AuthorCommand;
#[cfg(test)]
pub use author_query::MockAuthorQuery;
pub use author_query::AuthorQuery;
#[cfg(test)]
pub use author_repository::MockAuthorRepository;
pub use author_repository::AuthorRepository;
#[cfg(test)]
pub use book_command::MockBookCommand;
pub use book_command::BookCommand;
#[cfg(test)]
pub use book_query::MockBookQuery;
pub use book_query::BookQuery;
#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::BookRepository;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use persistence_error::PersistenceError;
#[cfg(test)]
pub use signup_service::MockSignupService;
pub use signup_service::SignupService;
#[cfg(test)]
pub use token_service::MockTokenService;
pub use token_service::{TokenError, TokenService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
