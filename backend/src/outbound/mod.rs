//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **security**: bcrypt password hashing and HS256 JWT tokens
//! - **memory**: in-memory repositories for tests (`test-support` feature)
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod persistence;
pub mod security;
