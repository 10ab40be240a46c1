//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod authors;
pub mod books;
pub mod error;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
