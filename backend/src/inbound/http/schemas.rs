//! Shared response payloads and their OpenAPI schemas.
//!
//! Domain types stay framework-agnostic; the wire shapes that every
//! endpoint shares live here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message, echoed from the domain error.
    #[schema(example = "Author not found")]
    pub message: String,
}

impl From<&Error> for ErrorResponse {
    fn from(error: &Error) -> Self {
        Self {
            message: error.message().to_owned(),
        }
    }
}

/// Acknowledgement body for writes that return no entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Author created")]
    pub message: String,
}

impl MessageResponse {
    /// Wrap an acknowledgement message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
