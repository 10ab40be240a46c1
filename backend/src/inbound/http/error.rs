//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn failures into `{"message": ...}` bodies with a matching status.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::schemas::ErrorResponse;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message for bodies that cannot be decoded.
pub const INVALID_DATA_MESSAGE: &str = "Invalid data";

/// Message for requests to unknown routes.
pub const UNKNOWN_ENDPOINT_MESSAGE: &str = "sorry, endpoint is not found";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Authentication => StatusCode::UNAUTHORIZED,
        ErrorCode::Authorization => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(message = self.message(), "request failed");
        }
        HttpResponse::build(status).json(ErrorResponse::from(self))
    }
}

/// JSON extractor configuration answering undecodable bodies with
/// `400 Invalid data`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        warn!(error = %err, "rejected JSON payload");
        Error::bad_request(INVALID_DATA_MESSAGE).into()
    })
}

/// Form extractor configuration answering undecodable bodies with
/// `400 Invalid data`.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req: &HttpRequest| {
        warn!(error = %err, "rejected form payload");
        Error::bad_request(INVALID_DATA_MESSAGE).into()
    })
}

/// Parse a positive numeric path id, naming `entity` in the error.
pub fn parse_id(raw: &str, entity: &str) -> Result<i64, Error> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::bad_request(format!("Invalid {entity} id"))),
    }
}

/// Fallback handler for unmatched routes.
pub async fn endpoint_not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found(UNKNOWN_ENDPOINT_MESSAGE))
}

#[cfg(test)]
mod tests;
