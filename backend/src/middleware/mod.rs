//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! access logging and bearer authentication.

pub mod bearer;
pub mod request_log;

pub use bearer::BearerAuth;
pub use request_log::RequestLog;
