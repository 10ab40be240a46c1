//! Account handlers.
//!
//! ```text
//! POST /auth/signup full_name=Ada&email=ada@example.com&...
//! POST /auth/login  email=ada@example.com&password=engine-1843
//! ```
//!
//! Both endpoints take URL-encoded forms. Missing fields decode as empty
//! strings so the validator can name them instead of rejecting the body.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorResponse, MessageResponse};
use crate::inbound::http::state::HttpState;

/// Acknowledgement returned after a successful signup.
pub const USER_CREATED_MESSAGE: &str = "user created";

/// Signup form for `POST /auth/signup`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub email_confirmation: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Login form for `POST /auth/login`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signed bearer token issued by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct TokenResponse {
    /// HS256 JWT valid for fifteen minutes.
    pub token: String,
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body(content = SignupForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "Invalid data or duplicate email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["auth"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    form: web::Form<SignupForm>,
) -> ApiResult<HttpResponse> {
    let registration = state.validator.signup(&form)?;
    let user = state.signup.sign_up(registration).await?;
    info!(user_id = user.id, "signup accepted");
    Ok(HttpResponse::Created().json(MessageResponse::new(USER_CREATED_MESSAGE)))
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Invalid data", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let credentials = state.validator.login(&form)?;
    let token = state.login.login(&credentials).await?;
    Ok(HttpResponse::Created().json(TokenResponse {
        token: token.into_inner(),
    }))
}
