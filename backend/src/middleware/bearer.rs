//! Bearer-token guard for protected scopes.
//!
//! Requests must carry `Authorization: Bearer <token>`. Verified
//! [`TokenClaims`] are stored in the request extensions so handlers can read
//! them with `web::ReqData<TokenClaims>`. Rejections are answered directly
//! with a 401 body and never reach the wrapped service.

use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{HttpMessage, ResponseError};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

use crate::domain::ports::TokenService;
use crate::domain::{Error, TokenClaims};

/// Message for requests without a usable `Authorization` header.
pub const MISSING_TOKEN_MESSAGE: &str = "Missing or malformed token";
/// Message for tokens that fail verification or have expired.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

const BEARER_SCHEME: &str = "bearer";

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively and the token must be
/// non-empty.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty()).then_some(token)
}

/// Middleware factory that authenticates requests with a [`TokenService`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use bookshelf::middleware::BearerAuth;
/// use bookshelf::outbound::security::JwtTokenService;
/// use mockable::DefaultClock;
///
/// let tokens = Arc::new(JwtTokenService::new(b"secret", Arc::new(DefaultClock)));
/// let _app = App::new().service(web::scope("/author").wrap(BearerAuth::new(tokens)));
/// ```
#[derive(Clone)]
pub struct BearerAuth {
    tokens: Arc<dyn TokenService>,
}

impl BearerAuth {
    /// Guard requests with `tokens`.
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service,
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// Service wrapper produced by [`BearerAuth`].
pub struct BearerAuthMiddleware<S> {
    service: S,
    tokens: Arc<dyn TokenService>,
}

impl<S> BearerAuthMiddleware<S> {
    fn authenticate(&self, req: &ServiceRequest) -> Result<TokenClaims, Error> {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| Error::authentication(MISSING_TOKEN_MESSAGE))?;
        let token =
            bearer_token(header).ok_or_else(|| Error::authentication(MISSING_TOKEN_MESSAGE))?;
        self.tokens.validate(token).map_err(|err| {
            debug!(error = %err, path = req.path(), "bearer token refused");
            Error::authentication(INVALID_TOKEN_MESSAGE)
        })
    }
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.authenticate(&req) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_boxed_body()) })
            }
            Err(err) => {
                let response = req.into_response(err.error_response());
                Box::pin(async move { Ok(response) })
            }
        }
    }
}
