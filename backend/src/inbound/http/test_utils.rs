//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::test::TestRequest;
use actix_web::{App, web};

use crate::domain::TokenClaims;
use crate::domain::ports::{
    MockAuthorCommand, MockAuthorQuery, MockBookCommand, MockBookQuery, MockLoginService,
    MockSignupService, MockTokenService, TokenError,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::validation::RequestValidator;
use crate::server::build_app;

/// Token accepted by the mocked token service in [`app_with`].
pub const TEST_TOKEN: &str = "test-token";

/// Mocked driving ports. Unset fields have no expectations and panic if hit.
#[derive(Default)]
pub struct MockPorts {
    pub signup: MockSignupService,
    pub login: MockLoginService,
    pub authors: MockAuthorCommand,
    pub authors_query: MockAuthorQuery,
    pub books: MockBookCommand,
    pub books_query: MockBookQuery,
}

/// Claims attached to requests carrying [`TEST_TOKEN`].
pub fn test_claims() -> TokenClaims {
    TokenClaims {
        user_id: 1,
        email: "ada@example.com".into(),
        name: "Ada Lovelace".into(),
        exp: i64::MAX,
    }
}

fn token_service() -> MockTokenService {
    let mut tokens = MockTokenService::new();
    tokens.expect_validate().returning(|token| {
        if token == TEST_TOKEN {
            Ok(test_claims())
        } else {
            Err(TokenError::invalid())
        }
    });
    tokens
}

/// Full application routed over `ports`, guarded by a token service that
/// only accepts [`TEST_TOKEN`].
pub fn app_with(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let MockPorts {
        signup,
        login,
        authors,
        authors_query,
        books,
        books_query,
    } = ports;
    let state = HttpState::new(
        HttpStatePorts {
            signup: Arc::new(signup),
            login: Arc::new(login),
            authors: Arc::new(authors),
            authors_query: Arc::new(authors_query),
            books: Arc::new(books),
            books_query: Arc::new(books_query),
        },
        Arc::new(RequestValidator::new().expect("validator compiles")),
    );
    build_app(web::Data::new(state), Arc::new(token_service()))
}

/// Attach `Authorization: Bearer` [`TEST_TOKEN`] to `request`.
pub fn authorised(request: TestRequest) -> TestRequest {
    request.insert_header((AUTHORIZATION, format!("Bearer {TEST_TOKEN}")))
}
