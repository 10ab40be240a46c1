//! Shared wiring for HTTP integration tests over the in-memory adapters.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, test as actix_test, web};
use bookshelf::domain::ports::TokenService;
use bookshelf::inbound::http::auth::{LoginForm, SignupForm, TokenResponse};
use bookshelf::inbound::http::state::HttpState;
use bookshelf::inbound::http::validation::RequestValidator;
use bookshelf::outbound::memory::{
    InMemoryAuthorRepository, InMemoryBookRepository, InMemoryStore, InMemoryUserRepository,
};
use bookshelf::outbound::security::{BcryptPasswordHasher, JwtTokenService};
use bookshelf::server::{SecurityAdapters, build_app, build_http_state};
use chrono::{DateTime, TimeZone, Utc};
use mockable::{Clock, MockClock};

/// Lowest bcrypt cost, keeping hashing fast under test.
pub const TEST_BCRYPT_COST: u32 = 4;
pub const TEST_SECRET: &[u8] = b"integration-signing-secret";
pub const PASSWORD: &str = "correct-horse";

/// Clock whose reading tests can move forward.
#[derive(Clone)]
pub struct SteppingClock {
    epoch_secs: Arc<AtomicI64>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            epoch_secs: Arc::new(AtomicI64::new(start.timestamp())),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.epoch_secs.fetch_add(secs, Ordering::SeqCst);
    }

    /// A `MockClock` reading this clock's current value.
    pub fn as_clock(&self) -> Arc<dyn Clock> {
        let epoch_secs = Arc::clone(&self.epoch_secs);
        let mut clock = MockClock::new();
        clock.expect_utc().returning(move || {
            Utc.timestamp_opt(epoch_secs.load(Ordering::SeqCst), 0)
                .single()
                .expect("representable instant")
        });
        Arc::new(clock)
    }
}

/// In-memory application state plus the token service guarding it.
#[derive(Clone)]
pub struct TestBackend {
    pub state: web::Data<HttpState>,
    pub tokens: Arc<dyn TokenService>,
}

impl TestBackend {
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let tokens: Arc<dyn TokenService> =
            Arc::new(JwtTokenService::new(TEST_SECRET, Arc::clone(&clock)));
        let security = SecurityAdapters {
            hasher: Arc::new(BcryptPasswordHasher::new(TEST_BCRYPT_COST)),
            tokens: Arc::clone(&tokens),
            clock,
        };
        let state = build_http_state(
            Arc::new(InMemoryUserRepository::new(Arc::clone(&store))),
            Arc::new(InMemoryAuthorRepository::new(Arc::clone(&store))),
            Arc::new(InMemoryBookRepository::new(store)),
            &security,
            Arc::new(RequestValidator::new().expect("validator")),
        );
        Self {
            state: web::Data::new(state),
            tokens,
        }
    }

    pub fn new() -> Self {
        Self::with_clock(Arc::new(mockable::DefaultClock))
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        build_app(self.state.clone(), Arc::clone(&self.tokens))
    }
}

pub fn signup_form(full_name: &str, email: &str) -> SignupForm {
    SignupForm {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        email_confirmation: email.to_owned(),
        password: PASSWORD.to_owned(),
        password_confirmation: PASSWORD.to_owned(),
    }
}

/// Register `email` and return a bearer token for it.
pub async fn register_and_login<S, B>(app: &S, email: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let signup = actix_test::TestRequest::post()
        .uri("/auth/signup")
        .set_form(signup_form("Test Reader", email))
        .to_request();
    let response = actix_test::call_service(app, signup).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let login = actix_test::TestRequest::post()
        .uri("/auth/login")
        .set_form(LoginForm {
            email: email.to_owned(),
            password: PASSWORD.to_owned(),
        })
        .to_request();
    let response = actix_test::call_service(app, login).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: TokenResponse = actix_test::read_body_json(response).await;
    body.token
}

pub fn bearer(request: actix_test::TestRequest, token: &str) -> actix_test::TestRequest {
    request.insert_header((AUTHORIZATION, format!("Bearer {token}")))
}
