//! End-to-end account flows over the in-memory adapters.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use bookshelf::domain::ACCESS_TOKEN_TTL_SECS;
use bookshelf::inbound::http::auth::LoginForm;
use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::{Value, json};

mod support;

use support::{SteppingClock, TestBackend, bearer, register_and_login, signup_form};

#[actix_web::test]
async fn signup_login_and_use_token() {
    let backend = TestBackend::new();
    let app = actix_test::init_service(backend.app()).await;

    let token = register_and_login(&app, "reader@example.com").await;

    let request = bearer(actix_test::TestRequest::get().uri("/author"), &token).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn duplicate_signup_is_rejected() {
    let backend = TestBackend::new();
    let app = actix_test::init_service(backend.app()).await;
    register_and_login(&app, "twice@example.com").await;

    let request = actix_test::TestRequest::post()
        .uri("/auth/signup")
        .set_form(signup_form("Second Attempt", "twice@example.com"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "key email duplicate value");
}

#[rstest]
#[case("reader@example.com", "wrong-password")]
#[case("nobody@example.com", "correct-horse")]
#[actix_web::test]
async fn bad_credentials_share_one_answer(#[case] email: &str, #[case] password: &str) {
    let backend = TestBackend::new();
    let app = actix_test::init_service(backend.app()).await;
    register_and_login(&app, "reader@example.com").await;

    let request = actix_test::TestRequest::post()
        .uri("/auth/login")
        .set_form(LoginForm {
            email: email.to_owned(),
            password: password.to_owned(),
        })
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[actix_web::test]
async fn signup_with_missing_fields_names_them() {
    let backend = TestBackend::new();
    let app = actix_test::init_service(backend.app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/auth/signup")
        .set_form([("email", "reader@example.com")])
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    let message = body["message"].as_str().expect("message");
    assert!(message.contains("full_name is required"), "{message}");
    assert!(message.contains("email_confirmation must match email"), "{message}");
    assert!(message.contains("password must be at least 7 characters"), "{message}");
}

#[actix_web::test]
async fn token_expires_after_fifteen_minutes() {
    let clock = SteppingClock::starting_at(
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
            .single()
            .expect("valid instant"),
    );
    let backend = TestBackend::with_clock(clock.as_clock());
    let app = actix_test::init_service(backend.app()).await;
    let token = register_and_login(&app, "timed@example.com").await;

    clock.advance_secs(ACCESS_TOKEN_TTL_SECS - 1);
    let request = bearer(actix_test::TestRequest::get().uri("/book"), &token).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    clock.advance_secs(1);
    let request = bearer(actix_test::TestRequest::get().uri("/book"), &token).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Invalid or expired token");
}

#[actix_web::test]
async fn tampered_token_is_rejected() {
    let backend = TestBackend::new();
    let app = actix_test::init_service(backend.app()).await;
    let token = register_and_login(&app, "reader@example.com").await;
    let forged = format!("{token}x");

    let request = bearer(actix_test::TestRequest::get().uri("/author"), &forged).to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Invalid or expired token");
}
