//! Tests for the error response payload and extractor fallbacks.

use super::*;
use actix_web::{App, body::to_bytes, test as actix_test};
use rstest::rstest;
use serde::Deserialize;
use serde_json::Value;

#[rstest]
#[case(Error::bad_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::authentication("who"), StatusCode::UNAUTHORIZED)]
#[case(Error::authorization("no"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("gone"), StatusCode::NOT_FOUND)]
#[case(Error::validation("shape"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Error::unexpected("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_matches_taxonomy(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
    assert_eq!(expected.as_u16(), error.code().http_status());
}

#[actix_web::test]
async fn body_echoes_message_only() {
    let response = Error::unexpected("Unexpected error from database").error_response();
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let value: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(
        value,
        serde_json::json!({ "message": "Unexpected error from database" })
    );
}

#[rstest]
#[case("12", Ok(12))]
#[case(" 7 ", Ok(7))]
#[case("0", Err("Invalid author id"))]
#[case("-3", Err("Invalid author id"))]
#[case("abc", Err("Invalid author id"))]
#[case("", Err("Invalid author id"))]
fn parse_id_accepts_positive_integers(#[case] raw: &str, #[case] expected: Result<i64, &str>) {
    let parsed = parse_id(raw, "author").map_err(|err| err.message().to_owned());
    assert_eq!(parsed, expected.map_err(str::to_owned));
}

#[derive(Deserialize)]
struct Payload {
    name: String,
}

async fn accept_json(payload: web::Json<Payload>) -> HttpResponse {
    HttpResponse::Ok().body(payload.into_inner().name)
}

#[actix_web::test]
async fn undecodable_json_is_invalid_data() {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/echo", web::post().to(accept_json))
            .default_service(web::to(endpoint_not_found)),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/echo")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\":")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.message, INVALID_DATA_MESSAGE);

    let request = actix_test::TestRequest::get().uri("/missing").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.message, UNKNOWN_ENDPOINT_MESSAGE);
}
