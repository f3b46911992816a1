//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn response_payload(
    error: &Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Error {
    let response = ResponseError::error_response(error);
    assert_eq!(response.status(), expected_status);

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace header is ASCII").to_owned());
    assert_eq!(header.as_deref(), expected_trace_id);

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace_id(expected_trace_id: String) {
    let error = Error::internal("connection refused by 10.0.0.5")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let payload = response_payload(
        &error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert_eq!(payload.trace_id(), Some(expected_trace_id.as_str()));
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(expected_trace_id: String) {
    let error = Error::not_found("No todo item with id 42 found")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"id": "42"}));

    let payload = response_payload(
        &error,
        StatusCode::NOT_FOUND,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(payload, error);
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::invalid_request("bad").with_details(json!({"field": "title"}));

    let payload = response_payload(&error, StatusCode::BAD_REQUEST, None).await;
    assert_eq!(payload.trace_id(), None);
    assert_eq!(payload.details(), Some(&json!({"field": "title"})));
}

#[rstest]
fn from_actix_error_is_redacted_internal_error() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}

#[derive(Debug, Deserialize)]
struct Probe {
    #[expect(dead_code, reason = "payload only needs to deserialise")]
    name: String,
}

async fn probe(_body: web::Json<Probe>, _id: web::Path<u32>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[rstest]
#[case(r#"{"name": "#, "invalid_json")]
#[case(r#"{"name": 7}"#, "invalid_json")]
#[actix_web::test]
async fn json_extractor_failures_use_error_envelope(#[case] body: &str, #[case] code: &str) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/probe/{id}", web::post().to(probe)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/probe/1")
        .insert_header(("content-type", "application/json"))
        .set_payload(body.to_owned())
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["code"], json!("invalid_request"));
    assert_eq!(payload["details"]["code"], json!(code));
}

#[rstest]
#[actix_web::test]
async fn path_extractor_failures_use_error_envelope() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .route("/probe/{id}", web::post().to(probe)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/probe/not-a-number")
        .set_json(json!({"name": "x"}))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["details"]["code"], json!("invalid_path"));
}
