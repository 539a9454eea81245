use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::assert_envelope_error;
use wedding_backend::config::db::BackendKind;

use crate::support::app_builder::create_test_app;
use crate::support::fixtures::JONAS_GUID;
use crate::support::stores::local_service;

#[actix_web::test]
async fn every_response_carries_a_request_id() {
    let app = create_test_app(local_service(), BackendKind::Local).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/invitations/{JONAS_GUID}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id should be set");
    assert!(!id.is_empty());
}

#[actix_web::test]
async fn inbound_request_id_is_reused_in_error_envelope() {
    let app = create_test_app(local_service(), BackendKind::Local).await;

    let req = test::TestRequest::get()
        .uri("/api/invitations/missing")
        .insert_header(("x-request-id", "req_from_proxy-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;

    let error = assert_envelope_error(
        status,
        &headers,
        &body,
        StatusCode::NOT_FOUND,
        "GUEST_NOT_FOUND",
        None,
    );
    assert_eq!(error["trace_id"], "req_from_proxy-42");
    assert_eq!(headers.get("x-request-id").unwrap(), "req_from_proxy-42");
    assert_eq!(headers.get("x-trace-id").unwrap(), "req_from_proxy-42");
}

#[actix_web::test]
async fn unsafe_inbound_request_id_is_replaced() {
    let app = create_test_app(local_service(), BackendKind::Local).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/invitations/{JONAS_GUID}"))
        .insert_header(("x-request-id", "has spaces; and=stuff"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let id = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_ne!(id, "has spaces; and=stuff");
    assert_eq!(id.len(), 36, "generated ids are UUIDs");
}
