use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::envelope::{assert_envelope_error, assert_envelope_ok};
use serde_json::json;
use wedding_backend::config::db::BackendKind;

use crate::support::app_builder::create_test_app;
use crate::support::fixtures::{JONAS_GUID, SARAH_GUID};
use crate::support::stores::{local_service, sea_service};

#[actix_web::test]
async fn lookup_returns_flattened_invitation() {
    let app = create_test_app(local_service(), BackendKind::Local).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/invitations/{JONAS_GUID}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    let data = assert_envelope_ok(status, &body);
    assert_eq!(data["invite_guid"], JONAS_GUID);
    assert_eq!(data["guest_full_name"], "Jonas Petraitis");
    assert_eq!(data["countries"]["country_code"], "LT");
    assert_eq!(data["invitation_status"]["status_name"], "pending");
    assert!(data["guest_responses"].is_null());
    assert!(data.get("updated_at").is_none());
}

#[actix_web::test]
async fn unknown_token_is_404_guest_not_found() {
    let app = create_test_app(sea_service().await, BackendKind::Remote).await;

    let req = test::TestRequest::get()
        .uri("/api/invitations/not-a-real-token")
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
        Some("Guest not found"),
    );
    assert!(error["trace_id"].is_string());
}

#[actix_web::test]
async fn status_update_returns_updated_invitation() {
    let app = create_test_app(local_service(), BackendKind::Local).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/invitations/{SARAH_GUID}/status"))
        .set_json(json!({ "status_name": "accepted" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    let data = assert_envelope_ok(status, &body);
    assert_eq!(data["invite_guid"], SARAH_GUID);
    assert_eq!(data["status_id"], 2);
    assert!(data["updated_at"].is_string());
}

#[actix_web::test]
async fn unknown_status_is_404_status_not_found() {
    let app = create_test_app(local_service(), BackendKind::Local).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/invitations/{SARAH_GUID}/status"))
        .set_json(json!({ "status_name": "maybe" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;

    assert_envelope_error(
        status,
        &headers,
        &body,
        StatusCode::NOT_FOUND,
        "STATUS_NOT_FOUND",
        Some("Status not found"),
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/invitations/{SARAH_GUID}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let data = assert_envelope_ok(status, &body);
    assert_eq!(data["invitation_status"]["status_name"], "pending");
}

#[actix_web::test]
async fn status_body_without_name_is_400_invalid_payload() {
    let app = create_test_app(local_service(), BackendKind::Local).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/invitations/{SARAH_GUID}/status"))
        .set_json(json!({ "status": "accepted" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;

    assert_envelope_error(
        status,
        &headers,
        &body,
        StatusCode::BAD_REQUEST,
        "INVALID_PAYLOAD",
        None,
    );
}
