use actix_web::test;
use backend_test_support::envelope::assert_envelope_ok;
use wedding_backend::config::db::BackendKind;
use wedding_backend::infra::state::build_state;

use crate::support::app_builder::create_test_app_with_state;
use crate::support::stores::sea_store;

#[actix_web::test]
async fn default_state_reports_local_backend() {
    let state = build_state().build().await.expect("default state builds");
    let app = create_test_app_with_state(state).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    let data = assert_envelope_ok(status, &body);
    assert_eq!(data["status"], "ok");
    assert_eq!(data["backend"], "local");
    assert_eq!(data["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(data["time"].is_string());
}

#[actix_web::test]
async fn remote_backend_is_pinged() {
    let state = build_state()
        .with_store(sea_store().await, BackendKind::Remote)
        .build()
        .await
        .expect("prebuilt store state builds");
    let app = create_test_app_with_state(state).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    let data = assert_envelope_ok(status, &body);
    assert_eq!(data["backend"], "remote");
}
