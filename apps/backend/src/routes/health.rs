use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::protocol::Envelope;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    app_version: &'static str,
    backend: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    time: OffsetDateTime,
}

/// Reports the active backend; fails with 503 when its store is unreachable.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    app_state.guests().store().ping().await?;

    let report = HealthReport {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        backend: app_state.backend().as_str(),
        time: OffsetDateTime::now_utc(),
    };
    Ok(HttpResponse::Ok().json(Envelope::ok(report)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(health)));
}
