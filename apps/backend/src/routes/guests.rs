use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::{GuestId, ValidatedJson};
use crate::protocol::Envelope;
use crate::repos::{NewActivity, ResponseSubmission};
use crate::state::app_state::AppState;

async fn submit_response(
    guest_id: GuestId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<ResponseSubmission>,
) -> Result<HttpResponse, AppError> {
    let response = app_state
        .guests()
        .submit_guest_response(guest_id.0, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(Envelope::ok(response)))
}

async fn track_activity(
    guest_id: GuestId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewActivity>,
) -> Result<HttpResponse, AppError> {
    let activity = app_state
        .guests()
        .track_activity(guest_id.0, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(Envelope::ok(activity)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{guest_id}/response").route(web::put().to(submit_response)))
        .service(
            web::resource("/{guest_id}/activities").route(web::post().to(track_activity)),
        );
}
