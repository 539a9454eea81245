use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::protocol::Envelope;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status_name: String,
}

async fn get_invitation(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let invite_guid = path.into_inner();
    let details = app_state.guests().get_guest_invitation(&invite_guid).await?;
    Ok(HttpResponse::Ok().json(Envelope::ok(details)))
}

async fn update_status(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let invite_guid = path.into_inner();
    let updated = app_state
        .guests()
        .update_guest_status(&invite_guid, &body.status_name)
        .await?;
    Ok(HttpResponse::Ok().json(Envelope::ok(updated)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{invite_guid}").route(web::get().to(get_invitation)))
        .service(web::resource("/{invite_guid}/status").route(web::put().to(update_status)));
}
