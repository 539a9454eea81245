use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::protocol::Envelope;
use crate::state::app_state::AppState;

async fn list_countries(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let countries = app_state.guests().get_countries().await?;
    Ok(HttpResponse::Ok().json(Envelope::ok(countries)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(list_countries)));
}
