use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use wedding_backend::config::db::BackendKind;
use wedding_backend::middleware::request_trace::RequestTrace;
use wedding_backend::middleware::structured_logger::StructuredLogger;
use wedding_backend::routes;
use wedding_backend::services::GuestService;
use wedding_backend::state::app_state::AppState;

/// Test service with the production routes and tracing middleware.
///
/// CORS is left out; it only matters to browsers.
pub async fn create_test_app(
    service: GuestService,
    backend: BackendKind,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    create_test_app_with_state(AppState::new(service, backend)).await
}

pub async fn create_test_app_with_state(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    let data = web::Data::new(state);

    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data)
            .configure(routes::configure),
    )
    .await
}
