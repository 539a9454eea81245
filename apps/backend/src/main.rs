use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use wedding_backend::config::db::StoreConfig;
use wedding_backend::config::server::ServerConfig;
use wedding_backend::infra::state::build_state;
use wedding_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger};
use wedding_backend::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let (server, store) = match ServerConfig::from_env().and_then(|server| {
        let store = StoreConfig::from_env()?;
        Ok((server, store))
    }) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        backend = %store.kind(),
        store = %store.describe(),
        host = %server.host,
        port = server.port,
        "Starting wedding backend"
    );

    let app_state = match build_state().with_backend(store).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);
    let origins = server.allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
