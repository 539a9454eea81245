#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod protocol;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod trace_ctx;

// Re-exports for public API
pub use adapters::{GuestStoreLocal, GuestStoreSea, InitOutcome, InitState};
pub use config::db::{BackendKind, StoreConfig};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use infra::db::{connect_store, open_guest_store};
pub use infra::state::{build_state, StateBuilder};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use protocol::{Envelope, EnvelopeError};
pub use services::GuestService;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
