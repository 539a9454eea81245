use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;
use crate::logging::pii::redact_path;

/// What gets logged about one finished request.
struct RequestLine {
    method: String,
    route: String,
    trace_id: String,
    started: Instant,
}

impl RequestLine {
    /// Invite tokens live in paths, so the matched route pattern is logged
    /// instead of the path; unmatched paths are masked.
    fn new(req: &ServiceRequest) -> Self {
        let route = req
            .match_pattern()
            .unwrap_or_else(|| redact_path(req.path()));
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "-".to_string());

        Self {
            method: req.method().to_string(),
            route,
            trace_id,
            started: Instant::now(),
        }
    }

    fn finish(self, status: StatusCode) {
        let RequestLine {
            method,
            route,
            trace_id,
            started,
        } = self;
        let duration_us = started.elapsed().as_micros() as u64;
        let status_code = status.as_u16();

        if status.is_server_error() {
            error!(http.method = %method, http.route = %route, http.status_code = status_code, duration_us, %trace_id, "request_completed");
        } else if status.is_client_error() {
            warn!(http.method = %method, http.route = %route, http.status_code = status_code, duration_us, %trace_id, "request_completed");
        } else {
            info!(http.method = %method, http.route = %route, http.status_code = status_code, duration_us, %trace_id, "request_completed");
        }
    }
}

/// One structured line per request, leveled by response status.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let line = RequestLine::new(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            line.finish(match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            });
            result
        })
    }
}
