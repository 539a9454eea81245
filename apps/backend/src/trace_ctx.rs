//! Request trace id carried in task-local storage.
//!
//! `RequestTrace` establishes the scope; anything running inside the request
//! future (services, store adapters, error rendering) can read it.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, if running inside one.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(Clone::clone).ok()
}

/// Trace id for log fields; `"-"` outside a request.
pub fn trace_id() -> String {
    current().unwrap_or_else(|| "-".to_string())
}

pub async fn scope<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
