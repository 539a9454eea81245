use crate::config::db::BackendKind;
use crate::services::GuestService;

/// Shared per-worker state: the guest service and which store backs it.
#[derive(Clone)]
pub struct AppState {
    guests: GuestService,
    backend: BackendKind,
}

impl AppState {
    pub fn new(guests: GuestService, backend: BackendKind) -> Self {
        Self { guests, backend }
    }

    pub fn guests(&self) -> &GuestService {
        &self.guests
    }

    pub fn backend(&self) -> BackendKind {
        self.backend
    }
}
