//! Test-only helpers shared by the backend's unit and integration tests.

pub mod envelope;
pub mod logging;
pub mod unique_helpers;
