//! Guest store implementations.

pub mod guests_local;
pub mod guests_sea;

pub use guests_local::{GuestStoreLocal, InitOutcome, InitState};
pub use guests_sea::GuestStoreSea;
