//! Wire shapes shared by the service boundary and the HTTP surface.

pub mod envelope;

pub use envelope::{Envelope, EnvelopeError};
