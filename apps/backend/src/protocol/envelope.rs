//! Uniform `{ data, error }` response envelope.
//!
//! Exactly one of `data` and `error` is populated. Callers that want the
//! envelope shape instead of a `Result` convert with `Envelope::from`.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl EnvelopeError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            trace_id: None,
        }
    }

    pub fn with_trace_id(mut self, trace_id: Option<String>) -> Self {
        self.trace_id = trace_id;
        self
    }
}

impl From<&DomainError> for EnvelopeError {
    fn from(err: &DomainError) -> Self {
        Self::new(err.code().as_str(), err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: Option<EnvelopeError>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: EnvelopeError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<Result<T, DomainError>> for Envelope<T> {
    fn from(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::err(EnvelopeError::from(&err)),
        }
    }
}
