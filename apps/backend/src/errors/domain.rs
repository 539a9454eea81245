//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and storage-agnostic. Both guest stores report
//! failures through it, and the web boundary converts it into `AppError`
//! via the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::error_code::ErrorCode;

/// Infra error kinds to distinguish storage-layer faults
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    /// Persisted data could not be decoded into a typed record
    DataCorruption,
    /// Unique or foreign key rule rejected a write
    IntegrityViolation,
    /// Local key-value storage failed
    Storage,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Guest,
    Status,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure
    Validation(String),
    /// Missing resource in domain terms; caller-displayable
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::NotFound(_, d) => write!(f, "{d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn guest_not_found() -> Self {
        Self::not_found(NotFoundKind::Guest, "Guest not found")
    }

    pub fn status_not_found() -> Self {
        Self::not_found(NotFoundKind::Status, "Status not found")
    }

    pub fn data_corruption(detail: impl Into<String>) -> Self {
        Self::infra(InfraErrorKind::DataCorruption, detail)
    }

    /// Canonical error code reported to callers.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationError,
            Self::NotFound(NotFoundKind::Guest, _) => ErrorCode::GuestNotFound,
            Self::NotFound(NotFoundKind::Status, _) => ErrorCode::StatusNotFound,
            Self::NotFound(_, _) => ErrorCode::NotFound,
            Self::Infra(InfraErrorKind::Timeout, _) => ErrorCode::DbTimeout,
            Self::Infra(InfraErrorKind::DbUnavailable, _) => ErrorCode::DbUnavailable,
            Self::Infra(InfraErrorKind::DataCorruption, _) => ErrorCode::DataCorruption,
            Self::Infra(InfraErrorKind::IntegrityViolation, _) => ErrorCode::IntegrityViolation,
            Self::Infra(InfraErrorKind::Storage, _) => ErrorCode::StorageError,
            Self::Infra(InfraErrorKind::Other(_), _) => ErrorCode::DbError,
        }
    }
}
