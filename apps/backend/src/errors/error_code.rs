//! Error codes for the wedding backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in the `error.code` field of response envelopes.

use core::fmt;

/// Centralized error codes for the wedding backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid guest ID provided
    InvalidGuestId,
    /// Malformed request body
    InvalidPayload,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// No invitation carries the given invite token
    GuestNotFound,
    /// Status name does not resolve to an invitation status
    StatusNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Unique or foreign key rule rejected a write
    IntegrityViolation,
    /// Local fallback storage failure
    StorageError,
    /// Persisted data failed schema checks
    DataCorruption,

    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGuestId => "INVALID_GUEST_ID",
            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GuestNotFound => "GUEST_NOT_FOUND",
            Self::StatusNotFound => "STATUS_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::IntegrityViolation => "INTEGRITY_VIOLATION",
            Self::StorageError => "STORAGE_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
