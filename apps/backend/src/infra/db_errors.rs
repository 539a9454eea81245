//! SeaORM -> DomainError translation.
//!
//! The remote store adapter funnels every `DbErr` through `map_db_err`; raw
//! driver messages only ever reach the logs, redacted.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

fn is_unique_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
}

fn is_foreign_key_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23503")
        || msg.contains("violates foreign key constraint")
        || msg.contains("FOREIGN KEY constraint failed")
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Remote store unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Remote store unavailable");
        }
        sea_orm::DbErr::Type(_) | sea_orm::DbErr::Json(_) | sea_orm::DbErr::TryIntoErr { .. } => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Stored row could not be decoded");
            return DomainError::data_corruption("Stored record could not be decoded");
        }
        _ => {}
    }

    if is_unique_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        return DomainError::infra(
            InfraErrorKind::IntegrityViolation,
            "Unique constraint violation",
        );
    }

    if is_foreign_key_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::infra(
            InfraErrorKind::IntegrityViolation,
            "Foreign key constraint violation",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Remote store timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Remote store timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled remote store error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Remote store operation failed",
    )
}
