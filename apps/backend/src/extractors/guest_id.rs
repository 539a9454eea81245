use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Numeric guest id from the `{guest_id}` path segment.
///
/// Only the format is checked here; whether the guest exists is decided by
/// the store when the write is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestId(pub i64);

fn parse_guest_id(raw: Option<&str>) -> Result<GuestId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGuestId, "Missing guest_id parameter")
    })?;

    let guest_id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidGuestId, format!("Invalid guest id: {raw}"))
    })?;

    if guest_id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGuestId,
            format!("Guest id must be positive, got: {guest_id}"),
        ));
    }

    Ok(GuestId(guest_id))
}

impl FromRequest for GuestId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_guest_id(req.match_info().get("guest_id")))
    }
}
