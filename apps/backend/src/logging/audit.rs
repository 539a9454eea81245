//! Audit events for guest-record mutations.
//!
//! Mutations are authorized by possession of the invite token alone, so every
//! one is logged with enough context to reconstruct who changed what.

use tracing::info;

use crate::logging::pii::MaskedToken;
use crate::repos::StatusName;
use crate::trace_ctx;

pub fn status_changed(invite_guid: &str, guest_id: i64, status: StatusName) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "GUEST_STATUS_CHANGED",
        %trace_id,
        invite_guid = %MaskedToken(invite_guid),
        guest_id,
        status = status.as_str(),
        "Guest status updated"
    );
}

pub fn response_submitted(guest_id: i64, response_id: i64) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "GUEST_RESPONSE_SUBMITTED",
        %trace_id,
        guest_id,
        response_id,
        "Guest response stored"
    );
}
