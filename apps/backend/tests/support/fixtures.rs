//! Seeded guests and response payloads used across suites.

use serde_json::{json, Value};
use time::macros::date;
use wedding_backend::repos::ResponseSubmission;

pub const JONAS_GUID: &str = "550e8400-e29b-41d4-a716-446655440001";
pub const SARAH_GUID: &str = "550e8400-e29b-41d4-a716-446655440002";
pub const MARIA_GUID: &str = "550e8400-e29b-41d4-a716-446655440003";

pub const JONAS_ID: i64 = 1;
pub const SARAH_ID: i64 = 2;

/// A guest id that no seeded invitation owns.
pub const UNKNOWN_GUEST_ID: i64 = 999;

pub fn full_submission() -> ResponseSubmission {
    ResponseSubmission {
        days_in_vietnam: Some(10),
        flight_ticket_date: Some(date!(2026 - 03 - 14)),
        days_before_wedding: Some(3),
        coming_with: Some("Ona".into()),
    }
}

pub fn revised_submission() -> ResponseSubmission {
    ResponseSubmission {
        days_in_vietnam: Some(14),
        flight_ticket_date: None,
        days_before_wedding: Some(5),
        coming_with: None,
    }
}

/// `full_submission` as the invitation page sends it.
pub fn full_submission_json() -> Value {
    json!({
        "daysInVietnam": 10,
        "flightTicketDate": "2026-03-14",
        "daysBeforeWedding": 3,
        "comingWith": "Ona"
    })
}
