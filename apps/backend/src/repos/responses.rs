use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::ticket_date;
use crate::entities::guest_responses;

/// Stored RSVP answer; at most one per guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestResponse {
    pub id: i64,
    pub guest_id: i64,
    pub days_in_vietnam: Option<i32>,
    #[serde(default, with = "ticket_date::option")]
    pub flight_ticket_date: Option<Date>,
    pub days_before_wedding: Option<i32>,
    pub coming_with: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

impl From<guest_responses::Model> for GuestResponse {
    fn from(model: guest_responses::Model) -> Self {
        Self {
            id: model.id,
            guest_id: model.guest_id,
            days_in_vietnam: model.days_in_vietnam,
            flight_ticket_date: model.flight_ticket_date,
            days_before_wedding: model.days_before_wedding,
            coming_with: model.coming_with,
            submitted_at: model.submitted_at,
        }
    }
}

/// Response payload as sent by the invitation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSubmission {
    #[serde(default)]
    pub days_in_vietnam: Option<i32>,
    #[serde(default, with = "ticket_date::option")]
    pub flight_ticket_date: Option<Date>,
    #[serde(default)]
    pub days_before_wedding: Option<i32>,
    #[serde(default)]
    pub coming_with: Option<String>,
}
