use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Country, GuestResponse, InvitationStatus};
use crate::entities::guest_invitations;

/// A guest's invitation, addressed externally only by `invite_guid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestInvitation {
    pub id: i64,
    pub invite_guid: String,
    pub guest_full_name: String,
    pub guest_call: String,
    pub guest_language: String,
    pub fly_from: i32,
    pub status_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Absent until the first status update.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<guest_invitations::Model> for GuestInvitation {
    fn from(model: guest_invitations::Model) -> Self {
        Self {
            id: model.id,
            invite_guid: model.invite_guid,
            guest_full_name: model.guest_full_name,
            guest_call: model.guest_call,
            guest_language: model.guest_language,
            fly_from: model.fly_from,
            status_id: model.status_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Invitation merged with its country, status and (optional) response.
///
/// Relationship fields are `null` when the foreign key does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestInvitationDetails {
    #[serde(flatten)]
    pub invitation: GuestInvitation,
    pub countries: Option<Country>,
    pub invitation_status: Option<InvitationStatus>,
    pub guest_responses: Option<GuestResponse>,
}
