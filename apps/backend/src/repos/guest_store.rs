use async_trait::async_trait;
use time::OffsetDateTime;

use super::{
    Country, GuestActivity, GuestInvitation, GuestResponse, InvitationStatus, NewActivity,
    ResponseSubmission, StatusName,
};
use crate::errors::domain::DomainError;

/// Low-level persistence primitives for the guest-invitation records.
///
/// Joins and business rules live in `GuestService`; implementations only
/// read and write rows. Write primitives take the timestamp to stamp so both
/// stores produce identical records.
#[async_trait]
pub trait GuestStore: Send + Sync {
    /// Storage order; callers sort.
    async fn list_countries(&self) -> Result<Vec<Country>, DomainError>;

    async fn find_country(&self, id: i32) -> Result<Option<Country>, DomainError>;

    async fn find_status_by_id(&self, id: i32) -> Result<Option<InvitationStatus>, DomainError>;

    async fn find_status_by_name(
        &self,
        name: StatusName,
    ) -> Result<Option<InvitationStatus>, DomainError>;

    async fn find_invitation_by_guid(
        &self,
        invite_guid: &str,
    ) -> Result<Option<GuestInvitation>, DomainError>;

    /// Sets `status_id` and `updated_at` in one write. `None` when no
    /// invitation carries the token; nothing is written in that case.
    async fn update_invitation_status(
        &self,
        invite_guid: &str,
        status_id: i32,
        updated_at: OffsetDateTime,
    ) -> Result<Option<GuestInvitation>, DomainError>;

    async fn find_response_for_guest(
        &self,
        guest_id: i64,
    ) -> Result<Option<GuestResponse>, DomainError>;

    /// Replaces any previous response for `guest_id`.
    async fn upsert_response(
        &self,
        guest_id: i64,
        submission: ResponseSubmission,
        submitted_at: OffsetDateTime,
    ) -> Result<GuestResponse, DomainError>;

    async fn insert_activity(
        &self,
        guest_id: i64,
        activity: NewActivity,
        timestamp: OffsetDateTime,
    ) -> Result<GuestActivity, DomainError>;

    /// Cheap reachability probe used by the health endpoint.
    async fn ping(&self) -> Result<(), DomainError>;
}
