//! Guest-invitation operations shared by both stores.
//!
//! The join of an invitation with its country, status and response happens
//! here once; stores only provide row access. Results are `Result`s;
//! `Envelope::from` turns them into the `{ data, error }` shape.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, error, warn};

use crate::errors::domain::DomainError;
use crate::logging::audit;
use crate::logging::pii::MaskedToken;
use crate::repos::countries::sort_by_english_name;
use crate::repos::{
    Country, GuestActivity, GuestInvitation, GuestInvitationDetails, GuestResponse, GuestStore,
    NewActivity, ResponseSubmission, StatusName,
};
use crate::trace_ctx;

#[derive(Clone)]
pub struct GuestService {
    store: Arc<dyn GuestStore>,
}

impl GuestService {
    pub fn new(store: Arc<dyn GuestStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn GuestStore> {
        &self.store
    }

    /// Invitation for `invite_guid` joined with its related records.
    pub async fn get_guest_invitation(
        &self,
        invite_guid: &str,
    ) -> Result<GuestInvitationDetails, DomainError> {
        let result = self.load_details(invite_guid).await;
        logged("get_guest_invitation", Some(invite_guid), result)
    }

    async fn load_details(&self, invite_guid: &str) -> Result<GuestInvitationDetails, DomainError> {
        let invitation = self
            .store
            .find_invitation_by_guid(invite_guid)
            .await?
            .ok_or_else(DomainError::guest_not_found)?;

        let countries = self.store.find_country(invitation.fly_from).await?;
        let invitation_status = self.store.find_status_by_id(invitation.status_id).await?;
        let guest_responses = self.store.find_response_for_guest(invitation.id).await?;

        Ok(GuestInvitationDetails {
            invitation,
            countries,
            invitation_status,
            guest_responses,
        })
    }

    /// Moves the invitation to `status_name`.
    ///
    /// The name is resolved before anything is written: an unknown name
    /// fails with "Status not found" and leaves every invitation untouched.
    pub async fn update_guest_status(
        &self,
        invite_guid: &str,
        status_name: &str,
    ) -> Result<GuestInvitation, DomainError> {
        let result = self.apply_status(invite_guid, status_name).await;
        logged("update_guest_status", Some(invite_guid), result)
    }

    async fn apply_status(
        &self,
        invite_guid: &str,
        status_name: &str,
    ) -> Result<GuestInvitation, DomainError> {
        let name: StatusName = status_name.parse()?;
        let status = self
            .store
            .find_status_by_name(name)
            .await?
            .ok_or_else(DomainError::status_not_found)?;

        let updated = self
            .store
            .update_invitation_status(invite_guid, status.id, OffsetDateTime::now_utc())
            .await?
            .ok_or_else(DomainError::guest_not_found)?;

        audit::status_changed(invite_guid, updated.id, name);
        Ok(updated)
    }

    /// Stores `submission` as the guest's only response.
    pub async fn submit_guest_response(
        &self,
        guest_id: i64,
        submission: ResponseSubmission,
    ) -> Result<GuestResponse, DomainError> {
        let result = self
            .store
            .upsert_response(guest_id, submission, OffsetDateTime::now_utc())
            .await;
        if let Ok(response) = &result {
            audit::response_submitted(guest_id, response.id);
        }
        logged("submit_guest_response", None, result)
    }

    /// Appends an activity record. Fails only on storage faults.
    pub async fn track_activity(
        &self,
        guest_id: i64,
        activity: NewActivity,
    ) -> Result<GuestActivity, DomainError> {
        let result = self
            .store
            .insert_activity(guest_id, activity, OffsetDateTime::now_utc())
            .await;
        logged("track_activity", None, result)
    }

    /// All countries, ordered by English name.
    pub async fn get_countries(&self) -> Result<Vec<Country>, DomainError> {
        let result = self.store.list_countries().await.map(|mut countries| {
            sort_by_english_name(&mut countries);
            countries
        });
        logged("get_countries", None, result)
    }
}

/// Business outcomes are logged quietly, storage faults loudly.
fn logged<T>(
    operation: &'static str,
    invite_guid: Option<&str>,
    result: Result<T, DomainError>,
) -> Result<T, DomainError> {
    if let Err(err) = &result {
        let trace_id = trace_ctx::trace_id();
        let invite_guid = invite_guid.map(MaskedToken);
        match err {
            DomainError::NotFound(..) => {
                debug!(%trace_id, operation, invite_guid = ?invite_guid, error = %err, "Lookup miss")
            }
            DomainError::Validation(_) => {
                warn!(%trace_id, operation, invite_guid = ?invite_guid, error = %err, "Rejected input")
            }
            DomainError::Infra(..) => {
                error!(%trace_id, operation, invite_guid = ?invite_guid, error = %err, "Guest store fault")
            }
        }
    }
    result
}
