//! Local fallback store: five JSON-array keys in a `KvStore`.
//!
//! Joins and integrity rules that the remote schema enforces are done here
//! in application code. Every read-modify-write runs under one in-process
//! lock; two processes sharing a directory still race (last write wins).

pub mod keys;
mod seed;

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, MutexGuard};
use serde::de::DeserializeOwned;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, error, info};

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::{
    Country, GuestActivity, GuestInvitation, GuestResponse, GuestStore, InvitationStatus,
    NewActivity, ResponseSubmission, StatusName,
};
use crate::storage::KvStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    Initialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Seed rows were written by this call.
    Seeded,
    /// Sentinel was already present; nothing was written.
    AlreadyInitialized,
}

pub struct GuestStoreLocal {
    kv: Arc<dyn KvStore>,
    lock: Mutex<()>,
}

impl GuestStoreLocal {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            kv,
            lock: Mutex::new(()),
        }
    }

    pub fn init_state(&self) -> Result<InitState, DomainError> {
        let flag = self.kv.get(keys::INITIALIZED)?;
        Ok(match flag.as_deref() {
            Some("true") => InitState::Initialized,
            _ => InitState::Uninitialized,
        })
    }

    /// Moves the store to `Initialized`, seeding it if needed. Idempotent.
    pub fn initialize(&self) -> Result<InitOutcome, DomainError> {
        let _guard = self.lock.lock();
        self.initialize_locked()
    }

    fn initialize_locked(&self) -> Result<InitOutcome, DomainError> {
        if self.init_state()? == InitState::Initialized {
            return Ok(InitOutcome::AlreadyInitialized);
        }

        let now = OffsetDateTime::now_utc();
        self.write_table(keys::COUNTRIES, &seed::countries())?;
        self.write_table(keys::INVITATION_STATUS, &seed::statuses()?)?;
        self.write_table(keys::GUEST_INVITATIONS, &seed::invitations(now))?;
        self.write_table::<GuestResponse>(keys::GUEST_RESPONSES, &[])?;
        self.write_table::<GuestActivity>(keys::GUEST_ACTIVITIES, &[])?;
        // Sentinel last: a crash mid-seed leaves the store uninitialized.
        self.kv.set(keys::INITIALIZED, "true")?;

        info!("Local guest store seeded");
        Ok(InitOutcome::Seeded)
    }

    /// Takes the store lock and makes sure the seed is in place.
    fn ready(&self) -> Result<MutexGuard<'_, ()>, DomainError> {
        let guard = self.lock.lock();
        if self.initialize_locked()? == InitOutcome::Seeded {
            debug!("Local guest store initialized on first access");
        }
        Ok(guard)
    }

    /// Absent keys read as empty tables; undecodable ones are corruption.
    fn read_table<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, DomainError> {
        let Some(raw) = self.kv.get(key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| {
            error!(key, error = %e, "Local table could not be decoded");
            DomainError::data_corruption(format!("Malformed data in '{key}': {e}"))
        })
    }

    fn write_table<T: Serialize>(&self, key: &str, rows: &[T]) -> Result<(), DomainError> {
        let raw = serde_json::to_string(rows).map_err(|e| {
            DomainError::infra(InfraErrorKind::Storage, format!("encode '{key}': {e}"))
        })?;
        self.kv.set(key, &raw)?;
        Ok(())
    }

    fn require_guest(&self, guest_id: i64) -> Result<(), DomainError> {
        let invitations: Vec<GuestInvitation> = self.read_table(keys::GUEST_INVITATIONS)?;
        if invitations.iter().any(|g| g.id == guest_id) {
            Ok(())
        } else {
            Err(DomainError::infra(
                InfraErrorKind::IntegrityViolation,
                "Foreign key constraint violation",
            ))
        }
    }
}

fn next_id<T>(rows: &[T], id: impl Fn(&T) -> i64) -> i64 {
    rows.iter().map(id).max().unwrap_or(0) + 1
}

#[async_trait]
impl GuestStore for GuestStoreLocal {
    async fn list_countries(&self) -> Result<Vec<Country>, DomainError> {
        let _guard = self.ready()?;
        self.read_table(keys::COUNTRIES)
    }

    async fn find_country(&self, id: i32) -> Result<Option<Country>, DomainError> {
        let _guard = self.ready()?;
        let countries: Vec<Country> = self.read_table(keys::COUNTRIES)?;
        Ok(countries.into_iter().find(|c| c.id == id))
    }

    async fn find_status_by_id(&self, id: i32) -> Result<Option<InvitationStatus>, DomainError> {
        let _guard = self.ready()?;
        let statuses: Vec<InvitationStatus> = self.read_table(keys::INVITATION_STATUS)?;
        Ok(statuses.into_iter().find(|s| s.id == id))
    }

    async fn find_status_by_name(
        &self,
        name: StatusName,
    ) -> Result<Option<InvitationStatus>, DomainError> {
        let _guard = self.ready()?;
        let statuses: Vec<InvitationStatus> = self.read_table(keys::INVITATION_STATUS)?;
        Ok(statuses.into_iter().find(|s| s.status_name == name))
    }

    async fn find_invitation_by_guid(
        &self,
        invite_guid: &str,
    ) -> Result<Option<GuestInvitation>, DomainError> {
        let _guard = self.ready()?;
        let invitations: Vec<GuestInvitation> = self.read_table(keys::GUEST_INVITATIONS)?;
        Ok(invitations.into_iter().find(|g| g.invite_guid == invite_guid))
    }

    async fn update_invitation_status(
        &self,
        invite_guid: &str,
        status_id: i32,
        updated_at: OffsetDateTime,
    ) -> Result<Option<GuestInvitation>, DomainError> {
        let _guard = self.ready()?;
        let mut invitations: Vec<GuestInvitation> = self.read_table(keys::GUEST_INVITATIONS)?;
        let Some(invitation) = invitations.iter_mut().find(|g| g.invite_guid == invite_guid)
        else {
            return Ok(None);
        };

        invitation.status_id = status_id;
        invitation.updated_at = Some(updated_at);
        let updated = invitation.clone();

        self.write_table(keys::GUEST_INVITATIONS, &invitations)?;
        Ok(Some(updated))
    }

    async fn find_response_for_guest(
        &self,
        guest_id: i64,
    ) -> Result<Option<GuestResponse>, DomainError> {
        let _guard = self.ready()?;
        let responses: Vec<GuestResponse> = self.read_table(keys::GUEST_RESPONSES)?;
        Ok(responses.into_iter().find(|r| r.guest_id == guest_id))
    }

    async fn upsert_response(
        &self,
        guest_id: i64,
        submission: ResponseSubmission,
        submitted_at: OffsetDateTime,
    ) -> Result<GuestResponse, DomainError> {
        let _guard = self.ready()?;
        self.require_guest(guest_id)?;

        let mut responses: Vec<GuestResponse> = self.read_table(keys::GUEST_RESPONSES)?;
        let id = next_id(&responses, |r| r.id);
        responses.retain(|r| r.guest_id != guest_id);

        let response = GuestResponse {
            id,
            guest_id,
            days_in_vietnam: submission.days_in_vietnam,
            flight_ticket_date: submission.flight_ticket_date,
            days_before_wedding: submission.days_before_wedding,
            coming_with: submission.coming_with,
            submitted_at,
        };
        responses.push(response.clone());

        self.write_table(keys::GUEST_RESPONSES, &responses)?;
        Ok(response)
    }

    async fn insert_activity(
        &self,
        guest_id: i64,
        activity: NewActivity,
        timestamp: OffsetDateTime,
    ) -> Result<GuestActivity, DomainError> {
        let _guard = self.ready()?;
        self.require_guest(guest_id)?;

        let mut activities: Vec<GuestActivity> = self.read_table(keys::GUEST_ACTIVITIES)?;
        let created = GuestActivity {
            id: next_id(&activities, |a| a.id),
            guest_id,
            activity_type: activity.activity_type,
            session_duration: activity.session_duration,
            additional_data: activity.additional_data,
            timestamp,
        };
        activities.push(created.clone());

        self.write_table(keys::GUEST_ACTIVITIES, &activities)?;
        Ok(created)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.init_state().map(|_| ())
    }
}
