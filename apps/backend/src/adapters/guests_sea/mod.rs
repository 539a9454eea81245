//! Remote store: the five tables behind a sea-orm connection.
//!
//! Relational integrity (unique tokens, one response per guest, foreign keys)
//! is enforced by the schema; violations surface through `map_db_err`.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};
use serde_json::Value;
use time::OffsetDateTime;

use crate::entities::{
    countries, guest_activities, guest_invitations, guest_responses, invitation_status,
};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::repos::{
    Country, GuestActivity, GuestInvitation, GuestResponse, GuestStore, InvitationStatus,
    NewActivity, ResponseSubmission, StatusName,
};

#[derive(Clone)]
pub struct GuestStoreSea {
    db: DatabaseConnection,
}

impl GuestStoreSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl GuestStore for GuestStoreSea {
    async fn list_countries(&self) -> Result<Vec<Country>, DomainError> {
        let rows = countries::Entity::find()
            .order_by_asc(countries::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(Country::from).collect())
    }

    async fn find_country(&self, id: i32) -> Result<Option<Country>, DomainError> {
        let row = countries::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Country::from))
    }

    async fn find_status_by_id(&self, id: i32) -> Result<Option<InvitationStatus>, DomainError> {
        let row = invitation_status::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(InvitationStatus::from))
    }

    async fn find_status_by_name(
        &self,
        name: StatusName,
    ) -> Result<Option<InvitationStatus>, DomainError> {
        let row = invitation_status::Entity::find()
            .filter(invitation_status::Column::StatusName.eq(name))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(InvitationStatus::from))
    }

    async fn find_invitation_by_guid(
        &self,
        invite_guid: &str,
    ) -> Result<Option<GuestInvitation>, DomainError> {
        let row = guest_invitations::Entity::find()
            .filter(guest_invitations::Column::InviteGuid.eq(invite_guid))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(GuestInvitation::from))
    }

    async fn update_invitation_status(
        &self,
        invite_guid: &str,
        status_id: i32,
        updated_at: OffsetDateTime,
    ) -> Result<Option<GuestInvitation>, DomainError> {
        let rows = guest_invitations::Entity::update_many()
            .col_expr(guest_invitations::Column::StatusId, Expr::value(status_id))
            .col_expr(
                guest_invitations::Column::UpdatedAt,
                Expr::value(Some(updated_at)),
            )
            .filter(guest_invitations::Column::InviteGuid.eq(invite_guid))
            .exec_with_returning(&self.db)
            .await
            .map_err(map_db_err)?;
        // invite_guid is unique, so at most one row comes back.
        Ok(rows.into_iter().next().map(GuestInvitation::from))
    }

    async fn find_response_for_guest(
        &self,
        guest_id: i64,
    ) -> Result<Option<GuestResponse>, DomainError> {
        let row = guest_responses::Entity::find()
            .filter(guest_responses::Column::GuestId.eq(guest_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(GuestResponse::from))
    }

    async fn upsert_response(
        &self,
        guest_id: i64,
        submission: ResponseSubmission,
        submitted_at: OffsetDateTime,
    ) -> Result<GuestResponse, DomainError> {
        let active = guest_responses::ActiveModel {
            id: NotSet,
            guest_id: Set(guest_id),
            days_in_vietnam: Set(submission.days_in_vietnam),
            flight_ticket_date: Set(submission.flight_ticket_date),
            days_before_wedding: Set(submission.days_before_wedding),
            coming_with: Set(submission.coming_with),
            submitted_at: Set(submitted_at),
        };

        let row = guest_responses::Entity::insert(active)
            .on_conflict(
                OnConflict::column(guest_responses::Column::GuestId)
                    .update_columns([
                        guest_responses::Column::DaysInVietnam,
                        guest_responses::Column::FlightTicketDate,
                        guest_responses::Column::DaysBeforeWedding,
                        guest_responses::Column::ComingWith,
                        guest_responses::Column::SubmittedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(GuestResponse::from(row))
    }

    async fn insert_activity(
        &self,
        guest_id: i64,
        activity: NewActivity,
        timestamp: OffsetDateTime,
    ) -> Result<GuestActivity, DomainError> {
        let active = guest_activities::ActiveModel {
            id: NotSet,
            guest_id: Set(guest_id),
            activity_type: Set(activity.activity_type),
            session_duration: Set(activity.session_duration),
            additional_data: Set(Value::Object(activity.additional_data)),
            timestamp: Set(timestamp),
        };

        let row = guest_activities::Entity::insert(active)
            .exec_with_returning(&self.db)
            .await
            .map_err(map_db_err)?;
        GuestActivity::try_from(row)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.db.ping().await.map_err(map_db_err)
    }
}

