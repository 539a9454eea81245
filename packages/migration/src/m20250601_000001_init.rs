use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
pub(crate) enum Countries {
    Table,
    Id,
    CountryCode,
    CountryNameEn,
    CountryNameLt,
}

#[derive(Iden)]
pub(crate) enum InvitationStatus {
    Table,
    Id,
    StatusName,
}

#[derive(Iden)]
pub(crate) enum GuestInvitations {
    Table,
    Id,
    InviteGuid,
    GuestFullName,
    GuestCall,
    GuestLanguage,
    FlyFrom,
    StatusId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GuestResponses {
    Table,
    Id,
    GuestId,
    DaysInVietnam,
    FlightTicketDate,
    DaysBeforeWedding,
    ComingWith,
    SubmittedAt,
}

#[derive(Iden)]
enum GuestActivities {
    Table,
    Id,
    GuestId,
    ActivityType,
    SessionDuration,
    AdditionalData,
    Timestamp,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // countries (seeded, read-only; ids are assigned by the seed)
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Countries::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Countries::CountryCode)
                            .string_len(2)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Countries::CountryNameEn).string().not_null())
                    .col(ColumnDef::new(Countries::CountryNameLt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // invitation_status
        manager
            .create_table(
                Table::create()
                    .table(InvitationStatus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InvitationStatus::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InvitationStatus::StatusName)
                            .string_len(16)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // guest_invitations
        manager
            .create_table(
                Table::create()
                    .table(GuestInvitations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GuestInvitations::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(GuestInvitations::InviteGuid)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GuestInvitations::GuestFullName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GuestInvitations::GuestCall).string().not_null())
                    .col(
                        ColumnDef::new(GuestInvitations::GuestLanguage)
                            .string_len(2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(GuestInvitations::FlyFrom).integer().not_null())
                    .col(ColumnDef::new(GuestInvitations::StatusId).integer().not_null())
                    .col(
                        ColumnDef::new(GuestInvitations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GuestInvitations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_invitations_fly_from")
                            .from(GuestInvitations::Table, GuestInvitations::FlyFrom)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_invitations_status_id")
                            .from(GuestInvitations::Table, GuestInvitations::StatusId)
                            .to(InvitationStatus::Table, InvitationStatus::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // invite tokens are the only external lookup key
        manager
            .create_index(
                Index::create()
                    .name("ux_guest_invitations_invite_guid")
                    .table(GuestInvitations::Table)
                    .col(GuestInvitations::InviteGuid)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // guest_responses (one per guest)
        manager
            .create_table(
                Table::create()
                    .table(GuestResponses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GuestResponses::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(GuestResponses::GuestId).big_integer().not_null())
                    .col(ColumnDef::new(GuestResponses::DaysInVietnam).integer().null())
                    .col(ColumnDef::new(GuestResponses::FlightTicketDate).date().null())
                    .col(
                        ColumnDef::new(GuestResponses::DaysBeforeWedding)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(GuestResponses::ComingWith).text().null())
                    .col(
                        ColumnDef::new(GuestResponses::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_responses_guest_id")
                            .from(GuestResponses::Table, GuestResponses::GuestId)
                            .to(GuestInvitations::Table, GuestInvitations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // upsert conflict target
        manager
            .create_index(
                Index::create()
                    .name("ux_guest_responses_guest_id")
                    .table(GuestResponses::Table)
                    .col(GuestResponses::GuestId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // guest_activities (append-only)
        manager
            .create_table(
                Table::create()
                    .table(GuestActivities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GuestActivities::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(GuestActivities::GuestId).big_integer().not_null())
                    .col(
                        ColumnDef::new(GuestActivities::ActivityType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GuestActivities::SessionDuration)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GuestActivities::AdditionalData)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GuestActivities::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_activities_guest_id")
                            .from(GuestActivities::Table, GuestActivities::GuestId)
                            .to(GuestInvitations::Table, GuestInvitations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guest_activities_guest_id")
                    .table(GuestActivities::Table)
                    .col(GuestActivities::GuestId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_guest_activities_guest_id")
                    .table(GuestActivities::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(GuestActivities::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_guest_responses_guest_id")
                    .table(GuestResponses::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(GuestResponses::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_guest_invitations_invite_guid")
                    .table(GuestInvitations::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(GuestInvitations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InvitationStatus::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await?;

        Ok(())
    }
}
