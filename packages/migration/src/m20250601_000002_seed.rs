use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use crate::m20250601_000001_init::{Countries, GuestInvitations, InvitationStatus};
use crate::seed_data::{COUNTRIES, GUESTS, STATUSES};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn seed_err(e: sea_orm_migration::sea_query::error::Error) -> DbErr {
    DbErr::Custom(format!("seed statement: {e}"))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut countries = Query::insert();
        countries.into_table(Countries::Table).columns([
            Countries::Id,
            Countries::CountryCode,
            Countries::CountryNameEn,
            Countries::CountryNameLt,
        ]);
        for (id, code, name_en, name_lt) in COUNTRIES {
            countries
                .values([id.into(), code.into(), name_en.into(), name_lt.into()])
                .map_err(seed_err)?;
        }
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();
        conn.execute(backend.build(&countries)).await?;

        let mut statuses = Query::insert();
        statuses
            .into_table(InvitationStatus::Table)
            .columns([InvitationStatus::Id, InvitationStatus::StatusName]);
        for (id, name) in STATUSES {
            statuses.values([id.into(), name.into()]).map_err(seed_err)?;
        }
        conn.execute(backend.build(&statuses)).await?;

        let now = time::OffsetDateTime::now_utc();
        let mut guests = Query::insert();
        guests.into_table(GuestInvitations::Table).columns([
            GuestInvitations::InviteGuid,
            GuestInvitations::GuestFullName,
            GuestInvitations::GuestCall,
            GuestInvitations::GuestLanguage,
            GuestInvitations::FlyFrom,
            GuestInvitations::StatusId,
            GuestInvitations::CreatedAt,
        ]);
        for (guid, full_name, call, language, fly_from, status_id) in GUESTS {
            guests
                .values([
                    guid.into(),
                    full_name.into(),
                    call.into(),
                    language.into(),
                    fly_from.into(),
                    status_id.into(),
                    now.into(),
                ])
                .map_err(seed_err)?;
        }
        conn.execute(backend.build(&guests)).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let guids: Vec<&str> = GUESTS.iter().map(|g| g.0).collect();
        let guests = Query::delete()
            .from_table(GuestInvitations::Table)
            .and_where(Expr::col(GuestInvitations::InviteGuid).is_in(guids))
            .to_owned();
        conn.execute(backend.build(&guests)).await?;

        let statuses = Query::delete()
            .from_table(InvitationStatus::Table)
            .and_where(Expr::col(InvitationStatus::Id).is_in(STATUSES.map(|s| s.0)))
            .to_owned();
        conn.execute(backend.build(&statuses)).await?;

        let countries = Query::delete()
            .from_table(Countries::Table)
            .and_where(Expr::col(Countries::Id).is_in(COUNTRIES.map(|c| c.0)))
            .to_owned();
        conn.execute(backend.build(&countries)).await?;

        Ok(())
    }
}
