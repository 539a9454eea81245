use sea_orm::entity::prelude::*;
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guest_responses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "guest_id", unique)]
    pub guest_id: i64,
    #[sea_orm(column_name = "days_in_vietnam")]
    pub days_in_vietnam: Option<i32>,
    #[sea_orm(column_name = "flight_ticket_date")]
    pub flight_ticket_date: Option<Date>,
    #[sea_orm(column_name = "days_before_wedding")]
    pub days_before_wedding: Option<i32>,
    #[sea_orm(column_name = "coming_with", column_type = "Text", nullable)]
    pub coming_with: Option<String>,
    #[sea_orm(column_name = "submitted_at")]
    pub submitted_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guest_invitations::Entity",
        from = "Column::GuestId",
        to = "super::guest_invitations::Column::Id"
    )]
    GuestInvitation,
}

impl Related<super::guest_invitations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuestInvitation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
