use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "guest_activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "guest_id")]
    pub guest_id: i64,
    #[sea_orm(column_name = "activity_type")]
    pub activity_type: String,
    #[sea_orm(column_name = "session_duration")]
    pub session_duration: i32,
    #[sea_orm(column_name = "additional_data", column_type = "JsonBinary")]
    pub additional_data: Json,
    pub timestamp: OffsetDateTime,
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
