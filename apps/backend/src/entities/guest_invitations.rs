use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guest_invitations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "invite_guid", unique)]
    pub invite_guid: String,
    #[sea_orm(column_name = "guest_full_name")]
    pub guest_full_name: String,
    #[sea_orm(column_name = "guest_call")]
    pub guest_call: String,
    #[sea_orm(column_name = "guest_language")]
    pub guest_language: String,
    #[sea_orm(column_name = "fly_from")]
    pub fly_from: i32,
    #[sea_orm(column_name = "status_id")]
    pub status_id: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::countries::Entity",
        from = "Column::FlyFrom",
        to = "super::countries::Column::Id"
    )]
    Country,
    #[sea_orm(
        belongs_to = "super::invitation_status::Entity",
        from = "Column::StatusId",
        to = "super::invitation_status::Column::Id"
    )]
    Status,
    #[sea_orm(has_one = "super::guest_responses::Entity")]
    Response,
    #[sea_orm(has_many = "super::guest_activities::Entity")]
    Activities,
}

impl Related<super::countries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::invitation_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<super::guest_responses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Response.def()
    }
}

impl Related<super::guest_activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
