use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_name = "country_code")]
    pub country_code: String,
    #[sea_orm(column_name = "country_name_en")]
    pub country_name_en: String,
    #[sea_orm(column_name = "country_name_lt")]
    pub country_name_lt: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::guest_invitations::Entity")]
    GuestInvitations,
}

impl Related<super::guest_invitations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuestInvitations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
