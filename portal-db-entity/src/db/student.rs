use super::sea_orm_active_enums::LeadStage;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: String,
    pub city: String,
    // "10" or "12" for the routed flows, stored as submitted
    pub class_selected: String,
    pub percentage: f64,
    #[sea_orm(unique)]
    pub referral_code: Option<String>,
    pub lead_stage: LeadStage,
    pub referred_by_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ReferredById",
        to = "Column::Id"
    )]
    Referrer,
}

impl ActiveModelBehavior for ActiveModel {}
