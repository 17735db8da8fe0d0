use super::sea_orm_active_enums::OfferType;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "offer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub provider_name: String,
    pub description: String,
    #[sea_orm(column_name = "type")]
    pub offer_type: OfferType,
    pub eligibility_marks: Option<f64>,
    // "10th", "12th" or "All"
    pub applicable_class: Option<String>,
    pub terms_and_conditions: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
