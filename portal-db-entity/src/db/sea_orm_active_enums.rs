use sea_orm::entity::prelude::*;

/// Follow-up state of a submitted lead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
pub enum LeadStage {
    #[sea_orm(string_value = "New")]
    New,
    #[sea_orm(string_value = "Contacted")]
    Contacted,
    #[sea_orm(string_value = "Converted")]
    Converted,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
pub enum OfferType {
    #[sea_orm(string_value = "Discount")]
    Discount,
    #[sea_orm(string_value = "Goodie")]
    Goodie,
    #[sea_orm(string_value = "Other")]
    Other,
}
