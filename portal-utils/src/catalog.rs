use crate::college::check_marks;
use crate::error::AdminError;
use chrono::Utc;
use clap::{Args, ValueEnum};
use portal_db_entity::db::offer::{ActiveModel as OfferActiveModel, Model as OfferModel};
use portal_db_entity::db::sea_orm_active_enums::OfferType;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing::info;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OfferKind {
    Discount,
    Goodie,
    Other,
}

impl From<OfferKind> for OfferType {
    fn from(kind: OfferKind) -> Self {
        match kind {
            OfferKind::Discount => OfferType::Discount,
            OfferKind::Goodie => OfferType::Goodie,
            OfferKind::Other => OfferType::Other,
        }
    }
}

#[derive(Debug, Args)]
#[clap(about = "Add a partner offer shown to class 10 leads")]
pub struct AddOffer {
    /// e.g. "Elite Coaching Hub", "The Bookworm"
    #[clap(short, long)]
    pub provider_name: String,

    #[clap(short, long)]
    pub description: String,

    #[clap(short = 't', long, value_enum)]
    pub offer_type: OfferKind,

    /// Minimum percentage
    #[clap(short, long)]
    pub eligibility_marks: Option<f64>,

    /// e.g. "10th", "12th" or "All"
    #[clap(long)]
    pub applicable_class: Option<String>,

    #[clap(long)]
    pub terms: Option<String>,
}

pub async fn add_offer(db: &DatabaseConnection, params: AddOffer) -> Result<OfferModel, AdminError> {
    check_marks(params.eligibility_marks)?;
    let offer = OfferActiveModel {
        provider_name: Set(params.provider_name),
        description: Set(params.description),
        offer_type: Set(params.offer_type.into()),
        eligibility_marks: Set(params.eligibility_marks),
        applicable_class: Set(params.applicable_class),
        terms_and_conditions: Set(params.terms),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!("Offer {} from {} added", offer.id, offer.provider_name);
    Ok(offer)
}
