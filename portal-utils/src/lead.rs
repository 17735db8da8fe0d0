use crate::error::AdminError;
use chrono::Utc;
use clap::{Args, ValueEnum};
use portal_db_entity::db::sea_orm_active_enums::LeadStage;
use portal_db_entity::db::student::{
    ActiveModel as StudentActiveModel, Column as StudentColumn, Entity as Student,
    Model as StudentModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::info;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    New,
    Contacted,
    Converted,
}

impl From<Stage> for LeadStage {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::New => LeadStage::New,
            Stage::Contacted => LeadStage::Contacted,
            Stage::Converted => LeadStage::Converted,
        }
    }
}

#[derive(Debug, Args)]
#[clap(about = "Record follow-up progress on a lead")]
pub struct SetLeadStage {
    #[clap(short, long)]
    pub email: String,

    #[clap(short, long, value_enum)]
    pub stage: Stage,
}

pub async fn set_lead_stage(
    db: &DatabaseConnection,
    params: &SetLeadStage,
) -> Result<StudentModel, AdminError> {
    let student = Student::find()
        .filter(StudentColumn::Email.eq(params.email.as_str()))
        .one(db)
        .await?
        .ok_or_else(|| AdminError::StudentNotFound(params.email.to_owned()))?;

    let mut student: StudentActiveModel = student.into();
    student.lead_stage = Set(params.stage.into());
    student.updated_at = Set(Some(Utc::now()));
    let student = student.update(db).await?;
    info!("Lead {} moved to {:?}", student.id, student.lead_stage);
    Ok(student)
}
