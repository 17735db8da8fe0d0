use crate::error::PortalError;
use chrono::Utc;
use portal_db_entity::db::college::{
    ActiveModel as CollegeActiveModel, Column as CollegeColumn, Entity as College,
    Model as CollegeModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use tracing::info;

#[derive(Debug, Default, Clone, FromForm)]
pub struct CollegeRegistrationForm {
    pub college_name: Option<String>,
    pub contact_email: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCollege {
    pub name: String,
    pub contact_email: String,
    pub logo_url: Option<String>,
}

impl CollegeRegistrationForm {
    pub fn validate(&self) -> Result<NewCollege, PortalError> {
        let name = self.college_name.as_deref().unwrap_or("").trim();
        let contact_email = self.contact_email.as_deref().unwrap_or("").trim();
        let logo_url = self.logo_url.as_deref().unwrap_or("").trim();

        if name.is_empty() || contact_email.is_empty() {
            return Err(PortalError::Validation(vec![
                "College Name and Contact Email are required.".to_owned(),
            ]));
        }
        Ok(NewCollege {
            name: name.to_owned(),
            contact_email: contact_email.to_owned(),
            logo_url: Some(logo_url.to_owned()).filter(|url| !url.is_empty()),
        })
    }
}

/// Result of a login attempt by contact email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollegeLogin {
    Approved(CollegeModel),
    Pending(CollegeModel),
    NotFound,
}

/// Stores a college awaiting admin approval.
pub async fn register_college(
    db: &DatabaseConnection,
    college: NewCollege,
) -> Result<CollegeModel, PortalError> {
    if find_by_contact_email(db, &college.contact_email)
        .await?
        .is_some()
    {
        return Err(PortalError::DuplicateCollegeEmail);
    }
    if College::find()
        .filter(CollegeColumn::Name.eq(college.name.as_str()))
        .one(db)
        .await?
        .is_some()
    {
        return Err(PortalError::DuplicateCollegeName);
    }

    let college = CollegeActiveModel {
        name: Set(college.name),
        contact_email: Set(college.contact_email),
        logo_url: Set(college.logo_url),
        is_approved: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!("College registered, pending approval: {}", college.name);
    Ok(college)
}

pub async fn find_by_contact_email(
    db: &DatabaseConnection,
    contact_email: &str,
) -> Result<Option<CollegeModel>, DbErr> {
    College::find()
        .filter(CollegeColumn::ContactEmail.eq(contact_email))
        .one(db)
        .await
}

pub async fn login_college(
    db: &DatabaseConnection,
    contact_email: &str,
) -> Result<CollegeLogin, DbErr> {
    Ok(match find_by_contact_email(db, contact_email).await? {
        Some(college) if college.is_approved => CollegeLogin::Approved(college),
        Some(college) => CollegeLogin::Pending(college),
        None => CollegeLogin::NotFound,
    })
}

/// The college behind a session, as long as it is still approved.
pub async fn approved_college(
    db: &DatabaseConnection,
    college_id: i32,
) -> Result<Option<CollegeModel>, DbErr> {
    Ok(College::find_by_id(college_id)
        .one(db)
        .await?
        .filter(|college| college.is_approved))
}
