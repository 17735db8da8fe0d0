use crate::error::PortalError;
use chrono::Utc;
use portal_db_entity::db::sea_orm_active_enums::LeadStage;
use portal_db_entity::db::student::{
    ActiveModel as StudentActiveModel, Column as StudentColumn, Entity as Student,
    Model as StudentModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{info, warn};

/// Raw lead intake form. Every field is optional here so a missing field
/// surfaces as a validation message instead of a rejected request.
#[derive(Debug, Default, Clone, FromForm)]
pub struct LeadForm {
    pub student_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub class_selected: Option<String>,
    pub percentage: Option<String>,
    pub ref_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub city: String,
    pub class_selected: String,
    pub percentage: f64,
    pub ref_code: Option<String>,
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").trim().to_owned()
}

pub fn parse_percentage(value: &str) -> Result<f64, String> {
    if value.is_empty() {
        return Err("Percentage is required.".to_owned());
    }
    match value.parse::<f64>() {
        Ok(percentage) if (0.0..=100.0).contains(&percentage) => Ok(percentage),
        Ok(_) => Err("Percentage must be between 0 and 100.".to_owned()),
        Err(_) => Err("Invalid Percentage format.".to_owned()),
    }
}

impl LeadForm {
    /// Collects every problem with the submission, not just the first one.
    pub fn validate(&self) -> Result<NewLead, PortalError> {
        let mut errors = vec![];
        let name = trimmed(&self.student_name);
        let email = trimmed(&self.email);
        let phone_number = trimmed(&self.phone_number);
        let city = trimmed(&self.city);
        let class_selected = trimmed(&self.class_selected);

        if name.is_empty() {
            errors.push("Student Name is required.".to_owned());
        }
        if email.is_empty() {
            errors.push("Email is required.".to_owned());
        }
        if phone_number.is_empty() {
            errors.push("Phone Number is required.".to_owned());
        }
        if city.is_empty() {
            errors.push("City is required.".to_owned());
        }
        if class_selected.is_empty() {
            errors.push("Please select a Class.".to_owned());
        }
        let percentage = match parse_percentage(&trimmed(&self.percentage)) {
            Ok(percentage) => Some(percentage),
            Err(message) => {
                errors.push(message);
                None
            }
        };

        match percentage {
            Some(percentage) if errors.is_empty() => Ok(NewLead {
                name,
                email,
                phone_number,
                city,
                class_selected,
                percentage,
                ref_code: Some(trimmed(&self.ref_code)).filter(|code| !code.is_empty()),
            }),
            _ => Err(PortalError::Validation(errors)),
        }
    }
}

/// `REF` + id + first three characters of the name, upper-cased.
pub fn referral_code(id: i32, name: &str) -> String {
    let prefix: String = name.chars().take(3).collect();
    format!("REF{}{}", id, prefix.to_uppercase())
}

/// Stores a validated lead. The insert and the referral code patch share one
/// transaction, so a stored student always carries its code.
pub async fn submit_lead(
    db: &DatabaseConnection,
    lead: NewLead,
) -> Result<StudentModel, PortalError> {
    if find_by_email(db, &lead.email).await?.is_some() {
        warn!("Lead rejected, email already registered: {}", lead.email);
        return Err(PortalError::DuplicateEmail);
    }

    let referred_by_id = match &lead.ref_code {
        Some(code) => match find_by_referral_code(db, code).await? {
            Some(referrer) => Some(referrer.id),
            None => {
                info!("Ignoring unknown referral code: {}", code);
                None
            }
        },
        None => None,
    };

    let txn = db.begin().await?;
    let inserted = StudentActiveModel {
        name: Set(lead.name),
        email: Set(lead.email),
        phone_number: Set(lead.phone_number),
        city: Set(lead.city),
        class_selected: Set(lead.class_selected),
        percentage: Set(lead.percentage),
        lead_stage: Set(LeadStage::New),
        referred_by_id: Set(referred_by_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let code = referral_code(inserted.id, &inserted.name);
    let mut student: StudentActiveModel = inserted.into();
    student.referral_code = Set(Some(code));
    student.updated_at = Set(Some(Utc::now()));
    let student = student.update(&txn).await?;
    txn.commit().await?;

    info!("New student added: {} ({})", student.name, student.id);
    Ok(student)
}

pub async fn find_student(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<Option<StudentModel>, DbErr> {
    Student::find_by_id(student_id).one(db).await
}

pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<StudentModel>, DbErr> {
    Student::find()
        .filter(StudentColumn::Email.eq(email))
        .one(db)
        .await
}

pub async fn find_by_referral_code(
    db: &DatabaseConnection,
    code: &str,
) -> Result<Option<StudentModel>, DbErr> {
    Student::find()
        .filter(StudentColumn::ReferralCode.eq(code))
        .one(db)
        .await
}

pub async fn referrer_of(
    db: &DatabaseConnection,
    student: &StudentModel,
) -> Result<Option<StudentModel>, DbErr> {
    match student.referred_by_id {
        Some(referrer_id) => find_student(db, referrer_id).await,
        None => Ok(None),
    }
}

pub async fn referred_students_of(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<Vec<StudentModel>, DbErr> {
    Student::find()
        .filter(StudentColumn::ReferredById.eq(student_id))
        .order_by_asc(StudentColumn::Id)
        .all(db)
        .await
}

/// Latest leads of one class, newest first.
pub async fn recent_leads(
    db: &DatabaseConnection,
    class_selected: &str,
    limit: u64,
) -> Result<Vec<StudentModel>, DbErr> {
    Student::find()
        .filter(StudentColumn::ClassSelected.eq(class_selected))
        .order_by_desc(StudentColumn::CreatedAt)
        .order_by_desc(StudentColumn::Id)
        .limit(limit)
        .all(db)
        .await
}
