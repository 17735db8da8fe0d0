use crate::error::AdminError;
use chrono::Utc;
use clap::Args;
use portal_db_entity::db::college::{
    ActiveModel as CollegeActiveModel, Column as CollegeColumn, Entity as College,
    Model as CollegeModel,
};
use portal_db_entity::db::course::{
    ActiveModel as CourseActiveModel, Entity as Course, Model as CourseModel,
};
use portal_db_entity::db::scholarship::{
    ActiveModel as ScholarshipActiveModel, Model as ScholarshipModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::info;

#[derive(Debug, Args)]
#[clap(about = "Approve a registered college, or revoke its approval")]
pub struct ApproveCollege {
    /// Contact email the college registered with
    #[clap(short, long)]
    pub contact_email: String,

    /// Withdraw approval instead of granting it
    #[clap(long)]
    pub revoke: bool,
}

#[derive(Debug, Args)]
#[clap(about = "Add a course offered by a college")]
pub struct AddCourse {
    #[clap(short, long)]
    pub contact_email: String,

    #[clap(short, long)]
    pub name: String,

    #[clap(short, long)]
    pub description: Option<String>,

    #[clap(long)]
    pub eligibility_criteria: Option<String>,

    #[clap(long)]
    pub future_opportunities: Option<String>,
}

#[derive(Debug, Args)]
#[clap(about = "Add a scholarship granted by a college")]
pub struct AddScholarship {
    #[clap(short, long)]
    pub contact_email: String,

    /// Restrict the scholarship to one of the college's courses
    #[clap(long)]
    pub course_id: Option<i32>,

    #[clap(short, long)]
    pub name: String,

    #[clap(short, long)]
    pub description: String,

    /// Minimum percentage
    #[clap(short, long)]
    pub eligibility_marks: Option<f64>,

    /// e.g. "50% tuition waiver", "INR 25000"
    #[clap(long)]
    pub amount_details: Option<String>,

    /// e.g. "12th" or "All"
    #[clap(long)]
    pub applicable_class: Option<String>,
}

pub async fn find_college(
    db: &DatabaseConnection,
    contact_email: &str,
) -> Result<CollegeModel, AdminError> {
    College::find()
        .filter(CollegeColumn::ContactEmail.eq(contact_email))
        .one(db)
        .await?
        .ok_or_else(|| AdminError::CollegeNotFound(contact_email.to_owned()))
}

pub fn check_marks(eligibility_marks: Option<f64>) -> Result<(), AdminError> {
    match eligibility_marks {
        Some(marks) if !(0.0..=100.0).contains(&marks) => Err(AdminError::MarksOutOfRange(marks)),
        _ => Ok(()),
    }
}

pub async fn approve_college(
    db: &DatabaseConnection,
    params: &ApproveCollege,
) -> Result<CollegeModel, AdminError> {
    let college = find_college(db, &params.contact_email).await?;
    let mut college: CollegeActiveModel = college.into();
    college.is_approved = Set(!params.revoke);
    college.updated_at = Set(Some(Utc::now()));
    let college = college.update(db).await?;
    info!(
        "College {} approval set to {}",
        college.name, college.is_approved
    );
    Ok(college)
}

pub async fn add_course(
    db: &DatabaseConnection,
    params: AddCourse,
) -> Result<CourseModel, AdminError> {
    let college = find_college(db, &params.contact_email).await?;
    let course = CourseActiveModel {
        college_id: Set(college.id),
        name: Set(params.name),
        description: Set(params.description),
        eligibility_criteria: Set(params.eligibility_criteria),
        future_opportunities: Set(params.future_opportunities),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!("Course {} added to {}", course.name, college.name);
    Ok(course)
}

pub async fn add_scholarship(
    db: &DatabaseConnection,
    params: AddScholarship,
) -> Result<ScholarshipModel, AdminError> {
    check_marks(params.eligibility_marks)?;
    let college = find_college(db, &params.contact_email).await?;
    if let Some(course_id) = params.course_id {
        match Course::find_by_id(course_id).one(db).await? {
            Some(course) if course.college_id == college.id => {}
            _ => return Err(AdminError::CourseMismatch(course_id, college.name)),
        }
    }

    let scholarship = ScholarshipActiveModel {
        college_id: Set(college.id),
        course_id: Set(params.course_id),
        name: Set(params.name),
        description: Set(params.description),
        eligibility_marks: Set(params.eligibility_marks),
        amount_details: Set(params.amount_details),
        applicable_class: Set(params.applicable_class),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!("Scholarship {} added to {}", scholarship.name, college.name);
    Ok(scholarship)
}
