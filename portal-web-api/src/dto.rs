use crate::scoring;
use portal_db_entity::db::college::Model as CollegeModel;
use portal_db_entity::db::offer::Model as OfferModel;
use portal_db_entity::db::scholarship::Model as ScholarshipModel;
use portal_db_entity::db::sea_orm_active_enums::{LeadStage, OfferType};
use portal_db_entity::db::student::Model as StudentModel;
use rocket::response::{Flash, Redirect};
use rocket::serde::{json::Json, Deserialize, Serialize};

pub fn lead_stage_label(stage: LeadStage) -> &'static str {
    match stage {
        LeadStage::New => "New",
        LeadStage::Contacted => "Contacted",
        LeadStage::Converted => "Converted",
    }
}

pub fn offer_type_label(offer_type: OfferType) -> &'static str {
    match offer_type {
        OfferType::Discount => "Discount",
        OfferType::Goodie => "Goodie",
        OfferType::Other => "Other",
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StudentDetails {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub city: String,
    pub class_selected: String,
    pub percentage: f64,
    pub referral_code: Option<String>,
    pub lead_stage: String,
    pub created_at: i64,
}

impl StudentDetails {
    pub fn new(student: &StudentModel) -> StudentDetails {
        StudentDetails {
            id: student.id,
            name: student.name.to_owned(),
            email: student.email.to_owned(),
            phone_number: student.phone_number.to_owned(),
            city: student.city.to_owned(),
            class_selected: student.class_selected.to_owned(),
            percentage: student.percentage,
            referral_code: student.referral_code.to_owned(),
            lead_stage: lead_stage_label(student.lead_stage).to_owned(),
            created_at: student.created_at.timestamp(),
        }
    }
}

/// Public face of another student; no contact details.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ReferralDetails {
    pub name: String,
    pub referral_code: Option<String>,
}

impl ReferralDetails {
    pub fn new(student: &StudentModel) -> ReferralDetails {
        ReferralDetails {
            name: student.name.to_owned(),
            referral_code: student.referral_code.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StudentDashboard {
    pub student: StudentDetails,
    pub referred_by: Option<ReferralDetails>,
    pub referred_students: Vec<ReferralDetails>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct OfferDetails {
    pub id: i32,
    pub provider_name: String,
    pub description: String,
    pub offer_type: String,
    pub eligibility_marks: Option<f64>,
    pub applicable_class: Option<String>,
    pub terms_and_conditions: Option<String>,
}

impl OfferDetails {
    pub fn new(offer: &OfferModel) -> OfferDetails {
        OfferDetails {
            id: offer.id,
            provider_name: offer.provider_name.to_owned(),
            description: offer.description.to_owned(),
            offer_type: offer_type_label(offer.offer_type).to_owned(),
            eligibility_marks: offer.eligibility_marks,
            applicable_class: offer.applicable_class.to_owned(),
            terms_and_conditions: offer.terms_and_conditions.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ScholarshipDetails {
    pub id: i32,
    pub college_id: i32,
    pub course_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub eligibility_marks: Option<f64>,
    pub amount_details: Option<String>,
    pub applicable_class: Option<String>,
}

impl ScholarshipDetails {
    pub fn new(scholarship: &ScholarshipModel) -> ScholarshipDetails {
        ScholarshipDetails {
            id: scholarship.id,
            college_id: scholarship.college_id,
            course_id: scholarship.course_id,
            name: scholarship.name.to_owned(),
            description: scholarship.description.to_owned(),
            eligibility_marks: scholarship.eligibility_marks,
            amount_details: scholarship.amount_details.to_owned(),
            applicable_class: scholarship.applicable_class.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct OffersPage {
    pub lead: StudentDetails,
    pub offers: Vec<OfferDetails>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ScholarshipsPage {
    pub lead: StudentDetails,
    pub scholarships: Vec<ScholarshipDetails>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CollegeDetails {
    pub id: i32,
    pub name: String,
    pub contact_email: String,
    pub logo_url: Option<String>,
    pub is_approved: bool,
}

impl CollegeDetails {
    pub fn new(college: &CollegeModel) -> CollegeDetails {
        CollegeDetails {
            id: college.id,
            name: college.name.to_owned(),
            contact_email: college.contact_email.to_owned(),
            logo_url: college.logo_url.to_owned(),
            is_approved: college.is_approved,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CollegeDashboard {
    pub college: CollegeDetails,
    pub leads: Vec<ScoredLead>,
}

/// A lead as a college sees it, ranked for follow-up.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ScoredLead {
    pub lead: StudentDetails,
    pub referred_by_id: Option<i32>,
    pub source: String,
    pub score: u8,
    pub priority: String,
    pub recommended_actions: Vec<String>,
}

impl ScoredLead {
    pub fn new(student: &StudentModel) -> ScoredLead {
        let score = scoring::lead_score(student);
        let priority = scoring::lead_priority(score);
        ScoredLead {
            lead: StudentDetails::new(student),
            referred_by_id: student.referred_by_id,
            source: scoring::lead_source(student).to_string(),
            score,
            priority: priority.to_string(),
            recommended_actions: scoring::recommended_actions(student, priority)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct EntryPage {
    pub referral_code: Option<String>,
    pub referral_notice: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct FormPage {
    pub form: String,
    pub flash_kind: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ResponseData<T> {
    pub code: Option<u16>,
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ResponseData<T> {
    pub fn new(code: u16, message: String, data: Option<T>) -> ResponseData<T> {
        ResponseData {
            code: Some(code),
            status_code: None,
            message,
            data,
        }
    }
}

pub const RESPONSE_OK: u16 = 200;
pub const RESPONSE_NOT_FOUND: u16 = 404;
pub const RESPONSE_INTERNAL_ERROR: u16 = 500;

/// Ways a page request is turned away.
#[derive(Responder)]
pub enum Rejection {
    #[response(status = 404)]
    NotFound(Json<ResponseData<String>>),
    #[response(status = 500)]
    Internal(Json<ResponseData<String>>),
    Redirect(Flash<Redirect>),
}

impl Rejection {
    pub fn not_found(message: String) -> Rejection {
        Rejection::NotFound(Json(ResponseData::new(RESPONSE_NOT_FOUND, message, None)))
    }

    pub fn internal() -> Rejection {
        Rejection::Internal(Json(ResponseData::new(
            RESPONSE_INTERNAL_ERROR,
            String::from("System error. Please contact administrator!"),
            None,
        )))
    }

    pub fn redirect(redirect: Flash<Redirect>) -> Rejection {
        Rejection::Redirect(redirect)
    }
}
