use crate::catalog::{self, ClassLevel};
use crate::dto::{
    OfferDetails, OffersPage, Rejection, ResponseData, ScholarshipDetails, ScholarshipsPage,
    StudentDetails, RESPONSE_OK,
};
use crate::lead::{self, LeadForm};
use crate::pool::Db;
use crate::routes::flash_text;
use portal_db_entity::db::student::Model as StudentModel;
use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::serde::json::Json;
use sea_orm::DatabaseConnection;
use sea_orm_rocket::Connection;
use tracing::{error, warn};

#[post("/submit_lead", data = "<form>")]
pub async fn submit(conn: Connection<'_, Db>, form: Form<LeadForm>) -> Flash<Redirect> {
    let db = conn.into_inner();
    let new_lead = match form.validate() {
        Ok(new_lead) => new_lead,
        Err(error) => {
            warn!("Lead rejected: {}", error);
            return Flash::error(Redirect::to("/"), error.to_string());
        }
    };

    match lead::submit_lead(db, new_lead).await {
        Ok(student) => {
            let target = match ClassLevel::from_selected(&student.class_selected) {
                Some(class) => class.outcome_path(student.id),
                None => String::from("/"),
            };
            Flash::success(
                Redirect::to(target),
                "Lead submitted successfully! Your journey starts now.",
            )
        }
        Err(error) if error.is_internal() => {
            error!("Error submitting lead: {}", error);
            Flash::error(
                Redirect::to("/"),
                "Error submitting lead. Please try again.",
            )
        }
        Err(error) => Flash::error(Redirect::to("/"), error.to_string()),
    }
}

/// Loads the lead behind an outcome page and checks it belongs on it.
async fn load_lead(
    db: &DatabaseConnection,
    student_id: i32,
    class: ClassLevel,
) -> Result<StudentModel, Rejection> {
    match lead::find_student(db, student_id).await {
        Ok(Some(student)) if student.class_selected == class.code() => Ok(student),
        Ok(Some(_)) => Err(Rejection::redirect(Flash::error(
            Redirect::to("/"),
            class.wrong_page_message(),
        ))),
        Ok(None) => Err(Rejection::not_found(format!(
            "Student {} not found",
            student_id
        ))),
        Err(error) => {
            error!("Error loading student {}: {:?}", student_id, error);
            Err(Rejection::internal())
        }
    }
}

#[get("/class10_offers/<student_id>")]
pub async fn class10_offers(
    conn: Connection<'_, Db>,
    student_id: i32,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<ResponseData<OffersPage>>, Rejection> {
    let db = conn.into_inner();
    let student = load_lead(db, student_id, ClassLevel::Ten).await?;
    let offers = match catalog::eligible_offers(db, &student).await {
        Ok(offers) => offers,
        Err(error) => {
            error!("Error fetching offers: {:?}", error);
            return Err(Rejection::internal());
        }
    };

    let page = OffersPage {
        lead: StudentDetails::new(&student),
        offers: offers.iter().map(OfferDetails::new).collect(),
    };
    Ok(Json(ResponseData::new(
        RESPONSE_OK,
        flash_text(&flash),
        Some(page),
    )))
}

#[get("/class12_scholarships/<student_id>")]
pub async fn class12_scholarships(
    conn: Connection<'_, Db>,
    student_id: i32,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<ResponseData<ScholarshipsPage>>, Rejection> {
    let db = conn.into_inner();
    let student = load_lead(db, student_id, ClassLevel::Twelve).await?;
    let scholarships = match catalog::eligible_scholarships(db, &student).await {
        Ok(scholarships) => scholarships,
        Err(error) => {
            error!("Error fetching scholarships: {:?}", error);
            return Err(Rejection::internal());
        }
    };

    let page = ScholarshipsPage {
        lead: StudentDetails::new(&student),
        scholarships: scholarships.iter().map(ScholarshipDetails::new).collect(),
    };
    Ok(Json(ResponseData::new(
        RESPONSE_OK,
        flash_text(&flash),
        Some(page),
    )))
}
