use crate::dto::{
    FormPage, ReferralDetails, Rejection, ResponseData, StudentDashboard, StudentDetails,
    RESPONSE_OK,
};
use crate::lead;
use crate::pool::Db;
use crate::routes::{flash_text, form_page};
use crate::session::{Role, Session};
use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::serde::json::Json;
use sea_orm_rocket::Connection;
use tracing::{error, info};

const LOGIN_PATH: &str = "/student/login";
const DASHBOARD_PATH: &str = "/student/dashboard";

#[derive(Debug, FromForm)]
pub struct StudentLoginForm {
    pub email: Option<String>,
}

#[get("/student/login")]
pub async fn login_page(
    session: Session,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<ResponseData<FormPage>>, Redirect> {
    if session.identity_for(Role::Student).is_some() {
        return Err(Redirect::to(DASHBOARD_PATH));
    }
    Ok(form_page("student_login", flash))
}

/// Email-only login: a matching lead is enough to open a session.
#[post("/student/login", data = "<form>")]
pub async fn login(
    conn: Connection<'_, Db>,
    cookies: &CookieJar<'_>,
    form: Form<StudentLoginForm>,
) -> Flash<Redirect> {
    let email = form.email.as_deref().unwrap_or("").trim();
    if email.is_empty() {
        return Flash::error(Redirect::to(LOGIN_PATH), "Email is required.");
    }

    let db = conn.into_inner();
    match lead::find_by_email(db, email).await {
        Ok(Some(student)) => {
            Session::establish(cookies, student.id, Role::Student);
            info!("Student {} logged in", student.id);
            Flash::success(Redirect::to(DASHBOARD_PATH), "Successfully logged in!")
        }
        Ok(None) => Flash::error(
            Redirect::to(LOGIN_PATH),
            "No student found with that email. Please register first.",
        ),
        Err(error) => {
            error!("Error looking up student login: {:?}", error);
            Flash::error(
                Redirect::to(LOGIN_PATH),
                "System error. Please try again.",
            )
        }
    }
}

#[get("/student/dashboard")]
pub async fn dashboard(
    conn: Connection<'_, Db>,
    session: Session,
    cookies: &CookieJar<'_>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<ResponseData<StudentDashboard>>, Rejection> {
    let student_id = match session.identity_for(Role::Student) {
        Some(student_id) => student_id,
        None => {
            return Err(Rejection::redirect(Flash::new(
                Redirect::to(LOGIN_PATH),
                "info",
                "Please log in to access the dashboard.",
            )))
        }
    };

    let db = conn.into_inner();
    let student = match lead::find_student(db, student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            Session::clear(cookies);
            return Err(Rejection::redirect(Flash::error(
                Redirect::to(LOGIN_PATH),
                "Could not find your student profile. Please log in again.",
            )));
        }
        Err(error) => {
            error!("Error loading student {}: {:?}", student_id, error);
            return Err(Rejection::internal());
        }
    };

    let referrer = lead::referrer_of(db, &student).await;
    let referred = lead::referred_students_of(db, student.id).await;
    let (referrer, referred) = match (referrer, referred) {
        (Ok(referrer), Ok(referred)) => (referrer, referred),
        (Err(error), _) | (_, Err(error)) => {
            error!("Error loading referrals of {}: {:?}", student.id, error);
            return Err(Rejection::internal());
        }
    };

    let dashboard = StudentDashboard {
        student: StudentDetails::new(&student),
        referred_by: referrer.as_ref().map(ReferralDetails::new),
        referred_students: referred.iter().map(ReferralDetails::new).collect(),
    };
    Ok(Json(ResponseData::new(
        RESPONSE_OK,
        flash_text(&flash),
        Some(dashboard),
    )))
}

#[get("/student/logout")]
pub async fn logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    Session::clear(cookies);
    Flash::success(Redirect::to("/"), "You have been logged out.")
}
