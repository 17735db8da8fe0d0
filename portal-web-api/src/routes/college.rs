use crate::catalog::ClassLevel;
use crate::college::{self, CollegeLogin, CollegeRegistrationForm};
use crate::config::PortalConfig;
use crate::dto::{
    CollegeDashboard, CollegeDetails, FormPage, Rejection, ResponseData, ScoredLead, RESPONSE_OK,
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
use rocket::State;
use sea_orm_rocket::Connection;
use tracing::{error, info, warn};

const REGISTER_PATH: &str = "/college/register";
const LOGIN_PATH: &str = "/college/login";
const DASHBOARD_PATH: &str = "/college/dashboard";

#[derive(Debug, FromForm)]
pub struct CollegeLoginForm {
    pub contact_email: Option<String>,
}

#[get("/college/register")]
pub async fn register_page(
    session: Session,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<ResponseData<FormPage>>, Redirect> {
    if session.identity_for(Role::College).is_some() {
        return Err(Redirect::to(DASHBOARD_PATH));
    }
    Ok(form_page("college_register", flash))
}

/// Self-registration. The college stays unapproved and gets no session.
#[post("/college/register", data = "<form>")]
pub async fn register(
    conn: Connection<'_, Db>,
    form: Form<CollegeRegistrationForm>,
) -> Flash<Redirect> {
    let new_college = match form.validate() {
        Ok(new_college) => new_college,
        Err(error) => return Flash::error(Redirect::to(REGISTER_PATH), error.to_string()),
    };

    let db = conn.into_inner();
    match college::register_college(db, new_college).await {
        Ok(_) => Flash::success(
            Redirect::to(LOGIN_PATH),
            "College registration submitted successfully! Your application will be reviewed by an admin.",
        ),
        Err(error) if error.is_internal() => {
            error!("Error during college registration: {}", error);
            Flash::error(
                Redirect::to(REGISTER_PATH),
                "Error during registration. Please try again.",
            )
        }
        Err(error) => {
            warn!("College registration rejected: {}", error);
            Flash::error(Redirect::to(REGISTER_PATH), error.to_string())
        }
    }
}

#[get("/college/login")]
pub async fn login_page(
    session: Session,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<ResponseData<FormPage>>, Redirect> {
    if session.identity_for(Role::College).is_some() {
        return Err(Redirect::to(DASHBOARD_PATH));
    }
    Ok(form_page("college_login", flash))
}

#[post("/college/login", data = "<form>")]
pub async fn login(
    conn: Connection<'_, Db>,
    cookies: &CookieJar<'_>,
    form: Form<CollegeLoginForm>,
) -> Flash<Redirect> {
    let contact_email = form.contact_email.as_deref().unwrap_or("").trim();
    if contact_email.is_empty() {
        return Flash::error(Redirect::to(LOGIN_PATH), "Contact Email is required.");
    }

    let db = conn.into_inner();
    match college::login_college(db, contact_email).await {
        Ok(CollegeLogin::Approved(college)) => {
            Session::establish(cookies, college.id, Role::College);
            info!("College {} logged in", college.id);
            Flash::success(Redirect::to(DASHBOARD_PATH), "Successfully logged in!")
        }
        Ok(CollegeLogin::Pending(college)) => {
            info!("Login attempt by unapproved college {}", college.id);
            Flash::warning(
                Redirect::to(LOGIN_PATH),
                "Your college registration is pending approval. Please wait for admin confirmation.",
            )
        }
        Ok(CollegeLogin::NotFound) => Flash::error(
            Redirect::to(LOGIN_PATH),
            "No college found with that email. Please register first.",
        ),
        Err(error) => {
            error!("Error looking up college login: {:?}", error);
            Flash::error(
                Redirect::to(LOGIN_PATH),
                "System error. Please try again.",
            )
        }
    }
}

/// Approval is checked again on every visit; a revoked college loses its
/// session here.
#[get("/college/dashboard")]
pub async fn dashboard(
    conn: Connection<'_, Db>,
    config: &State<PortalConfig>,
    session: Session,
    cookies: &CookieJar<'_>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Json<ResponseData<CollegeDashboard>>, Rejection> {
    let college_id = match session.identity_for(Role::College) {
        Some(college_id) => college_id,
        None => {
            return Err(Rejection::redirect(Flash::new(
                Redirect::to(LOGIN_PATH),
                "info",
                "Please log in to access the college dashboard.",
            )))
        }
    };

    let db = conn.into_inner();
    let college = match college::approved_college(db, college_id).await {
        Ok(Some(college)) => college,
        Ok(None) => {
            Session::clear(cookies);
            return Err(Rejection::redirect(Flash::error(
                Redirect::to(LOGIN_PATH),
                "Access denied or college not approved. Please log in again or contact admin.",
            )));
        }
        Err(error) => {
            error!("Error loading college {}: {:?}", college_id, error);
            return Err(Rejection::internal());
        }
    };

    let leads = match lead::recent_leads(
        db,
        ClassLevel::Twelve.code(),
        config.recent_leads_limit,
    )
    .await
    {
        Ok(leads) => leads,
        Err(error) => {
            error!("Error fetching leads: {:?}", error);
            return Err(Rejection::internal());
        }
    };

    let dashboard = CollegeDashboard {
        college: CollegeDetails::new(&college),
        leads: leads.iter().map(ScoredLead::new).collect(),
    };
    Ok(Json(ResponseData::new(
        RESPONSE_OK,
        flash_text(&flash),
        Some(dashboard),
    )))
}

#[get("/college/logout")]
pub async fn logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    Session::clear(cookies);
    Flash::success(
        Redirect::to("/"),
        "You have been logged out from the College Portal.",
    )
}
