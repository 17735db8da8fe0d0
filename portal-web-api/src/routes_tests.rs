// Request flows through the mounted routes with a tracked local client

use crate::dto::{
    CollegeDashboard, EntryPage, FormPage, OffersPage, ResponseData, ScholarshipsPage,
    StudentDashboard,
};
use crate::test_support::{client, db_of, insert_college, insert_offer};
use portal_db_entity::db::college::{
    ActiveModel as CollegeActiveModel, Column as CollegeColumn, Entity as College,
};
use portal_db_entity::db::student::Entity as Student;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::{Client, LocalResponse};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

const ASHA: &str = "student_name=Asha+Verma&email=asha%40example.com&phone_number=9999999999&city=Pune&class_selected=10&percentage=88.5";

fn location<'a>(response: &'a LocalResponse<'_>) -> Option<&'a str> {
    response.headers().get_one("Location")
}

async fn post_form<'c>(client: &'c Client, uri: &'static str, body: &str) -> LocalResponse<'c> {
    client
        .post(uri)
        .header(ContentType::Form)
        .body(body.to_owned())
        .dispatch()
        .await
}

async fn student_count(client: &Client) -> u64 {
    Student::find().count(db_of(client)).await.unwrap()
}

async fn set_approval(client: &Client, contact_email: &str, is_approved: bool) {
    let db = db_of(client);
    let college = College::find()
        .filter(CollegeColumn::ContactEmail.eq(contact_email))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    let mut college: CollegeActiveModel = college.into();
    college.is_approved = Set(is_approved);
    college.update(db).await.unwrap();
}

#[rocket::async_test]
async fn health_ping_answers() {
    let client = client().await;
    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn entry_page_echoes_referral() {
    let client = client().await;
    let response = client.get("/?ref=REF1ASH").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let page = response
        .into_json::<ResponseData<EntryPage>>()
        .await
        .unwrap();
    let data = page.data.unwrap();
    assert_eq!(data.referral_code.as_deref(), Some("REF1ASH"));
    assert_eq!(
        data.referral_notice.as_deref(),
        Some("Referred by: REF1ASH. Sign up to credit your friend!")
    );

    let plain = client.get("/").dispatch().await;
    let page = plain.into_json::<ResponseData<EntryPage>>().await.unwrap();
    assert_eq!(page.data.unwrap().referral_code, None);
}

#[rocket::async_test]
async fn class10_lead_lands_on_offers() {
    let client = client().await;
    insert_offer(db_of(&client), "Elite Coaching Hub", Some(80.0), Some("10th")).await;

    let response = post_form(&client, "/submit_lead", ASHA).await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(location(&response), Some("/class10_offers/1"));

    let page = client.get("/class10_offers/1").dispatch().await;
    assert_eq!(page.status(), Status::Ok);
    let page = page.into_json::<ResponseData<OffersPage>>().await.unwrap();
    assert_eq!(
        page.message,
        "Lead submitted successfully! Your journey starts now."
    );
    let data = page.data.unwrap();
    assert_eq!(data.lead.referral_code.as_deref(), Some("REF1ASH"));
    assert_eq!(data.lead.lead_stage, "New");
    assert_eq!(data.offers.len(), 1);
    assert_eq!(data.offers[0].offer_type, "Discount");
}

#[rocket::async_test]
async fn class12_lead_lands_on_scholarships() {
    let client = client().await;
    let body = ASHA.replace("class_selected=10", "class_selected=12");
    let response = post_form(&client, "/submit_lead", &body).await;
    assert_eq!(location(&response), Some("/class12_scholarships/1"));

    let page = client.get("/class12_scholarships/1").dispatch().await;
    assert_eq!(page.status(), Status::Ok);
    let page = page
        .into_json::<ResponseData<ScholarshipsPage>>()
        .await
        .unwrap();
    assert!(page.data.unwrap().scholarships.is_empty());
}

#[rocket::async_test]
async fn unknown_class_falls_back_to_entry_page() {
    let client = client().await;
    let body = ASHA.replace("class_selected=10", "class_selected=11");
    let response = post_form(&client, "/submit_lead", &body).await;
    assert_eq!(location(&response), Some("/"));
    assert_eq!(student_count(&client).await, 1);
}

#[rocket::async_test]
async fn out_of_range_percentage_creates_nothing() {
    let client = client().await;
    for percentage in ["percentage=100.5", "percentage=-1", "percentage=eighty"] {
        let body = ASHA.replace("percentage=88.5", percentage);
        let response = post_form(&client, "/submit_lead", &body).await;
        assert_eq!(location(&response), Some("/"));
    }
    assert_eq!(student_count(&client).await, 0);

    let body = ASHA.replace("percentage=88.5", "percentage=101");
    post_form(&client, "/submit_lead", &body).await;
    let page = client.get("/").dispatch().await;
    let page = page.into_json::<ResponseData<EntryPage>>().await.unwrap();
    assert_eq!(page.message, "Percentage must be between 0 and 100.");
}

#[rocket::async_test]
async fn duplicate_email_keeps_single_row() {
    let client = client().await;
    post_form(&client, "/submit_lead", ASHA).await;
    let response = post_form(&client, "/submit_lead", ASHA).await;
    assert_eq!(location(&response), Some("/"));
    assert_eq!(student_count(&client).await, 1);

    let page = client.get("/").dispatch().await;
    let page = page.into_json::<ResponseData<EntryPage>>().await.unwrap();
    assert_eq!(
        page.message,
        "This email is already registered. Please login or use a different email."
    );
}

#[rocket::async_test]
async fn outcome_pages_check_student() {
    let client = client().await;
    let missing = client.get("/class10_offers/77").dispatch().await;
    assert_eq!(missing.status(), Status::NotFound);

    post_form(&client, "/submit_lead", ASHA).await;
    let wrong_class = client.get("/class12_scholarships/1").dispatch().await;
    assert_eq!(wrong_class.status(), Status::SeeOther);
    assert_eq!(location(&wrong_class), Some("/"));
}

#[rocket::async_test]
async fn student_session_flow() {
    let client = client().await;
    let anonymous = client.get("/student/dashboard").dispatch().await;
    assert_eq!(location(&anonymous), Some("/student/login"));

    post_form(&client, "/submit_lead", ASHA).await;
    let unknown = post_form(&client, "/student/login", "email=nobody%40example.com").await;
    assert_eq!(location(&unknown), Some("/student/login"));
    let empty = post_form(&client, "/student/login", "email=").await;
    assert_eq!(location(&empty), Some("/student/login"));

    let login = post_form(&client, "/student/login", "email=asha%40example.com").await;
    assert_eq!(location(&login), Some("/student/dashboard"));

    let login_page = client.get("/student/login").dispatch().await;
    assert_eq!(location(&login_page), Some("/student/dashboard"));

    let dashboard = client.get("/student/dashboard").dispatch().await;
    assert_eq!(dashboard.status(), Status::Ok);
    let dashboard = dashboard
        .into_json::<ResponseData<StudentDashboard>>()
        .await
        .unwrap();
    let data = dashboard.data.unwrap();
    assert_eq!(data.student.email, "asha@example.com");
    assert!(data.referred_by.is_none());

    // a student session is not a college session
    let college_dashboard = client.get("/college/dashboard").dispatch().await;
    assert_eq!(location(&college_dashboard), Some("/college/login"));

    let logout = client.get("/student/logout").dispatch().await;
    assert_eq!(location(&logout), Some("/"));
    let after = client.get("/student/dashboard").dispatch().await;
    assert_eq!(location(&after), Some("/student/login"));
}

#[rocket::async_test]
async fn referred_lead_shows_on_both_dashboards() {
    let client = client().await;
    post_form(&client, "/submit_lead", ASHA).await;
    let ravi = "student_name=Ravi&email=ravi%40example.com&phone_number=8888888888&city=Delhi&class_selected=12&percentage=91&ref_code=REF1ASH";
    post_form(&client, "/submit_lead", ravi).await;

    post_form(&client, "/student/login", "email=ravi%40example.com").await;
    let dashboard = client.get("/student/dashboard").dispatch().await;
    let data = dashboard
        .into_json::<ResponseData<StudentDashboard>>()
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(data.referred_by.unwrap().name, "Asha Verma");

    post_form(&client, "/student/login", "email=asha%40example.com").await;
    let dashboard = client.get("/student/dashboard").dispatch().await;
    let data = dashboard
        .into_json::<ResponseData<StudentDashboard>>()
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(data.referred_students.len(), 1);
    assert_eq!(data.referred_students[0].referral_code.as_deref(), Some("REF2RAV"));
}

#[rocket::async_test]
async fn college_registration_waits_for_approval() {
    let client = client().await;
    let anonymous = client.get("/college/dashboard").dispatch().await;
    assert_eq!(location(&anonymous), Some("/college/login"));

    let missing = post_form(&client, "/college/register", "college_name=&contact_email=").await;
    assert_eq!(location(&missing), Some("/college/register"));

    let registered = post_form(
        &client,
        "/college/register",
        "college_name=Pune+Institute&contact_email=admin%40pune.edu&logo_url=",
    )
    .await;
    assert_eq!(location(&registered), Some("/college/login"));

    let duplicate = post_form(
        &client,
        "/college/register",
        "college_name=Other&contact_email=admin%40pune.edu",
    )
    .await;
    assert_eq!(location(&duplicate), Some("/college/register"));

    let pending = post_form(&client, "/college/login", "contact_email=admin%40pune.edu").await;
    assert_eq!(location(&pending), Some("/college/login"));
    let login_page = client.get("/college/login").dispatch().await;
    let page = login_page
        .into_json::<ResponseData<FormPage>>()
        .await
        .unwrap();
    assert!(page.message.contains("pending approval"));
    assert_eq!(page.data.unwrap().flash_kind.as_deref(), Some("warning"));

    let unknown = post_form(&client, "/college/login", "contact_email=who%40nowhere.edu").await;
    assert_eq!(location(&unknown), Some("/college/login"));
    let login_page = client.get("/college/login").dispatch().await;
    let page = login_page
        .into_json::<ResponseData<FormPage>>()
        .await
        .unwrap();
    assert_eq!(
        page.message,
        "No college found with that email. Please register first."
    );
}

#[rocket::async_test]
async fn approved_college_sees_leads_until_revoked() {
    let client = client().await;
    insert_college(db_of(&client), "Pune Institute", "admin@pune.edu", true).await;
    let body = ASHA.replace("class_selected=10", "class_selected=12");
    post_form(&client, "/submit_lead", &body).await;
    post_form(&client, "/submit_lead", ASHA.replace("asha%40", "other%40").as_str()).await;

    let login = post_form(&client, "/college/login", "contact_email=admin%40pune.edu").await;
    assert_eq!(location(&login), Some("/college/dashboard"));

    let dashboard = client.get("/college/dashboard").dispatch().await;
    assert_eq!(dashboard.status(), Status::Ok);
    let data = dashboard
        .into_json::<ResponseData<CollegeDashboard>>()
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(data.college.name, "Pune Institute");
    assert_eq!(data.leads.len(), 1);
    assert_eq!(data.leads[0].lead.class_selected, "12");
    // 88.5% (35) + class 12 (20) + organic (12) + Pune (10)
    assert_eq!(data.leads[0].score, 77);
    assert_eq!(data.leads[0].priority, "medium");
    assert_eq!(data.leads[0].source, "organic");
    assert!(data.leads[0]
        .recommended_actions
        .contains(&"Offer scholarship information".to_owned()));

    set_approval(&client, "admin@pune.edu", false).await;
    let revoked = client.get("/college/dashboard").dispatch().await;
    assert_eq!(location(&revoked), Some("/college/login"));

    // the session was dropped, so approving again is not enough
    set_approval(&client, "admin@pune.edu", true).await;
    let again = client.get("/college/dashboard").dispatch().await;
    assert_eq!(location(&again), Some("/college/login"));

    let logout = client.get("/college/logout").dispatch().await;
    assert_eq!(location(&logout), Some("/"));
}
