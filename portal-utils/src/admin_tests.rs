// Admin operations against a migrated in-memory SQLite database

use super::*;
use catalog::OfferKind;
use chrono::Utc;
use lead::Stage;
use portal_db_entity::db::sea_orm_active_enums::{LeadStage, OfferType};
use portal_db_entity::db::{college as college_entity, student};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).min_connections(1);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn pending_college(db: &DatabaseConnection, name: &str, contact_email: &str) -> i32 {
    college_entity::ActiveModel {
        name: Set(name.to_owned()),
        contact_email: Set(contact_email.to_owned()),
        logo_url: Set(None),
        is_approved: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn approve_then_revoke() {
    let db = memory_db().await;
    pending_college(&db, "Pune Institute", "admin@pune.edu").await;

    let mut params = ApproveCollege {
        contact_email: "admin@pune.edu".to_owned(),
        revoke: false,
    };
    let approved = college::approve_college(&db, &params).await.unwrap();
    assert!(approved.is_approved);
    assert!(approved.updated_at.is_some());

    params.revoke = true;
    let revoked = college::approve_college(&db, &params).await.unwrap();
    assert!(!revoked.is_approved);
}

#[tokio::test]
async fn approve_unknown_college_fails() {
    let db = memory_db().await;
    let params = ApproveCollege {
        contact_email: "nobody@nowhere.edu".to_owned(),
        revoke: false,
    };
    assert!(matches!(
        college::approve_college(&db, &params).await,
        Err(AdminError::CollegeNotFound(_))
    ));
}

#[tokio::test]
async fn scholarship_course_must_belong_to_college() {
    let db = memory_db().await;
    pending_college(&db, "Pune Institute", "admin@pune.edu").await;
    pending_college(&db, "Delhi College", "admin@delhi.edu").await;
    let course = college::add_course(
        &db,
        AddCourse {
            contact_email: "admin@pune.edu".to_owned(),
            name: "B.Tech".to_owned(),
            description: None,
            eligibility_criteria: Some("60% in PCM".to_owned()),
            future_opportunities: None,
        },
    )
    .await
    .unwrap();

    let scholarship = |contact_email: &str| AddScholarship {
        contact_email: contact_email.to_owned(),
        course_id: Some(course.id),
        name: "Merit".to_owned(),
        description: "For toppers".to_owned(),
        eligibility_marks: Some(90.0),
        amount_details: None,
        applicable_class: Some("12th".to_owned()),
    };
    let granted = college::add_scholarship(&db, scholarship("admin@pune.edu"))
        .await
        .unwrap();
    assert_eq!(granted.course_id, Some(course.id));
    assert!(matches!(
        college::add_scholarship(&db, scholarship("admin@delhi.edu")).await,
        Err(AdminError::CourseMismatch(_, _))
    ));
}

#[tokio::test]
async fn offer_marks_are_bounded() {
    let db = memory_db().await;
    let offer = |marks: f64| AddOffer {
        provider_name: "The Bookworm".to_owned(),
        description: "10% off books".to_owned(),
        offer_type: OfferKind::Goodie,
        eligibility_marks: Some(marks),
        applicable_class: Some("10th".to_owned()),
        terms: None,
    };
    let added = catalog::add_offer(&db, offer(75.0)).await.unwrap();
    assert_eq!(added.offer_type, OfferType::Goodie);
    assert!(matches!(
        catalog::add_offer(&db, offer(120.0)).await,
        Err(AdminError::MarksOutOfRange(_))
    ));
}

#[tokio::test]
async fn lead_stage_moves_forward() {
    let db = memory_db().await;
    student::ActiveModel {
        name: Set("Asha Verma".to_owned()),
        email: Set("asha@example.com".to_owned()),
        phone_number: Set("9999999999".to_owned()),
        city: Set("Pune".to_owned()),
        class_selected: Set("10".to_owned()),
        percentage: Set(88.5),
        referral_code: Set(Some("REF1ASH".to_owned())),
        lead_stage: Set(LeadStage::New),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let params = SetLeadStage {
        email: "asha@example.com".to_owned(),
        stage: Stage::Contacted,
    };
    let student = lead::set_lead_stage(&db, &params).await.unwrap();
    assert_eq!(student.lead_stage, LeadStage::Contacted);

    let missing = SetLeadStage {
        email: "ghost@example.com".to_owned(),
        stage: Stage::Converted,
    };
    assert!(matches!(
        lead::set_lead_stage(&db, &missing).await,
        Err(AdminError::StudentNotFound(_))
    ));
}
