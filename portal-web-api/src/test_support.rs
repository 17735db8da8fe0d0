// Fixtures shared by the test modules of this crate

use crate::config::PortalConfig;
use chrono::Utc;
use portal_db_entity::db::{college, offer, scholarship, sea_orm_active_enums::OfferType};
use portal_db_migration::{Migrator, MigratorTrait};
use rocket::local::asynchronous::Client;
use sea_orm_rocket::Database as _;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use std::ops::Deref;
use tempfile::{tempdir, TempDir};

pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).min_connections(1);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// A tracked client, so session and flash cookies survive between requests.
/// Its database file lives in a temp dir removed when the client drops.
pub struct TestClient {
    client: Client,
    _dir: TempDir,
}

impl Deref for TestClient {
    type Target = Client;

    fn deref(&self) -> &Client {
        &self.client
    }
}

pub async fn client() -> TestClient {
    let dir = tempdir().unwrap();
    let portal_config = PortalConfig {
        database_url: format!("sqlite://{}?mode=rwc", dir.path().join("portal.db").display()),
        ..PortalConfig::default()
    };
    let figment = portal_config
        .rocket_figment()
        .merge(("databases.sea_orm.max_connections", 1))
        .merge(("log_level", "off"));
    let client = Client::tracked(crate::build(portal_config, figment))
        .await
        .unwrap();
    TestClient { client, _dir: dir }
}

pub fn db_of(client: &Client) -> &DatabaseConnection {
    &crate::pool::Db::fetch(client.rocket()).unwrap().conn
}

pub async fn insert_college(
    db: &DatabaseConnection,
    name: &str,
    contact_email: &str,
    is_approved: bool,
) -> college::Model {
    college::ActiveModel {
        name: Set(name.to_owned()),
        contact_email: Set(contact_email.to_owned()),
        logo_url: Set(None),
        is_approved: Set(is_approved),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_offer(
    db: &DatabaseConnection,
    provider_name: &str,
    eligibility_marks: Option<f64>,
    applicable_class: Option<&str>,
) -> offer::Model {
    offer::ActiveModel {
        provider_name: Set(provider_name.to_owned()),
        description: Set(format!("{} discount", provider_name)),
        offer_type: Set(OfferType::Discount),
        eligibility_marks: Set(eligibility_marks),
        applicable_class: Set(applicable_class.map(str::to_owned)),
        terms_and_conditions: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_scholarship(
    db: &DatabaseConnection,
    college_id: i32,
    name: &str,
    eligibility_marks: Option<f64>,
    applicable_class: Option<&str>,
) -> scholarship::Model {
    scholarship::ActiveModel {
        college_id: Set(college_id),
        course_id: Set(None),
        name: Set(name.to_owned()),
        description: Set(format!("{} for toppers", name)),
        eligibility_marks: Set(eligibility_marks),
        amount_details: Set(Some("50% tuition waiver".to_owned())),
        applicable_class: Set(applicable_class.map(str::to_owned)),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
