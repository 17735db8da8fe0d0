use crate::dto::{FormPage, ResponseData, RESPONSE_OK};
use rocket::fairing::AdHoc;
use rocket::request::FlashMessage;
use rocket::serde::json::Json;

pub mod college;
pub mod home;
pub mod lead;
pub mod student;

pub fn mount() -> AdHoc {
    AdHoc::on_ignite("Attaching Routes", |rocket| async {
        rocket.mount(
            "/",
            routes![
                home::index,
                lead::submit,
                lead::class10_offers,
                lead::class12_scholarships,
                student::login_page,
                student::login,
                student::dashboard,
                student::logout,
                college::register_page,
                college::register,
                college::login_page,
                college::login,
                college::dashboard,
                college::logout
            ],
        )
    })
}

/// Pending flash text, or an empty message.
pub fn flash_text(flash: &Option<FlashMessage<'_>>) -> String {
    match flash {
        Some(flash) => flash.message().to_owned(),
        None => String::new(),
    }
}

pub fn form_page(form: &str, flash: Option<FlashMessage<'_>>) -> Json<ResponseData<FormPage>> {
    let message = flash_text(&flash);
    let page = FormPage {
        form: form.to_owned(),
        flash_kind: flash.map(|flash| flash.kind().to_owned()),
    };
    Json(ResponseData::new(RESPONSE_OK, message, Some(page)))
}
