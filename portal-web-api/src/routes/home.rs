use crate::dto::{EntryPage, ResponseData, RESPONSE_OK};
use crate::routes::flash_text;
use rocket::request::FlashMessage;
use rocket::serde::json::Json;

#[derive(Debug, FromForm)]
pub struct Referral {
    #[field(name = "ref")]
    pub code: Option<String>,
}

/// Entry page. A `ref` query parameter is only echoed back for display.
#[get("/?<referral..>")]
pub async fn index(
    referral: Referral,
    flash: Option<FlashMessage<'_>>,
) -> Json<ResponseData<EntryPage>> {
    let referral_code = referral
        .code
        .map(|code| code.trim().to_owned())
        .filter(|code| !code.is_empty());
    let referral_notice = referral_code
        .as_ref()
        .map(|code| format!("Referred by: {}. Sign up to credit your friend!", code));
    Json(ResponseData::new(
        RESPONSE_OK,
        flash_text(&flash),
        Some(EntryPage {
            referral_code,
            referral_notice,
        }),
    ))
}
