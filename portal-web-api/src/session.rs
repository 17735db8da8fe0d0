use rocket::http::{Cookie, CookieJar};
use rocket::request::{FromRequest, Outcome, Request};
use std::convert::Infallible;
use strum_macros::{Display, EnumString};

pub const IDENTITY_COOKIE: &str = "identity_id";
pub const ROLE_COOKIE: &str = "user_role";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Student,
    College,
}

/// Per-request view of the session cookies. Both values are read from
/// private cookies, so a tampered cookie reads as absent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub identity_id: Option<i32>,
    pub role: Option<Role>,
}

impl Session {
    /// Identity id, but only when the session was established for `role`.
    pub fn identity_for(&self, role: Role) -> Option<i32> {
        match (self.identity_id, self.role) {
            (Some(identity_id), Some(session_role)) if session_role == role => Some(identity_id),
            _ => None,
        }
    }

    pub fn from_cookies(cookies: &CookieJar<'_>) -> Session {
        Session {
            identity_id: cookies
                .get_private(IDENTITY_COOKIE)
                .and_then(|cookie| cookie.value().parse::<i32>().ok()),
            role: cookies
                .get_private(ROLE_COOKIE)
                .and_then(|cookie| cookie.value().parse::<Role>().ok()),
        }
    }

    pub fn establish(cookies: &CookieJar<'_>, identity_id: i32, role: Role) {
        cookies.add_private(Cookie::new(IDENTITY_COOKIE, identity_id.to_string()));
        cookies.add_private(Cookie::new(ROLE_COOKIE, role.to_string()));
    }

    pub fn clear(cookies: &CookieJar<'_>) {
        cookies.remove_private(Cookie::from(IDENTITY_COOKIE));
        cookies.remove_private(Cookie::from(ROLE_COOKIE));
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = Infallible;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(Session::from_cookies(req.cookies()))
    }
}
