use std::convert::Infallible;

use rocket::{
    request::{FromRequest, Outcome},
    Request,
};

use crate::models::SpeedUnit;

/// Cookie set by the settings page when the reader prefers CPM.
pub const SPEED_COOKIE: &str = "useCPM";

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SpeedUnit {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.cookies().get(SPEED_COOKIE) {
            Some(cookie) if cookie.value() == "1" => Outcome::Success(SpeedUnit::Cpm),
            _ => Outcome::Success(SpeedUnit::Wpm),
        }
    }
}
