use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::services::{CookiePreferences, ThemeState};

/// Reads the visitor's colour scheme from the `theme` cookie.
impl FromRequest for ThemeState {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // `secure` only matters for cookies written back, never for reads.
        let prefs = CookiePreferences::from_request(req, false);
        ready(Ok(ThemeState::load(&prefs)))
    }
}
