use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::services::{CookiePreferences, ThemeState};
use crate::web::forms::ThemeForm;
use crate::web::security::safe_redirect_target;
use crate::web::state::AppState;

#[post("/theme/toggle")]
pub async fn toggle_theme(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ThemeForm>,
) -> HttpResponse {
    let mut prefs = CookiePreferences::from_request(&req, state.cookie_secure);
    let mut theme = ThemeState::load(&prefs);
    let now = theme.toggle(&mut prefs);
    log::debug!("theme switched to {}", now);

    let mut resp = HttpResponse::SeeOther();
    resp.insert_header(("Location", safe_redirect_target(form.back.as_deref())));
    for cookie in prefs.into_cookies() {
        resp.cookie(cookie);
    }
    resp.finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(toggle_theme);
}
