use std::sync::Arc;

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use crate::services::{AdminSession, SESSION_COOKIE};
use crate::web::state::AppState;

pub const LOGIN_PATH: &str = "/login";

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub fn current_session(req: &HttpRequest, state: &AppState) -> Option<Arc<AdminSession>> {
    let cookie = req.cookie(SESSION_COOKIE)?;
    let token = cookie.value().trim();
    if token.is_empty() {
        return None;
    }
    state.sessions.get(token)
}

/// Admin route guard: a live server-side session or a redirect to sign-in.
pub fn require_session(
    req: &HttpRequest,
    state: &AppState,
) -> Result<Arc<AdminSession>, HttpResponse> {
    current_session(req, state).ok_or_else(|| {
        if is_htmx(req) {
            HttpResponse::Unauthorized()
                .insert_header(("HX-Redirect", LOGIN_PATH))
                .finish()
        } else {
            redirect(LOGIN_PATH)
        }
    })
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

pub fn session_cookie(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::ZERO)
        .finish()
}

/// Drops the session behind `session` and sends the browser to sign-in.
pub fn end_session(state: &AppState, session: &AdminSession) -> HttpResponse {
    if let Some(removed) = state.sessions.remove(&session.token.to_string()) {
        let mut panel = removed
            .panel
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        panel.detach_all();
    }

    HttpResponse::SeeOther()
        .insert_header(("Location", LOGIN_PATH))
        .cookie(expired_session_cookie(state.cookie_secure))
        .finish()
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_with_status(StatusCode::OK, t)
}

pub fn render_with_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("template render failed: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}
