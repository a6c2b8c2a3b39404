use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use crate::services::ThemeState;
use crate::web::forms::LoginForm;
use crate::web::handlers::public::layout;
use crate::web::helpers::{
    current_session, end_session, redirect, render, render_with_status, session_cookie,
};
use crate::web::security::{client_key, LOGIN_LIMIT};
use crate::web::state::AppState;
use crate::web::templates::LoginTemplate;

pub const ADMIN_PATH: &str = "/admin";

#[get("/login")]
pub async fn login_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
) -> HttpResponse {
    if current_session(&req, &state).is_some() {
        return redirect(ADMIN_PATH);
    }

    render(LoginTemplate {
        layout: layout(&req, &state, theme),
        email: String::new(),
        error: None,
    })
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    let email = form.email.trim().to_string();

    let failure = |status: StatusCode, error: String, email: String| {
        render_with_status(
            status,
            LoginTemplate {
                layout: layout(&req, &state, theme),
                email,
                error: Some(error),
            },
        )
    };

    if !state.rate_limiter.check(&client_key(&req, "login"), LOGIN_LIMIT) {
        log::warn!("login rate limit hit for {}", email);
        return failure(
            StatusCode::TOO_MANY_REQUESTS,
            "Too many login attempts. Please try again later.".to_string(),
            email,
        );
    }

    if email.is_empty() || form.password.is_empty() {
        return failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Email and password are required".to_string(),
            email,
        );
    }

    match state.api.sign_in(&email, &form.password).await {
        Ok(credentials) => {
            let session = state.sessions.create(&email, credentials);
            HttpResponse::SeeOther()
                .insert_header(("Location", ADMIN_PATH))
                .cookie(session_cookie(
                    &session.token.to_string(),
                    state.cookie_secure,
                ))
                .finish()
        }
        Err(e) => {
            log::warn!("sign-in rejected for {}: {}", email, e);
            let status = if e.is_unauthorized() {
                StatusCode::UNAUTHORIZED
            } else {
                StatusCode::OK
            };
            failure(status, e.user_message(), email)
        }
    }
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    match current_session(&req, &state) {
        Some(session) => end_session(&state, &session),
        None => redirect("/login"),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(logout);
}
