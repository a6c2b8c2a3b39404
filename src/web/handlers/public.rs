use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use crate::services::ThemeState;
use crate::web::content::{
    FEATURES, MILESTONES, PROCESS, SERVICES, SKILLS, TEAM, TESTIMONIALS, VALUES,
};
use crate::web::helpers::{current_session, render, render_with_status};
use crate::web::state::AppState;
use crate::web::templates::{AboutTemplate, HomeTemplate, Layout, NotFoundTemplate};

pub(crate) fn layout(req: &HttpRequest, state: &AppState, theme: ThemeState) -> Layout {
    let signed_in = current_session(req, state).is_some();
    Layout::new(theme, req, signed_in)
}

#[get("/")]
pub async fn home(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
) -> impl Responder {
    render(HomeTemplate {
        layout: layout(&req, &state, theme),
        features: FEATURES,
        services: SERVICES,
        process: PROCESS,
        testimonials: TESTIMONIALS,
    })
}

#[get("/about")]
pub async fn about(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
) -> impl Responder {
    render(AboutTemplate {
        layout: layout(&req, &state, theme),
        values: VALUES,
        skills: SKILLS,
        team: TEAM,
        milestones: MILESTONES,
    })
}

pub fn not_found_page(
    req: &HttpRequest,
    state: &AppState,
    theme: ThemeState,
    message: &str,
) -> HttpResponse {
    render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            layout: layout(req, state, theme),
            message: message.to_string(),
        },
    )
}

/// Fallback for every unmatched path.
pub async fn not_found(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
) -> HttpResponse {
    not_found_page(&req, &state, theme, "The page you are looking for does not exist.")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(about);
}
