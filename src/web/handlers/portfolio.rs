use actix_web::{get, web, HttpRequest, Responder};

use crate::services::ThemeState;
use crate::web::handlers::public::layout;
use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::PortfolioTemplate;

#[get("/portfolio")]
pub async fn portfolio(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
) -> impl Responder {
    let (projects, error) = match state.api.list_projects(None).await {
        Ok(projects) => (projects, None),
        Err(e) => {
            crate::log_err!("list projects", e);
            (Vec::new(), Some(e.user_message()))
        }
    };

    render(PortfolioTemplate {
        layout: layout(&req, &state, theme),
        projects,
        error,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(portfolio);
}
