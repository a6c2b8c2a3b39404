use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, Responder};

use crate::models::ContactMessage;
use crate::services::ThemeState;
use crate::web::handlers::public::layout;
use crate::web::helpers::{render, render_with_status};
use crate::web::security::{client_key, CONTACT_LIMIT};
use crate::web::state::AppState;
use crate::web::templates::ContactTemplate;

pub const SEND_FAILED: &str = "Failed to send message. Please try again later.";
pub const TOO_MANY_MESSAGES: &str = "Too many messages. Please try again later.";

#[get("/contact")]
pub async fn contact_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
) -> impl Responder {
    render(ContactTemplate {
        layout: layout(&req, &state, theme),
        form: ContactMessage::default(),
        sent: false,
        error: None,
    })
}

#[post("/contact")]
pub async fn contact_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
    form: web::Form<ContactMessage>,
) -> impl Responder {
    let message = form.into_inner();

    let failure = |status: StatusCode, error: &str, message: ContactMessage| {
        render_with_status(
            status,
            ContactTemplate {
                layout: layout(&req, &state, theme),
                form: message,
                sent: false,
                error: Some(error.to_string()),
            },
        )
    };

    if let Err(problem) = message.validate() {
        return failure(StatusCode::UNPROCESSABLE_ENTITY, problem, message);
    }

    if !state.rate_limiter.check(&client_key(&req, "contact"), CONTACT_LIMIT) {
        log::warn!("contact form rate limit hit");
        return failure(StatusCode::TOO_MANY_REQUESTS, TOO_MANY_MESSAGES, message);
    }

    match state.relay.send(&message).await {
        Ok(()) => render(ContactTemplate {
            layout: layout(&req, &state, theme),
            form: ContactMessage::default(),
            sent: true,
            error: None,
        }),
        Err(e) => {
            crate::log_err!("relay contact message", e);
            failure(StatusCode::BAD_GATEWAY, SEND_FAILED, message)
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(contact_form).service(contact_submit);
}
