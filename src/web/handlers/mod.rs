pub mod admin;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod portfolio;
pub mod public;
pub mod theme;

use actix_web::web;

/// Configure all routes. The not-found fallback is registered separately
/// as the app's default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    portfolio::configure(cfg);
    blog::configure(cfg);
    contact::configure(cfg);
    auth::configure(cfg);
    admin::configure(cfg);
    theme::configure(cfg);
}
