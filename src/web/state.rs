use std::sync::Arc;

use crate::api::PortfolioApi;
use crate::services::{ContactRelay, SessionStore};
use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn PortfolioApi>,
    pub relay: Arc<dyn ContactRelay>,
    pub sessions: Arc<SessionStore>,
    pub rate_limiter: Arc<RateLimiter>,
    pub cookie_secure: bool,
}
