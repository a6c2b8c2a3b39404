use std::io::{Error, ErrorKind};
use std::sync::Arc;
use std::time::Duration;

use actix_files::Files;
use actix_web::web::{route, Data};
use actix_web::{middleware::Logger, App, HttpServer};
use tracing_subscriber::EnvFilter;

use softhouze::api::ApiClient;
use softhouze::config::Config;
use softhouze::services::{EmailRelay, SessionStore};
use softhouze::web::{self, security::RateLimiter, AppState, SecurityHeaders};

const PURGE_INTERVAL: Duration = Duration::from_secs(600);

fn startup_error(context: &str, err: impl std::fmt::Display) -> Error {
    Error::new(ErrorKind::InvalidInput, format!("{context}: {err}"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().map_err(|e| startup_error("configuration", e))?;

    let api = ApiClient::new(&config.api_base_url, config.api_timeout)
        .map_err(|e| startup_error("API client", e))?;
    let relay = EmailRelay::new(config.relay.clone(), config.api_timeout)
        .map_err(|e| startup_error("email relay", e))?;
    if !relay.is_configured() {
        log::warn!("email relay not configured; contact form submissions will fail");
    }

    let sessions = Arc::new(SessionStore::new(config.session_ttl));
    let state = Data::new(AppState {
        api: Arc::new(api),
        relay: Arc::new(relay),
        sessions: sessions.clone(),
        rate_limiter: Arc::new(RateLimiter::new()),
        cookie_secure: config.cookie_secure,
    });

    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = sessions.purge_expired();
            if purged > 0 {
                log::info!("purged {} expired admin sessions", purged);
            }
        }
    });

    log::info!(
        "listening on {} (API at {})",
        config.bind_addr,
        config.api_base_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .configure(web::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(route().to(web::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
