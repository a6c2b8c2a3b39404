use std::time::Duration;

use crate::common::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_RELAY_URL: &str = "https://api.emailjs.com";

/// Identifiers the transactional email service needs to route a contact
/// message to the right template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub bind_addr: String,
    pub session_ttl: Duration,
    pub api_timeout: Duration,
    pub cookie_secure: bool,
    pub relay: Option<RelayConfig>,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a local `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` is the thin
    /// wrapper used at start-up.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let api_base_url = get("API_BASE_URL").ok_or(ConfigError::Missing("API_BASE_URL"))?;
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: "API_BASE_URL",
                value: api_base_url,
            });
        }

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let session_ttl_hours = parse_number("SESSION_TTL_HOURS", get("SESSION_TTL_HOURS"), 24)?;
        let api_timeout_secs = parse_number("API_TIMEOUT_SECS", get("API_TIMEOUT_SECS"), 15)?;

        let cookie_secure = match get("COOKIE_SECURE") {
            None => true,
            Some(v) => match v.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "COOKIE_SECURE",
                        value: v,
                    })
                }
            },
        };

        let relay = match (
            get("EMAILJS_SERVICE_ID"),
            get("EMAILJS_TEMPLATE_ID"),
            get("EMAILJS_PUBLIC_KEY"),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(RelayConfig {
                base_url: get("EMAIL_RELAY_URL").unwrap_or_else(|| DEFAULT_RELAY_URL.to_string()),
                service_id,
                template_id,
                public_key,
            }),
            _ => None,
        };

        Ok(Self {
            api_base_url,
            bind_addr,
            session_ttl: Duration::from_secs(session_ttl_hours * 3600),
            api_timeout: Duration::from_secs(api_timeout_secs),
            cookie_secure,
            relay,
        })
    }
}

fn parse_number(name: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => match v.parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::Invalid { name, value: v }),
        },
    }
}
