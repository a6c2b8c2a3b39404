use actix_web::HttpRequest;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How many requests a client may make inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub max_requests: usize,
    pub window: Duration,
}

/// 5 sign-in attempts per 5 minutes.
pub const LOGIN_LIMIT: RateLimit = RateLimit {
    max_requests: 5,
    window: Duration::from_secs(300),
};

/// 3 contact messages per 10 minutes.
pub const CONTACT_LIMIT: RateLimit = RateLimit {
    max_requests: 3,
    window: Duration::from_secs(600),
};

/// Simple in-memory rate limiter
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Records a request for `key`.
    /// Returns true if allowed, false if the limit is exceeded.
    pub fn check(&self, key: &str, limit: RateLimit) -> bool {
        self.check_at(key, limit, Instant::now())
    }

    fn check_at(&self, key: &str, limit: RateLimit, now: Instant) -> bool {
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = requests.entry(key.to_string()).or_default();

        // Remove old requests outside the window
        entry.retain(|&time| now.saturating_duration_since(time) < limit.window);

        if entry.len() >= limit.max_requests {
            return false;
        }

        entry.push(now);

        // Cleanup: remove empty entries to prevent unbounded memory growth
        requests.retain(|_, times| !times.is_empty());

        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rate-limit key for `scope` and the client's address.
pub fn client_key(req: &HttpRequest, scope: &str) -> String {
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    format!("{scope}:{client_ip}")
}

/// Accepts only local paths (`/blog`), never another origin.
pub fn safe_redirect_target(target: Option<&str>) -> &str {
    match target.map(str::trim) {
        Some(t) if t.starts_with('/') && !t.starts_with("//") && !t.contains('\\') => t,
        _ => "/",
    }
}
