use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::admin::AdminPanel;
use crate::api::ApiCredentials;

pub const SESSION_COOKIE: &str = "sh_session";

/// A signed-in administrator.
///
/// The browser only holds the opaque token; the API credentials and the
/// admin screen state stay on the server.
#[derive(Debug)]
pub struct AdminSession {
    pub token: Uuid,
    pub email: String,
    pub credentials: ApiCredentials,
    pub panel: Mutex<AdminPanel>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Server-side registry backing the admin route guard.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<AdminSession>>>,
    ttl: TimeDelta,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: TimeDelta::from_std(ttl).unwrap_or_else(|_| TimeDelta::hours(24)),
        }
    }

    /// Registers a session after the API accepted the credentials.
    pub fn create(&self, email: &str, credentials: ApiCredentials) -> Arc<AdminSession> {
        let now = Utc::now();
        let session = Arc::new(AdminSession {
            token: Uuid::new_v4(),
            email: email.to_string(),
            credentials,
            panel: Mutex::new(AdminPanel::new()),
            created_at: now,
            expires_at: now + self.ttl,
        });

        self.sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(session.token, session.clone());

        log::info!("admin session opened for {}", email);
        session
    }

    /// Looks up a token from the session cookie. Unknown, malformed and
    /// expired tokens all yield `None`; expired ones are dropped.
    pub fn get(&self, token: &str) -> Option<Arc<AdminSession>> {
        let token = Uuid::parse_str(token.trim()).ok()?;
        let session = self
            .sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&token)
            .cloned()?;

        if session.is_expired(Utc::now()) {
            self.remove(&token.to_string());
            return None;
        }

        Some(session)
    }

    pub fn remove(&self, token: &str) -> Option<Arc<AdminSession>> {
        let token = Uuid::parse_str(token.trim()).ok()?;
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&token);

        if let Some(session) = &removed {
            log::info!("admin session closed for {}", session.email);
        }
        removed
    }

    /// Drops every expired session; returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_session_is_found_by_token() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let session = store.create("admin@example.com", ApiCredentials::new());

        let found = store.get(&session.token.to_string()).unwrap();
        assert_eq!(found.email, "admin@example.com");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_and_malformed_tokens_are_rejected() {
        let store = SessionStore::new(Duration::from_secs(3600));
        store.create("admin@example.com", ApiCredentials::new());

        assert!(store.get("true").is_none());
        assert!(store.get(&Uuid::new_v4().to_string()).is_none());
    }

    #[test]
    fn expired_session_is_evicted() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let session = store.create("admin@example.com", ApiCredentials::new());
        let token = session.token;
        drop(session);

        {
            let mut sessions = store.sessions.write().unwrap();
            let live = sessions.get(&token).unwrap();
            let expired = AdminSession {
                token,
                email: live.email.clone(),
                credentials: ApiCredentials::new(),
                panel: Mutex::new(AdminPanel::new()),
                created_at: live.created_at,
                expires_at: Utc::now() - TimeDelta::seconds(1),
            };
            sessions.insert(token, Arc::new(expired));
        }

        assert!(store.get(&token.to_string()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn remove_and_purge() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let a = store.create("a@example.com", ApiCredentials::new());
        store.create("b@example.com", ApiCredentials::new());

        assert!(store.remove(&a.token.to_string()).is_some());
        assert!(store.get(&a.token.to_string()).is_none());
        assert_eq!(store.purge_expired(), 0);
        assert_eq!(store.len(), 1);
    }
}
