use std::collections::HashMap;

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::HttpRequest;

use crate::models::Theme;

pub const THEME_KEY: &str = "theme";

/// Somewhere small string preferences survive between visits.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&mut self, key: &str, value: &str);
}

/// Preferences kept in the visitor's browser as long-lived cookies.
///
/// Reads come from the request; writes are collected and must be attached
/// to the response with [`CookiePreferences::into_cookies`].
#[derive(Debug, Default)]
pub struct CookiePreferences {
    incoming: HashMap<String, String>,
    outgoing: Vec<Cookie<'static>>,
    secure: bool,
}

impl CookiePreferences {
    // Browsers cap cookie lifetime at 400 days.
    const MAX_AGE_DAYS: i64 = 400;

    pub fn from_request(req: &HttpRequest, secure: bool) -> Self {
        let incoming: HashMap<String, String> = req
            .cookies()
            .map(|jar| {
                jar.iter()
                    .map(|c| (c.name().to_string(), c.value().to_string()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            incoming,
            outgoing: Vec::new(),
            secure,
        }
    }

    pub fn into_cookies(self) -> Vec<Cookie<'static>> {
        self.outgoing
    }
}

impl PreferenceStore for CookiePreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.incoming.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.incoming.insert(key.to_string(), value.to_string());
        self.outgoing.retain(|c| c.name() != key);
        self.outgoing.push(
            Cookie::build(key.to_string(), value.to_string())
                .path("/")
                .secure(self.secure)
                .same_site(SameSite::Lax)
                .max_age(CookieDuration::days(Self::MAX_AGE_DAYS))
                .finish(),
        );
    }
}

/// Current colour scheme, read once per request and handed to every view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
}

impl ThemeState {
    /// Missing or unreadable preference means dark.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let theme = store
            .load(THEME_KEY)
            .and_then(|v| v.parse::<Theme>().ok())
            .unwrap_or_default();

        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flips the theme and persists the new value.
    pub fn toggle(&mut self, store: &mut impl PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        store.save(THEME_KEY, self.theme.as_str());
        self.theme
    }
}
