use reqwest::header::{HeaderMap, HeaderValue, SET_COOKIE};
use serde::{Deserialize, Serialize};

/// Session cookies handed out by the content API at sign-in.
///
/// Kept per admin session and replayed as a `Cookie` header, so two admins
/// signed in at once never share API credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCredentials {
    cookies: Vec<(String, String)>,
}

impl ApiCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects `name=value` pairs from every `Set-Cookie` header,
    /// ignoring attributes and removal cookies.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut creds = Self::new();
        for value in headers.get_all(SET_COOKIE) {
            if let Ok(raw) = value.to_str() {
                creds.absorb_set_cookie(raw);
            }
        }
        creds
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.set(name.to_string(), value.to_string());
        self
    }

    fn absorb_set_cookie(&mut self, raw: &str) {
        let pair = raw.split(';').next().unwrap_or_default();
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };

        let name = name.trim();
        let value = value.trim().trim_matches('"');
        if name.is_empty() {
            return;
        }

        if value.is_empty() {
            self.cookies.retain(|(n, _)| n != name);
        } else {
            self.set(name.to_string(), value.to_string());
        }
    }

    fn set(&mut self, name: String, value: String) {
        match self.cookies.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.cookies.push((name, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn cookie_header(&self) -> Option<HeaderValue> {
        if self.cookies.is_empty() {
            return None;
        }

        let joined = self
            .cookies
            .iter()
            .map(|(n, v)| format!("{n}={v}"))
            .collect::<Vec<_>>()
            .join("; ");

        HeaderValue::from_str(&joined).ok()
    }
}
