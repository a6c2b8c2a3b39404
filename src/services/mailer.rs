use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::common::RelayError;
use crate::config::RelayConfig;
use crate::models::ContactMessage;

/// Hands contact form submissions to a transactional email service.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// REST client for the email relay (`POST /api/v1.0/email/send`).
#[derive(Clone, Debug)]
pub struct EmailRelay {
    http: Client,
    config: Option<RelayConfig>,
}

impl EmailRelay {
    pub fn new(config: Option<RelayConfig>, timeout: Duration) -> Result<Self, RelayError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: Client, config: Option<RelayConfig>) -> Self {
        Self { http, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl ContactRelay for EmailRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let config = self.config.as_ref().ok_or(RelayError::NotConfigured)?;
        let url = format!(
            "{}/api/v1.0/email/send",
            config.base_url.trim_end_matches('/')
        );

        let body = RelayRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: message,
        };

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if status.is_success() {
            log::info!("contact message from {} <{}> relayed", message.full_name(), message.email);
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected(status, text))
    }
}
