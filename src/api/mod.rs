//! Client side of the remote content API.
//!
//! The site never stores posts or projects itself: every view asks the API
//! through [`PortfolioApi`], and [`ApiClient`] is the HTTP implementation.

mod client;
mod credentials;

pub use client::ApiClient;
pub use credentials::ApiCredentials;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::common::ApiResult;
use crate::models::{BlogPost, PostDraft, Project, ProjectDraft};

/// Path segment sent when an item carries no owner id. The browser client
/// used to interpolate a missing field, which the API received as the
/// literal string `undefined`.
pub const MISSING_OWNER: &str = "undefined";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Error body shape used by the API (`{"message": "..."}`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn list_posts(&self, creds: Option<&ApiCredentials>) -> ApiResult<Vec<BlogPost>>;

    async fn get_post(&self, id: &str) -> ApiResult<BlogPost>;

    async fn create_post(&self, creds: &ApiCredentials, draft: &PostDraft) -> ApiResult<()>;

    async fn update_post(&self, creds: &ApiCredentials, id: &str, draft: &PostDraft)
        -> ApiResult<()>;

    async fn delete_post(
        &self,
        creds: &ApiCredentials,
        id: &str,
        owner: Option<&str>,
    ) -> ApiResult<()>;

    async fn list_projects(&self, creds: Option<&ApiCredentials>) -> ApiResult<Vec<Project>>;

    async fn create_project(&self, creds: &ApiCredentials, draft: &ProjectDraft)
        -> ApiResult<()>;

    async fn update_project(
        &self,
        creds: &ApiCredentials,
        id: &str,
        owner: Option<&str>,
        draft: &ProjectDraft,
    ) -> ApiResult<()>;

    async fn delete_project(
        &self,
        creds: &ApiCredentials,
        id: &str,
        owner: Option<&str>,
    ) -> ApiResult<()>;

    /// Checks the credentials server-side and returns the API session.
    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<ApiCredentials>;
}
