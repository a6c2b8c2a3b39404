use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiCredentials, ApiMessage, PortfolioApi, SignInRequest, MISSING_OWNER};
use crate::common::{ApiError, ApiResult};
use crate::models::{BlogPost, PostDraft, PostEnvelope, PostList, Project, ProjectDraft};

/// HTTP implementation of [`PortfolioApi`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for (i, segment) in segments.iter().enumerate() {
            url.push('/');
            // Leading segments are fixed route parts; the rest are ids.
            if i < 3 {
                url.push_str(segment);
            } else {
                url.push_str(&urlencoding::encode(segment));
            }
        }
        url
    }

    fn request(&self, method: Method, url: &str, creds: Option<&ApiCredentials>) -> RequestBuilder {
        log::debug!("{} {}", method, url);

        let mut req = self.http.request(method, url);
        if let Some(cookie) = creds.and_then(ApiCredentials::cookie_header) {
            req = req.header(COOKIE, cookie);
        }
        req
    }

    /// Sends the request and decodes a JSON body.
    /// Non-success statuses become [`ApiError::Status`] carrying the
    /// server's `message`, or `fallback` when the body has none.
    async fn fetch<R: DeserializeOwned>(&self, req: RequestBuilder, fallback: &str) -> ApiResult<R> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(status_error(status, &body, fallback));
        }

        serde_json::from_slice::<R>(&body).map_err(|e| ApiError::Decode(format!("{fallback}: {e}")))
    }

    /// Like [`ApiClient::fetch`] for calls whose success body is irrelevant.
    async fn execute(&self, req: RequestBuilder, fallback: &str) -> ApiResult<()> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(status_error(status, &body, fallback))
    }

    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        creds: &ApiCredentials,
        body: &T,
        fallback: &str,
    ) -> ApiResult<()> {
        let req = self.request(method, url, Some(creds)).json(body);
        self.execute(req, fallback).await.inspect_err(|e| {
            log::warn!("{}: {}", url, e);
        })
    }
}

fn status_error(status: StatusCode, body: &[u8], fallback: &str) -> ApiError {
    let message = serde_json::from_slice::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());

    ApiError::status(status, message)
}

#[async_trait]
impl PortfolioApi for ApiClient {
    async fn list_posts(&self, creds: Option<&ApiCredentials>) -> ApiResult<Vec<BlogPost>> {
        let url = self.url(&["api", "post", "getposts"]);
        let req = self.request(Method::GET, &url, creds);
        let list: PostList = self.fetch(req, "Failed to fetch blog posts").await?;
        Ok(list.posts)
    }

    async fn get_post(&self, id: &str) -> ApiResult<BlogPost> {
        let url = self.url(&["api", "post", "getpost", id]);
        let req = self.request(Method::GET, &url, None);
        let envelope: PostEnvelope = self.fetch(req, "Failed to fetch blog post").await?;

        envelope
            .post
            .ok_or_else(|| ApiError::status(StatusCode::NOT_FOUND, "Blog post not found"))
    }

    async fn create_post(&self, creds: &ApiCredentials, draft: &PostDraft) -> ApiResult<()> {
        let url = self.url(&["api", "post", "create"]);
        self.send_json(Method::POST, &url, creds, draft, "Failed to save blog post")
            .await
    }

    async fn update_post(
        &self,
        creds: &ApiCredentials,
        id: &str,
        draft: &PostDraft,
    ) -> ApiResult<()> {
        let url = self.url(&["api", "post", "updatepost", id]);
        self.send_json(Method::PUT, &url, creds, draft, "Failed to save blog post")
            .await
    }

    async fn delete_post(
        &self,
        creds: &ApiCredentials,
        id: &str,
        owner: Option<&str>,
    ) -> ApiResult<()> {
        let owner = owner.unwrap_or(MISSING_OWNER);
        let url = self.url(&["api", "post", "deletepost", id, owner]);
        let req = self.request(Method::DELETE, &url, Some(creds));
        self.execute(req, "Failed to delete blog post").await
    }

    async fn list_projects(&self, creds: Option<&ApiCredentials>) -> ApiResult<Vec<Project>> {
        let url = self.url(&["api", "project", "getprojects"]);
        let req = self.request(Method::GET, &url, creds);
        let projects: Option<Vec<Project>> = self.fetch(req, "Failed to fetch projects").await?;
        Ok(projects.unwrap_or_default())
    }

    async fn create_project(
        &self,
        creds: &ApiCredentials,
        draft: &ProjectDraft,
    ) -> ApiResult<()> {
        let url = self.url(&["api", "project", "create"]);
        self.send_json(Method::POST, &url, creds, draft, "Failed to save project")
            .await
    }

    async fn update_project(
        &self,
        creds: &ApiCredentials,
        id: &str,
        owner: Option<&str>,
        draft: &ProjectDraft,
    ) -> ApiResult<()> {
        let owner = owner.unwrap_or(MISSING_OWNER);
        let url = self.url(&["api", "project", "updateproject", id, owner]);
        self.send_json(Method::PUT, &url, creds, draft, "Failed to save project")
            .await
    }

    async fn delete_project(
        &self,
        creds: &ApiCredentials,
        id: &str,
        owner: Option<&str>,
    ) -> ApiResult<()> {
        let owner = owner.unwrap_or(MISSING_OWNER);
        let url = self.url(&["api", "project", "deleteproject", id, owner]);
        let req = self.request(Method::DELETE, &url, Some(creds));
        self.execute(req, "Failed to delete project").await
    }

    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<ApiCredentials> {
        let url = self.url(&["api", "auth", "signin"]);
        let body = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.request(Method::POST, &url, None).json(&body).send().await?;
        let status = response.status();
        let creds = ApiCredentials::from_headers(response.headers());

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(status_error(status, &body, "Login failed"));
        }

        if creds.is_empty() {
            log::warn!("sign-in for {} succeeded without a session cookie", email);
        }

        Ok(creds)
    }
}
