#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use softhouze::api::{ApiCredentials, PortfolioApi};
use softhouze::common::{ApiError, ApiResult, RelayError};
use softhouze::models::*;
use softhouze::services::{ContactRelay, SessionStore};
use softhouze::web::security::RateLimiter;
use softhouze::web::AppState;

pub const ADMIN_EMAIL: &str = "admin@softhouze.com";
pub const ADMIN_PASSWORD: &str = "correct horse";
pub const API_COOKIE: (&str, &str) = ("token", "api-session-1");

pub fn get_seed_post(id: &str, title: &str, tags: &[&str]) -> BlogPost {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "title": title,
        "excerpt": format!("About {title}"),
        "content": format!("{title} first paragraph.\n\n{title} second paragraph."),
        "author": "Sarah Chen",
        "date": "2024-05-01",
        "readTime": "4 min read",
        "tags": tags,
        "image": format!("https://img.example.com/{id}.png"),
        "featured": false,
        "category": "engineering",
        "userId": "owner-1",
        "createdAt": "2024-05-01T09:30:00.000Z"
    }))
    .unwrap()
}

pub fn get_seed_project(id: &str, title: &str, owner: Option<&str>) -> Project {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "title": title,
        "description": format!("{title} description"),
        "thumbnail": format!("https://img.example.com/{id}.png"),
        "liveUrl": format!("https://{id}.example.com"),
        "githubUrl": null,
        "technologies": ["Rust", "Actix"],
        "date": "2023-11-20",
        "userId": owner
    }))
    .unwrap()
}

pub fn get_seed_posts() -> Vec<BlogPost> {
    vec![
        get_seed_post("p1", "Shipping Rust services", &["Rust", "Backend"]),
        get_seed_post("p2", "Kubernetes for small teams", &["Cloud"]),
    ]
}

pub fn get_seed_projects() -> Vec<Project> {
    vec![
        get_seed_project("j1", "Retail dashboard", Some("owner-1")),
        get_seed_project("j2", "Fleet tracker", None),
    ]
}

/// In-memory stand-in for the remote content API.
///
/// Mutations need non-empty credentials; `revoke` makes every
/// authenticated call answer 401, `fail_with` makes every call fail and
/// `stall_writes` makes mutations hang forever.
#[derive(Default)]
pub struct FakeApi {
    pub posts: Mutex<Vec<BlogPost>>,
    pub projects: Mutex<Vec<Project>>,
    pub post_bodies: Mutex<Vec<PostDraft>>,
    pub project_bodies: Mutex<Vec<ProjectDraft>>,
    pub delete_owners: Mutex<Vec<Option<String>>>,
    failure: Mutex<Option<(StatusCode, String)>>,
    revoked: AtomicBool,
    stalled: AtomicBool,
    next_id: AtomicU64,
}

impl FakeApi {
    pub fn seeded() -> Self {
        let api = Self::default();
        *api.posts.lock().unwrap() = get_seed_posts();
        *api.projects.lock().unwrap() = get_seed_projects();
        api
    }

    pub fn fail_with(&self, status: StatusCode, message: &str) {
        *self.failure.lock().unwrap() = Some((status, message.to_string()));
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn revoke(&self) {
        self.revoked.store(true, Ordering::SeqCst);
    }

    pub fn stall_writes(&self, stalled: bool) {
        self.stalled.store(stalled, Ordering::SeqCst);
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn project_count(&self) -> usize {
        self.projects.lock().unwrap().len()
    }

    fn check(&self, creds: Option<&ApiCredentials>) -> ApiResult<()> {
        if let Some((status, message)) = self.failure.lock().unwrap().clone() {
            return Err(ApiError::status(status, message));
        }
        if let Some(creds) = creds {
            if creds.is_empty() || self.revoked.load(Ordering::SeqCst) {
                return Err(ApiError::status(StatusCode::UNAUTHORIZED, "Unauthorized"));
            }
        }
        Ok(())
    }

    async fn write_gate(&self) {
        if self.stalled.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
    }

    fn new_id(&self, prefix: &str) -> String {
        format!("{prefix}-new-{}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

fn post_from_draft(id: String, draft: &PostDraft) -> BlogPost {
    let mut post = get_seed_post(&id, &draft.title, &[]);
    post.excerpt = draft.excerpt.clone();
    post.content = draft.content.clone();
    post.author = draft.author.clone();
    post.date = draft.date.clone();
    post.read_time = draft.read_time.clone();
    post.tags = draft.tags.clone();
    post.image = Some(draft.image.clone());
    post.category = Some(draft.category.clone());
    post.featured = draft.featured;
    post
}

fn project_from_draft(id: String, owner: Option<String>, draft: &ProjectDraft) -> Project {
    let mut project = get_seed_project(&id, &draft.title, None);
    project.description = draft.description.clone();
    project.thumbnail = draft.thumbnail.clone();
    project.live_url = draft.live_url.clone();
    project.github_url = Some(draft.github_url.clone()).filter(|g| !g.is_empty());
    project.technologies = draft.technologies.clone();
    project.date = draft.date.clone();
    project.user_id = owner;
    project
}

fn not_found(what: &str) -> ApiError {
    ApiError::status(StatusCode::NOT_FOUND, format!("{what} not found"))
}

#[async_trait]
impl PortfolioApi for FakeApi {
    async fn list_posts(&self, creds: Option<&ApiCredentials>) -> ApiResult<Vec<BlogPost>> {
        self.check(creds)?;
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn get_post(&self, id: &str) -> ApiResult<BlogPost> {
        self.check(None)?;
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found("Blog post"))
    }

    async fn create_post(&self, creds: &ApiCredentials, draft: &PostDraft) -> ApiResult<()> {
        self.write_gate().await;
        self.check(Some(creds))?;
        self.post_bodies.lock().unwrap().push(draft.clone());
        let post = post_from_draft(self.new_id("post"), draft);
        self.posts.lock().unwrap().push(post);
        Ok(())
    }

    async fn update_post(
        &self,
        creds: &ApiCredentials,
        id: &str,
        draft: &PostDraft,
    ) -> ApiResult<()> {
        self.write_gate().await;
        self.check(Some(creds))?;
        self.post_bodies.lock().unwrap().push(draft.clone());
        let mut posts = self.posts.lock().unwrap();
        let slot = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Blog post"))?;
        *slot = post_from_draft(id.to_string(), draft);
        Ok(())
    }

    async fn delete_post(
        &self,
        creds: &ApiCredentials,
        id: &str,
        owner: Option<&str>,
    ) -> ApiResult<()> {
        self.write_gate().await;
        self.check(Some(creds))?;
        self.delete_owners
            .lock()
            .unwrap()
            .push(owner.map(str::to_string));
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(not_found("Blog post"));
        }
        Ok(())
    }

    async fn list_projects(&self, creds: Option<&ApiCredentials>) -> ApiResult<Vec<Project>> {
        self.check(creds)?;
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn create_project(&self, creds: &ApiCredentials, draft: &ProjectDraft) -> ApiResult<()> {
        self.write_gate().await;
        self.check(Some(creds))?;
        self.project_bodies.lock().unwrap().push(draft.clone());
        let project = project_from_draft(self.new_id("project"), Some("owner-1".into()), draft);
        self.projects.lock().unwrap().push(project);
        Ok(())
    }

    async fn update_project(
        &self,
        creds: &ApiCredentials,
        id: &str,
        owner: Option<&str>,
        draft: &ProjectDraft,
    ) -> ApiResult<()> {
        self.write_gate().await;
        self.check(Some(creds))?;
        self.project_bodies.lock().unwrap().push(draft.clone());
        let mut projects = self.projects.lock().unwrap();
        let slot = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Project"))?;
        *slot = project_from_draft(id.to_string(), owner.map(str::to_string), draft);
        Ok(())
    }

    async fn delete_project(
        &self,
        creds: &ApiCredentials,
        id: &str,
        owner: Option<&str>,
    ) -> ApiResult<()> {
        self.write_gate().await;
        self.check(Some(creds))?;
        self.delete_owners
            .lock()
            .unwrap()
            .push(owner.map(str::to_string));
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(not_found("Project"));
        }
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> ApiResult<ApiCredentials> {
        self.check(None)?;
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            Ok(ApiCredentials::new().with_cookie(API_COOKIE.0, API_COOKIE.1))
        } else {
            Err(ApiError::status(
                StatusCode::UNAUTHORIZED,
                "Invalid email or password",
            ))
        }
    }
}

/// Records contact messages instead of emailing them.
#[derive(Default)]
pub struct FakeRelay {
    pub sent: Mutex<Vec<ContactMessage>>,
    pub broken: AtomicBool,
}

#[async_trait]
impl ContactRelay for FakeRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(RelayError::NotConfigured);
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub fn admin_credentials() -> ApiCredentials {
    ApiCredentials::new().with_cookie(API_COOKIE.0, API_COOKIE.1)
}

pub fn test_state(api: Arc<FakeApi>, relay: Arc<FakeRelay>) -> AppState {
    AppState {
        api,
        relay,
        sessions: Arc::new(SessionStore::new(Duration::from_secs(3600))),
        rate_limiter: Arc::new(RateLimiter::new()),
        cookie_secure: false,
    }
}

/// Builds the full application around `state`, as `main` does.
#[macro_export]
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .wrap(softhouze::web::SecurityHeaders)
                .configure(softhouze::web::configure)
                .default_service(actix_web::web::route().to(softhouze::web::not_found)),
        )
        .await
    };
}
