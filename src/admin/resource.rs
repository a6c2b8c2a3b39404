use async_trait::async_trait;

use super::form::{PostForm, ProjectForm};
use super::panel::AdminPanel;
use super::workflow::CrudWorkflow;
use crate::api::{ApiCredentials, PortfolioApi};
use crate::common::ApiResult;
use crate::models::{BlogPost, PostDraft, Project, ProjectDraft, ResourceKind};

/// An entity the admin panel can list, create, update and delete.
///
/// Each implementation maps the generic workflow onto its own API
/// endpoints and form type.
#[async_trait]
pub trait Resource: Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    type Form: Clone + Default + Send + for<'a> From<&'a Self>;
    type Draft: Send + Sync;

    fn id(&self) -> &str;

    fn owner_id(&self) -> Option<&str>;

    fn draft(form: &Self::Form, editing: Option<&Self>, today: chrono::NaiveDate) -> Self::Draft;

    fn workflow(panel: &AdminPanel) -> &CrudWorkflow<Self>;

    fn workflow_mut(panel: &mut AdminPanel) -> &mut CrudWorkflow<Self>;

    async fn list(api: &dyn PortfolioApi, creds: &ApiCredentials) -> ApiResult<Vec<Self>>;

    async fn create(
        api: &dyn PortfolioApi,
        creds: &ApiCredentials,
        draft: &Self::Draft,
    ) -> ApiResult<()>;

    async fn update(
        api: &dyn PortfolioApi,
        creds: &ApiCredentials,
        existing: &Self,
        draft: &Self::Draft,
    ) -> ApiResult<()>;

    async fn delete(api: &dyn PortfolioApi, creds: &ApiCredentials, existing: &Self)
        -> ApiResult<()>;

    fn created_message() -> &'static str;

    fn updated_message() -> &'static str;

    fn deleted_message() -> &'static str;
}

#[async_trait]
impl Resource for BlogPost {
    const KIND: ResourceKind = ResourceKind::Post;

    type Form = PostForm;
    type Draft = PostDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    fn draft(form: &PostForm, editing: Option<&Self>, today: chrono::NaiveDate) -> PostDraft {
        form.to_draft(editing, today)
    }

    fn workflow(panel: &AdminPanel) -> &CrudWorkflow<Self> {
        &panel.posts
    }

    fn workflow_mut(panel: &mut AdminPanel) -> &mut CrudWorkflow<Self> {
        &mut panel.posts
    }

    async fn list(api: &dyn PortfolioApi, creds: &ApiCredentials) -> ApiResult<Vec<Self>> {
        api.list_posts(Some(creds)).await
    }

    async fn create(
        api: &dyn PortfolioApi,
        creds: &ApiCredentials,
        draft: &PostDraft,
    ) -> ApiResult<()> {
        api.create_post(creds, draft).await
    }

    async fn update(
        api: &dyn PortfolioApi,
        creds: &ApiCredentials,
        existing: &Self,
        draft: &PostDraft,
    ) -> ApiResult<()> {
        api.update_post(creds, &existing.id, draft).await
    }

    async fn delete(
        api: &dyn PortfolioApi,
        creds: &ApiCredentials,
        existing: &Self,
    ) -> ApiResult<()> {
        api.delete_post(creds, &existing.id, existing.owner_id()).await
    }

    fn created_message() -> &'static str {
        "Blog post created!"
    }

    fn updated_message() -> &'static str {
        "Blog post updated!"
    }

    fn deleted_message() -> &'static str {
        "Blog post deleted!"
    }
}

#[async_trait]
impl Resource for Project {
    const KIND: ResourceKind = ResourceKind::Project;

    type Form = ProjectForm;
    type Draft = ProjectDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    fn draft(form: &ProjectForm, editing: Option<&Self>, today: chrono::NaiveDate) -> ProjectDraft {
        form.to_draft(editing, today)
    }

    fn workflow(panel: &AdminPanel) -> &CrudWorkflow<Self> {
        &panel.projects
    }

    fn workflow_mut(panel: &mut AdminPanel) -> &mut CrudWorkflow<Self> {
        &mut panel.projects
    }

    async fn list(api: &dyn PortfolioApi, creds: &ApiCredentials) -> ApiResult<Vec<Self>> {
        api.list_projects(Some(creds)).await
    }

    async fn create(
        api: &dyn PortfolioApi,
        creds: &ApiCredentials,
        draft: &ProjectDraft,
    ) -> ApiResult<()> {
        api.create_project(creds, draft).await
    }

    async fn update(
        api: &dyn PortfolioApi,
        creds: &ApiCredentials,
        existing: &Self,
        draft: &ProjectDraft,
    ) -> ApiResult<()> {
        api.update_project(creds, &existing.id, existing.owner_id(), draft)
            .await
    }

    async fn delete(
        api: &dyn PortfolioApi,
        creds: &ApiCredentials,
        existing: &Self,
    ) -> ApiResult<()> {
        api.delete_project(creds, &existing.id, existing.owner_id())
            .await
    }

    fn created_message() -> &'static str {
        "Project created!"
    }

    fn updated_message() -> &'static str {
        "Project updated!"
    }

    fn deleted_message() -> &'static str {
        "Project deleted!"
    }
}
