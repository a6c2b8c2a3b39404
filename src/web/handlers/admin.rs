use actix_web::{get, post, web, HttpRequest, HttpResponse};
use chrono::Local;
use futures_util::future::join;

use crate::admin::driver::{self, lock};
use crate::admin::{AdminError, AdminPanel, PostForm, ProjectForm, Resource};
use crate::common::WorkflowError;
use crate::models::{BlogPost, Project, ResourceKind};
use crate::services::{AdminSession, ThemeState};
use crate::web::forms::AdminQuery;
use crate::web::handlers::public::{layout, not_found_page};
use crate::web::helpers::{end_session, redirect, render, require_session};
use crate::web::state::AppState;
use crate::web::templates::{AdminTab, AdminTemplate, FormView, PostRow, ProjectRow};

const EXCERPT_CHARS: usize = 120;

fn tab_path(kind: ResourceKind) -> String {
    format!("/admin?tab={}", kind.path_segment())
}

fn post_row(post: &BlogPost) -> PostRow {
    PostRow {
        id: post.id.clone(),
        title: post.title.clone(),
        excerpt: post.short_excerpt(EXCERPT_CHARS),
        image: Some(post.image_url().to_string()).filter(|s| !s.is_empty()),
        author: post.author.clone(),
        created: post.created_label(),
        tags: post.tags.clone(),
        featured: post.featured,
    }
}

fn project_row(project: &Project) -> ProjectRow {
    ProjectRow {
        id: project.id.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        thumbnail: project.thumbnail.clone(),
        live_url: project.live_link().map(str::to_string),
        github_url: project.github().map(str::to_string),
        technologies: project.technologies.clone(),
    }
}

fn admin_tab<R, Row>(panel: &AdminPanel, row: fn(&R) -> Row) -> AdminTab<Row, R::Form>
where
    R: Resource,
{
    let workflow = R::workflow(panel);
    let form = panel.is_editing(R::KIND).then(|| {
        let label = R::KIND.label();
        let (heading, submit_label) = match panel.editing(R::KIND) {
            Some(item) => (format!("Edit {label}: {}", item.title()), "Update"),
            None => (format!("Add New {label}"), "Create"),
        };
        FormView {
            heading,
            submit_label,
            form: workflow.form().clone(),
        }
    });

    AdminTab {
        loading: workflow.is_loading(),
        error: workflow.error().map(str::to_string),
        rows: workflow.items().iter().map(row).collect(),
        form,
    }
}

fn admin_page(
    req: &HttpRequest,
    state: &AppState,
    theme: ThemeState,
    session: &AdminSession,
) -> HttpResponse {
    let layout = layout(req, state, theme);
    let panel = lock(&session.panel);
    let active = panel.active();

    let success = match active {
        ResourceKind::Post => panel.posts.success_message(),
        ResourceKind::Project => panel.projects.success_message(),
    }
    .map(str::to_string);

    render(AdminTemplate {
        layout,
        email: session.email.clone(),
        tab: active.path_segment(),
        success,
        posts: admin_tab::<BlogPost, _>(&panel, post_row),
        projects: admin_tab::<Project, _>(&panel, project_row),
    })
}

/// Re-reads `R` unless a request for it is already running.
async fn reload<R: Resource>(state: &AppState, session: &AdminSession) -> Result<(), AdminError> {
    if R::workflow(&lock(&session.panel)).is_loading() {
        return Ok(());
    }
    driver::refresh::<R>(state.api.as_ref(), &session.credentials, &session.panel).await
}

/// Common tail of every admin action: an expired API session signs the
/// admin out, everything else is reported on the admin page.
fn finish_action(
    state: &AppState,
    session: &AdminSession,
    kind: ResourceKind,
    result: Result<(), AdminError>,
) -> HttpResponse {
    match result {
        Err(e) if e.is_unauthorized() => {
            log::warn!("API rejected session of {}; signing out", session.email);
            end_session(state, session)
        }
        Err(AdminError::Workflow(e)) => {
            log::warn!("{} action ignored: {}", kind, e);
            settle_and_redirect(session, kind)
        }
        _ => settle_and_redirect(session, kind),
    }
}

fn settle_and_redirect(session: &AdminSession, kind: ResourceKind) -> HttpResponse {
    let mut panel = lock(&session.panel);
    panel.select(kind);
    panel.mark_settled();
    redirect(&tab_path(kind))
}

fn parse_kind(raw: &str) -> Option<ResourceKind> {
    raw.parse::<ResourceKind>().ok()
}

#[get("/admin")]
pub async fn dashboard(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
    query: web::Query<AdminQuery>,
) -> HttpResponse {
    let session = match require_session(&req, &state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let settled = {
        let mut panel = lock(&session.panel);
        if let Some(kind) = query.tab.as_deref().and_then(parse_kind) {
            panel.select(kind);
        }
        panel.take_settled()
    };

    if !settled {
        let (posts, projects) = join(
            reload::<BlogPost>(&state, &session),
            reload::<Project>(&state, &session),
        )
        .await;

        let unauthorized = matches!(&posts, Err(e) if e.is_unauthorized())
            || matches!(&projects, Err(e) if e.is_unauthorized());
        if unauthorized {
            log::warn!("API rejected session of {}; signing out", session.email);
            return end_session(&state, &session);
        }
    }

    admin_page(&req, &state, theme, &session)
}

fn open_form(
    session: &AdminSession,
    kind: ResourceKind,
    open: impl FnOnce(&mut AdminPanel) -> Result<(), WorkflowError>,
) -> Result<HttpResponse, WorkflowError> {
    let mut panel = lock(&session.panel);
    open(&mut panel)?;
    panel.select(kind);
    panel.mark_settled();
    Ok(redirect(&tab_path(kind)))
}

#[get("/admin/{kind}/new")]
pub async fn new_item(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
    path: web::Path<String>,
) -> HttpResponse {
    let session = match require_session(&req, &state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let Some(kind) = parse_kind(&path) else {
        return not_found_page(&req, &state, theme, "Unknown content type.");
    };

    let opened = open_form(&session, kind, |panel| match kind {
        ResourceKind::Post => panel.posts.start_create(),
        ResourceKind::Project => panel.projects.start_create(),
    });

    opened.unwrap_or_else(|e| {
        log::warn!("cannot open {} form: {}", kind, e);
        redirect(&tab_path(kind))
    })
}

#[get("/admin/{kind}/{id}/edit")]
pub async fn edit_item(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let session = match require_session(&req, &state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let (kind, id) = path.into_inner();
    let Some(kind) = parse_kind(&kind) else {
        return not_found_page(&req, &state, theme, "Unknown content type.");
    };

    let opened = open_form(&session, kind, |panel| match kind {
        ResourceKind::Post => panel.posts.start_edit(&id),
        ResourceKind::Project => panel.projects.start_edit(&id),
    });

    match opened {
        Ok(resp) => resp,
        Err(WorkflowError::NotFound(what)) => {
            log::warn!("edit requested for missing {}", what);
            let message = format!("No {} with id {id}.", kind.label());
            not_found_page(&req, &state, theme, &message)
        }
        Err(e) => {
            log::warn!("cannot open {} form: {}", kind, e);
            redirect(&tab_path(kind))
        }
    }
}

#[post("/admin/{kind}/cancel")]
pub async fn cancel_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
    path: web::Path<String>,
) -> HttpResponse {
    let session = match require_session(&req, &state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let Some(kind) = parse_kind(&path) else {
        return not_found_page(&req, &state, theme, "Unknown content type.");
    };

    {
        let mut panel = lock(&session.panel);
        match kind {
            ResourceKind::Post => panel.posts.cancel(),
            ResourceKind::Project => panel.projects.cancel(),
        }
    }
    settle_and_redirect(&session, kind)
}

async fn save<R: Resource>(
    state: &AppState,
    session: &AdminSession,
    form: R::Form,
) -> HttpResponse {
    let today = Local::now().date_naive();
    let result = driver::submit::<R>(
        state.api.as_ref(),
        &session.credentials,
        &session.panel,
        form,
        today,
    )
    .await;

    finish_action(state, session, R::KIND, result)
}

#[post("/admin/posts")]
pub async fn save_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<PostForm>,
) -> HttpResponse {
    match require_session(&req, &state) {
        Ok(session) => save::<BlogPost>(&state, &session, form.into_inner()).await,
        Err(resp) => resp,
    }
}

#[post("/admin/projects")]
pub async fn save_project(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ProjectForm>,
) -> HttpResponse {
    match require_session(&req, &state) {
        Ok(session) => save::<Project>(&state, &session, form.into_inner()).await,
        Err(resp) => resp,
    }
}

async fn remove<R: Resource>(state: &AppState, session: &AdminSession, id: &str) -> HttpResponse {
    let result =
        driver::delete::<R>(state.api.as_ref(), &session.credentials, &session.panel, id).await;

    finish_action(state, session, R::KIND, result)
}

#[post("/admin/{kind}/{id}/delete")]
pub async fn delete_item(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let session = match require_session(&req, &state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let (kind, id) = path.into_inner();
    let Some(kind) = parse_kind(&kind) else {
        return not_found_page(&req, &state, theme, "Unknown content type.");
    };

    match kind {
        ResourceKind::Post => remove::<BlogPost>(&state, &session, &id).await,
        ResourceKind::Project => remove::<Project>(&state, &session, &id).await,
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard)
        .service(new_item)
        .service(edit_item)
        .service(cancel_edit)
        .service(save_post)
        .service(save_project)
        .service(delete_item);
}
