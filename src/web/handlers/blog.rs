use actix_web::http::StatusCode;
use actix_web::{get, web, HttpRequest, Responder};

use crate::models::{filter_posts, tag_filters, BlogPost, ALL_TAGS};
use crate::services::ThemeState;
use crate::web::forms::BlogQuery;
use crate::web::handlers::public::layout;
use crate::web::helpers::{render, render_with_status};
use crate::web::state::AppState;
use crate::web::templates::{BlogDetailTemplate, BlogTemplate, TagChip};

fn tag_href(tag: &str, query: &str) -> String {
    let mut params = Vec::new();
    if tag != ALL_TAGS {
        params.push(format!("tag={}", urlencoding::encode(tag)));
    }
    if !query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(query)));
    }

    if params.is_empty() {
        "/blog".to_string()
    } else {
        format!("/blog?{}", params.join("&"))
    }
}

fn tag_chips(posts: &[BlogPost], selected: &str, query: &str) -> Vec<TagChip> {
    tag_filters(posts)
        .into_iter()
        .map(|name| TagChip {
            href: tag_href(&name, query),
            active: name == selected,
            name,
        })
        .collect()
}

/// Blank lines separate paragraphs.
fn paragraphs(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[get("/blog")]
pub async fn blog_index(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
    query: web::Query<BlogQuery>,
) -> impl Responder {
    let search = query.q.as_deref().map(str::trim).unwrap_or_default().to_string();
    let tag = query
        .tag
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(ALL_TAGS)
        .to_string();

    let (all, error) = match state.api.list_posts(None).await {
        Ok(posts) => (posts, None),
        Err(e) => {
            crate::log_err!("list posts", e);
            (Vec::new(), Some(e.user_message()))
        }
    };

    let posts = filter_posts(&all, &search, &tag)
        .into_iter()
        .cloned()
        .collect();

    render(BlogTemplate {
        layout: layout(&req, &state, theme),
        tags: tag_chips(&all, &tag, &search),
        posts,
        query: search,
        tag,
        error,
    })
}

#[get("/blog/{id}")]
pub async fn blog_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    theme: ThemeState,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.api.get_post(&id).await {
        Ok(post) => render(BlogDetailTemplate {
            layout: layout(&req, &state, theme),
            paragraphs: paragraphs(&post.content),
            post: Some(post),
            error: None,
        }),
        Err(e) => {
            crate::log_err!(format!("get post {id}"), e);
            let status = if e.is_not_found() {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            render_with_status(
                status,
                BlogDetailTemplate {
                    layout: layout(&req, &state, theme),
                    post: None,
                    paragraphs: Vec::new(),
                    error: Some(e.user_message()),
                },
            )
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(blog_index).service(blog_detail);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_links_keep_the_search() {
        assert_eq!(tag_href("All", ""), "/blog");
        assert_eq!(tag_href("All", "rust"), "/blog?q=rust");
        assert_eq!(tag_href("AI & ML", "deep nets"), "/blog?tag=AI%20%26%20ML&q=deep%20nets");
    }

    #[test]
    fn content_splits_on_blank_lines() {
        let text = "First line\nstill first\r\n\r\nSecond\n\n\n\nThird  ";
        assert_eq!(
            paragraphs(text),
            vec!["First line\nstill first", "Second", "Third"]
        );
        assert!(paragraphs("   ").is_empty());
    }
}
