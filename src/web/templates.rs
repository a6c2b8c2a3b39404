use actix_web::HttpRequest;
use askama::Template;
use chrono::{Datelike, Utc};

use crate::admin::{PostForm, ProjectForm};
use crate::models::{BlogPost, ContactMessage, Project};
use crate::services::ThemeState;

use crate::web::content::{Card, Milestone, Offering, Person, Testimonial};

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

const NAV: [(&str, &str); 5] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Portfolio", "/portfolio"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

/// Everything the shared page shell needs.
pub struct Layout {
    pub dark: bool,
    pub theme: &'static str,
    pub nav: Vec<NavLink>,
    pub signed_in: bool,
    pub current_path: String,
    pub year: i32,
}

impl Layout {
    pub fn new(theme: ThemeState, req: &HttpRequest, signed_in: bool) -> Self {
        let path = req.path();
        let nav = NAV
            .iter()
            .map(|&(label, href)| NavLink {
                label,
                href,
                active: if href == "/" {
                    path == "/"
                } else {
                    path == href || path.starts_with(&format!("{href}/"))
                },
            })
            .collect();

        let current_path = match req.query_string() {
            "" => path.to_string(),
            query => format!("{path}?{query}"),
        };

        Self {
            dark: theme.is_dark(),
            theme: theme.theme().as_str(),
            nav,
            signed_in,
            current_path,
            year: Utc::now().year(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub features: &'static [Card],
    pub services: &'static [Offering],
    pub process: &'static [Card],
    pub testimonials: &'static [Testimonial],
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
    pub values: &'static [Card],
    pub skills: &'static [&'static str],
    pub team: &'static [Person],
    pub milestones: &'static [Milestone],
}

#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate {
    pub layout: Layout,
    pub projects: Vec<Project>,
    pub error: Option<String>,
}

pub struct TagChip {
    pub name: String,
    pub href: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub layout: Layout,
    pub posts: Vec<BlogPost>,
    pub tags: Vec<TagChip>,
    pub query: String,
    pub tag: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "blog_detail.html")]
pub struct BlogDetailTemplate {
    pub layout: Layout,
    pub post: Option<BlogPost>,
    pub paragraphs: Vec<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub form: ContactMessage,
    pub sent: bool,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub layout: Layout,
    pub email: String,
    pub error: Option<String>,
}

pub struct PostRow {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image: Option<String>,
    pub author: String,
    pub created: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

pub struct ProjectRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
}

/// One tab of the admin screen: list plus optional open form.
pub struct AdminTab<Row, Form> {
    pub loading: bool,
    pub error: Option<String>,
    pub rows: Vec<Row>,
    pub form: Option<FormView<Form>>,
}

pub struct FormView<Form> {
    pub heading: String,
    pub submit_label: &'static str,
    pub form: Form,
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub layout: Layout,
    pub email: String,
    pub tab: &'static str,
    pub success: Option<String>,
    pub posts: AdminTab<PostRow, PostForm>,
    pub projects: AdminTab<ProjectRow, ProjectForm>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
    pub message: String,
}
