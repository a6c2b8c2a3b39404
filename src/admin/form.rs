use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{BlogPost, PostDraft, Project, ProjectDraft};

pub const DEFAULT_CATEGORY: &str = "uncategorized";
const DATE_FMT: &str = "%Y-%m-%d";

/// Splits a comma-separated field into trimmed, non-empty entries,
/// keeping their order.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// HTML checkboxes are absent when unchecked and `on` when checked.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        raw.as_deref().map(str::trim),
        Some("on" | "true" | "1" | "yes")
    ))
}

fn draft_date(existing: Option<&str>, today: NaiveDate) -> String {
    existing
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| today.format(DATE_FMT).to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub featured: bool,
    #[serde(default)]
    pub category: String,
}

impl PostForm {
    /// Builds the request body. Updates keep the post's original date;
    /// creates are stamped with `today`.
    pub fn to_draft(&self, editing: Option<&BlogPost>, today: NaiveDate) -> PostDraft {
        let category = self.category.trim();

        PostDraft {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            date: draft_date(editing.map(|p| p.date.as_str()), today),
            read_time: self.read_time.clone(),
            tags: split_list(&self.tags),
            image: self.thumbnail.clone(),
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            featured: self.featured,
        }
    }
}

impl From<&BlogPost> for PostForm {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            read_time: post.read_time.clone(),
            tags: join_list(&post.tags),
            thumbnail: post.image_url().to_string(),
            featured: post.featured,
            category: post.category.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub technologies: String,
}

impl ProjectForm {
    pub fn to_draft(&self, editing: Option<&Project>, today: NaiveDate) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            thumbnail: self.thumbnail.clone(),
            live_url: self.live_url.clone(),
            github_url: self.github_url.clone(),
            technologies: split_list(&self.technologies),
            date: draft_date(editing.map(|p| p.date.as_str()), today),
        }
    }
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            thumbnail: project.thumbnail.clone(),
            live_url: project.live_url.clone(),
            github_url: project.github_url.clone().unwrap_or_default(),
            technologies: join_list(&project.technologies),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn split_list_trims_and_drops_empty_segments() {
        assert_eq!(split_list("x, y"), vec!["x", "y"]);
        assert_eq!(split_list(" React ,, Node.js ,"), vec!["React", "Node.js"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn new_post_gets_today_and_default_category() {
        let form = PostForm {
            title: "Intro".into(),
            tags: "x, y".into(),
            thumbnail: "cover.png".into(),
            ..Default::default()
        };

        let draft = form.to_draft(None, today());
        assert_eq!(draft.tags, vec!["x", "y"]);
        assert_eq!(draft.date, "2025-06-01");
        assert_eq!(draft.category, DEFAULT_CATEGORY);
        assert_eq!(draft.image, "cover.png");
    }

    #[test]
    fn edited_post_keeps_original_date() {
        let post: BlogPost = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "title": "Old",
            "date": "2023-01-09",
            "tags": ["a", "b"],
            "thumbnail": "t.png",
            "category": "news"
        }))
        .unwrap();

        let form = PostForm::from(&post);
        assert_eq!(form.tags, "a, b");
        assert_eq!(form.thumbnail, "t.png");
        assert_eq!(form.category, "news");

        let draft = form.to_draft(Some(&post), today());
        assert_eq!(draft.date, "2023-01-09");
        assert_eq!(draft.tags, post.tags);
    }

    #[test]
    fn checkbox_accepts_html_values() {
        let form: PostForm = serde_json::from_value(serde_json::json!({"featured": "on"})).unwrap();
        assert!(form.featured);

        let form: PostForm = serde_json::from_value(serde_json::json!({"title": "t"})).unwrap();
        assert!(!form.featured);
    }

    #[test]
    fn project_form_round_trips_technologies() {
        let form = ProjectForm {
            title: "Shop".into(),
            technologies: "React, Node.js, MongoDB".into(),
            ..Default::default()
        };
        let draft = form.to_draft(None, today());
        assert_eq!(draft.technologies, vec!["React", "Node.js", "MongoDB"]);
        assert_eq!(draft.github_url, "");
    }
}
