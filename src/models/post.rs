use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A blog post as returned by the content API.
///
/// The API stores the image under `image`, while records created by older
/// clients only carry `thumbnail`; [`BlogPost::image_url`] reads whichever
/// one is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl BlogPost {
    pub fn image_url(&self) -> &str {
        self.image
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.thumbnail.as_deref())
            .unwrap_or_default()
    }

    /// Day the server created the record, if the timestamp parses.
    pub fn created_on(&self) -> Option<NaiveDate> {
        let raw = self.created_at.as_deref()?.trim();

        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    pub fn created_label(&self) -> String {
        self.created_on()
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "No date".to_string())
    }

    /// Excerpt cut to `max` characters with a trailing ellipsis.
    pub fn short_excerpt(&self, max: usize) -> String {
        if self.excerpt.chars().count() > max {
            let cut: String = self.excerpt.chars().take(max).collect();
            format!("{cut}...")
        } else {
            self.excerpt.clone()
        }
    }

    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle)
            || self.excerpt.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Request body for creating or updating a post. Never carries an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub image: String,
    pub category: String,
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostEnvelope {
    pub post: Option<BlogPost>,
}

pub const ALL_TAGS: &str = "All";

/// `All` followed by every tag in first-seen order.
pub fn tag_filters(posts: &[BlogPost]) -> Vec<String> {
    let mut tags = vec![ALL_TAGS.to_string()];
    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Posts matching both the search text and the selected tag.
pub fn filter_posts<'a>(posts: &'a [BlogPost], query: &str, tag: &str) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|p| p.matches_search(query))
        .filter(|p| tag.is_empty() || tag == ALL_TAGS || p.has_tag(tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(json: serde_json::Value) -> BlogPost {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn decodes_loose_server_record() {
        let p = post(serde_json::json!({
            "_id": "abc",
            "title": "Intro",
            "tags": null,
            "readTime": "5 min read",
            "userId": "u1",
            "createdAt": "2024-03-02T10:11:12.000Z"
        }));

        assert_eq!(p.id, "abc");
        assert!(p.tags.is_empty());
        assert_eq!(p.read_time, "5 min read");
        assert_eq!(p.user_id.as_deref(), Some("u1"));
        assert_eq!(p.created_on(), NaiveDate::from_ymd_opt(2024, 3, 2));
        assert_eq!(p.created_label(), "Mar 2, 2024");
    }

    #[test]
    fn image_falls_back_to_thumbnail() {
        let p = post(serde_json::json!({"_id": "1", "image": "", "thumbnail": "t.png"}));
        assert_eq!(p.image_url(), "t.png");

        let p = post(serde_json::json!({"_id": "1"}));
        assert_eq!(p.image_url(), "");
        assert_eq!(p.created_label(), "No date");
    }

    #[test]
    fn short_excerpt_counts_characters() {
        let mut p = post(serde_json::json!({"_id": "1"}));
        p.excerpt = "é".repeat(130);
        let short = p.short_excerpt(120);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), 123);

        p.excerpt = "short".into();
        assert_eq!(p.short_excerpt(120), "short");
    }

    #[test]
    fn search_covers_title_excerpt_and_tags() {
        let p = post(serde_json::json!({
            "_id": "1",
            "title": "Rust on the server",
            "excerpt": "Actix in production",
            "tags": ["Backend", "Web"]
        }));

        assert!(p.matches_search("rust"));
        assert!(p.matches_search("PRODUCTION"));
        assert!(p.matches_search("back"));
        assert!(p.matches_search("  "));
        assert!(!p.matches_search("python"));
        assert!(p.has_tag("Web"));
        assert!(!p.has_tag("web"));
    }

    #[test]
    fn tag_filters_keep_first_seen_order() {
        let posts = vec![
            post(serde_json::json!({"_id": "1", "tags": ["Rust", "Web"]})),
            post(serde_json::json!({"_id": "2", "tags": ["Cloud", "Rust"]})),
        ];

        assert_eq!(tag_filters(&posts), vec!["All", "Rust", "Web", "Cloud"]);
        assert_eq!(tag_filters(&[]), vec!["All"]);
    }

    #[test]
    fn filter_combines_search_and_tag() {
        let posts = vec![
            post(serde_json::json!({"_id": "1", "title": "Actix tips", "tags": ["Rust"]})),
            post(serde_json::json!({"_id": "2", "title": "Scaling pods", "tags": ["Cloud"]})),
            post(serde_json::json!({"_id": "3", "title": "Actix on k8s", "tags": ["Cloud"]})),
        ];

        let ids = |found: Vec<&BlogPost>| found.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(filter_posts(&posts, "", "All")), vec!["1", "2", "3"]);
        assert_eq!(ids(filter_posts(&posts, "actix", "")), vec!["1", "3"]);
        assert_eq!(ids(filter_posts(&posts, "actix", "Cloud")), vec!["3"]);
        assert!(filter_posts(&posts, "python", "All").is_empty());
    }
}
