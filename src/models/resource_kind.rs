use serde::{Deserialize, Serialize};

/// The two server-managed entity types the admin panel can edit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Post,
    Project,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Project => "project",
        }
    }

    /// Plural segment used in admin URLs (`/admin/posts/...`).
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Post => "posts",
            Self::Project => "projects",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Post => "Blog Post",
            Self::Project => "Project",
        }
    }
}

impl Default for ResourceKind {
    fn default() -> Self {
        Self::Post
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "post" | "posts" | "blogs" => Ok(Self::Post),
            "project" | "projects" => Ok(Self::Project),
            _ => Err(format!("invalid resource kind: {}", s)),
        }
    }
}
