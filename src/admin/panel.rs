use crate::models::{BlogPost, Project, ResourceKind};

use super::workflow::CrudWorkflow;

/// The item an open form is updating, keyed by resource kind.
#[derive(Debug, Clone, PartialEq)]
pub enum EditingItem {
    Post(BlogPost),
    Project(Project),
}

impl EditingItem {
    pub fn title(&self) -> &str {
        match self {
            Self::Post(p) => &p.title,
            Self::Project(p) => &p.title,
        }
    }
}

/// Admin screen state of one signed-in session: an independent workflow
/// per resource kind plus the selected tab.
#[derive(Debug, Clone, Default)]
pub struct AdminPanel {
    pub posts: CrudWorkflow<BlogPost>,
    pub projects: CrudWorkflow<Project>,
    active: ResourceKind,
    settled: bool,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ResourceKind {
        self.active
    }

    pub fn select(&mut self, kind: ResourceKind) {
        self.active = kind;
    }

    /// Item the `kind` form is updating. `None` while creating or with no
    /// form open.
    pub fn editing(&self, kind: ResourceKind) -> Option<EditingItem> {
        match kind {
            ResourceKind::Post => self.posts.editing_item().cloned().map(EditingItem::Post),
            ResourceKind::Project => self
                .projects
                .editing_item()
                .cloned()
                .map(EditingItem::Project),
        }
    }

    pub fn is_editing(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Post => self.posts.is_editing(),
            ResourceKind::Project => self.projects.is_editing(),
        }
    }

    /// Marks the lists as just refreshed by an admin action, so the next
    /// page view shows them (and any error) as they are.
    pub fn mark_settled(&mut self) {
        self.settled = true;
    }

    /// Returns the settled mark and clears it.
    pub fn take_settled(&mut self) -> bool {
        std::mem::take(&mut self.settled)
    }

    pub fn detach_all(&mut self) {
        self.posts.detach();
        self.projects.detach();
    }
}
