//! Admin CRUD for blog posts and projects.

pub mod driver;
mod form;
mod panel;
mod resource;
mod workflow;

pub use driver::AdminError;
pub use form::{join_list, split_list, PostForm, ProjectForm, DEFAULT_CATEGORY};
pub use panel::{AdminPanel, EditingItem};
pub use resource::Resource;
pub use workflow::{CrudWorkflow, EditMode, Outcome, Submission, Ticket, WorkflowState};
