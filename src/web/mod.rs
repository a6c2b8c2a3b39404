//! Server-rendered pages and the admin panel.

pub mod content;
pub mod extractors;
pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod middleware;
pub mod security;
pub mod state;
pub mod templates;

pub use handlers::configure;
pub use handlers::public::not_found;
pub use middleware::SecurityHeaders;
pub use state::AppState;
