pub use mailer::*;
pub use session::*;
pub use theme::*;

mod mailer;
mod session;
mod theme;
