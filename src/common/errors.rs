use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the content API.
///
/// Callers only ever show [`ApiError::user_message`]; the variants exist so
/// that logs and the session guard can tell the cases apart.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never got a response (DNS, connect, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{message} (Status {status})")]
    Status { status: StatusCode, message: String },

    /// A success response whose body is not the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Text shown inline in place of the expected content.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(e) => e.to_string(),
            Self::Status { message, .. } => message.clone(),
            Self::Decode(msg) => msg.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Another request is still in progress")]
    Busy,

    #[error("Nothing is being edited")]
    NotEditing,

    #[error("{0} not found")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Email relay is not configured")]
    NotConfigured,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Relay rejected the message: {1} (Status {0})")]
    Rejected(StatusCode, String),
}
