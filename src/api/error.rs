use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    #[error("resource not found")]
    NotFound,
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The API answered but reported an `error` field.
    #[error("{0}")]
    Application(String),
}

impl ApiError {
    /// Message shown to the user for this failure. Application errors are
    /// shown verbatim, everything else falls back to `generic`.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            Self::Application(message) => message.clone(),
            _ => generic.to_owned(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) if status.as_u16() == 404 => Self::NotFound,
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Transport(error.to_string()),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
